use std::collections::VecDeque;

use chained_table::{Error, SinglyLinkedList};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Operation, OperationGenerator, Outcome, MIN_VALUES};

/// Values are drawn from a small range so duplicates are common.
const VALUE_RANGE: u16 = 32;

#[derive(Clone, Copy, Debug)]
pub enum SequenceOperation {
    InsertFront(u16),
    InsertAt(usize, u16),
    InsertBack(u16),
    RemoveFront,
    RemoveAt(usize),
    RemoveBack,
    Remove(u16),
    PositionOf(u16),
    Contains(u16),
    Len,
}

impl Operation for SequenceOperation {
    type Result = Outcome<u16>;
    type Target = SinglyLinkedList<u16>;

    fn apply(&self, lst: &mut Self::Target) -> Self::Result {
        match *self {
            Self::InsertFront(v) => {
                lst.insert_front(v);
                Outcome::Unit
            }
            Self::InsertAt(p, v) => match lst.insert_at(p, v) {
                Ok(()) => Outcome::Unit,
                Err(err) => Outcome::Failed(err),
            },
            Self::InsertBack(v) => {
                lst.insert_back(v);
                Outcome::Unit
            }
            Self::RemoveFront => lst.remove_front().into(),
            Self::RemoveAt(p) => lst.remove_at(p).into(),
            Self::RemoveBack => lst.remove_back().into(),
            Self::Remove(v) => lst.remove(&v).into(),
            Self::PositionOf(v) => match lst.position_of(&v) {
                Ok(p) => Outcome::Index(p),
                Err(err) => Outcome::Failed(err),
            },
            Self::Contains(v) => Outcome::Found(lst.contains(&v)),
            Self::Len => Outcome::Len(lst.len()),
        }
    }
}

pub struct SequenceOperationGenerator {
    rng: StdRng,
    data: VecDeque<u16>,
}

impl SequenceOperationGenerator {
    fn value(&mut self) -> u16 {
        self.rng.gen_range(0..VALUE_RANGE)
    }

    // one past the valid range now and then, to exercise the position checks
    fn position(&mut self, valid_end: usize) -> usize {
        self.rng.gen_range(0..=valid_end + 1)
    }

    fn first_index(&self, v: u16) -> Result<usize, Error> {
        if self.data.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.data
            .iter()
            .position(|x| *x == v)
            .ok_or(Error::ValueNotFound)
    }
}

impl OperationGenerator for SequenceOperationGenerator {
    type Operation = SequenceOperation;
    type ReferenceImpl = VecDeque<u16>;

    fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            data: VecDeque::new(),
        }
    }

    fn data(self) -> Self::ReferenceImpl {
        self.data
    }
}

impl Iterator for SequenceOperationGenerator {
    type Item = (SequenceOperation, Outcome<u16>);

    fn next(&mut self) -> Option<Self::Item> {
        // this prevents removals while there are too few values
        let choice = if self.data.len() > MIN_VALUES {
            self.rng.gen_range(0..10)
        } else {
            self.rng.gen_range(0..3)
        };
        let len = self.data.len();

        let item = match choice {
            0 => {
                let v = self.value();
                self.data.push_front(v);
                (SequenceOperation::InsertFront(v), Outcome::Unit)
            }
            1 => {
                let (p, v) = (self.position(len), self.value());
                let res = if p <= len {
                    self.data.insert(p, v);
                    Outcome::Unit
                } else {
                    Outcome::Failed(Error::InvalidPosition { position: p, len })
                };
                (SequenceOperation::InsertAt(p, v), res)
            }
            2 => {
                let v = self.value();
                self.data.push_back(v);
                (SequenceOperation::InsertBack(v), Outcome::Unit)
            }
            3 => {
                let res = self.data.pop_front().ok_or(Error::EmptyContainer);
                (SequenceOperation::RemoveFront, res.into())
            }
            4 => {
                let p = self.position(len.saturating_sub(1));
                let res = if p < len {
                    self.data.remove(p).map_or(Outcome::Unit, Outcome::Value)
                } else {
                    Outcome::Failed(Error::InvalidPosition { position: p, len })
                };
                (SequenceOperation::RemoveAt(p), res)
            }
            5 => {
                let res = self.data.pop_back().ok_or(Error::EmptyContainer);
                (SequenceOperation::RemoveBack, res.into())
            }
            6 => {
                let v = self.value();
                let res = match self.first_index(v) {
                    Ok(p) => self.data.remove(p).map_or(Outcome::Unit, Outcome::Value),
                    Err(err) => Outcome::Failed(err),
                };
                (SequenceOperation::Remove(v), res)
            }
            7 => {
                let v = self.value();
                let res = match self.first_index(v) {
                    Ok(p) => Outcome::Index(p),
                    Err(err) => Outcome::Failed(err),
                };
                (SequenceOperation::PositionOf(v), res)
            }
            8 => {
                let v = self.value();
                (SequenceOperation::Contains(v), Outcome::Found(self.data.contains(&v)))
            }
            9 => (SequenceOperation::Len, Outcome::Len(len)),
            _ => unreachable!(),
        };
        Some(item)
    }
}
