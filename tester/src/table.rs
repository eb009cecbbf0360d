use chained_table::{ChainedHashTable, Error, Position};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{Operation, OperationGenerator, Outcome, MIN_VALUES};

pub const CAPACITY: usize = 13;

pub type TableUnderTest = ChainedHashTable<i64, CAPACITY>;

/// Negative values included so the sign-extending integer hash is exercised.
const VALUES: core::ops::Range<i64> = -64..64;

#[derive(Clone, Copy, Debug)]
pub enum TableOperation {
    Insert(i64),
    Remove(i64),
    Contains(i64),
    PositionOf(i64),
    Len,
}

impl Operation for TableOperation {
    type Result = Outcome<i64>;
    type Target = TableUnderTest;

    fn apply(&self, table: &mut Self::Target) -> Self::Result {
        match *self {
            Self::Insert(v) => Outcome::Inserted(table.insert(v)),
            Self::Remove(v) => table.remove(&v).into(),
            Self::Contains(v) => Outcome::Found(table.contains(&v)),
            Self::PositionOf(v) => Outcome::Position(table.position_of(&v)),
            Self::Len => Outcome::Len(table.len()),
        }
    }
}

/// Buckets kept as plain vectors, indexed by the value cast to `usize`.
#[derive(Debug)]
pub struct ReferenceTable {
    buckets: Vec<Vec<i64>>,
}

impl ReferenceTable {
    fn new() -> Self {
        Self {
            buckets: vec![Vec::new(); CAPACITY],
        }
    }

    fn bucket(v: i64) -> usize {
        v as usize % CAPACITY
    }

    fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    fn insert(&mut self, v: i64) -> bool {
        let bucket = &mut self.buckets[Self::bucket(v)];
        if bucket.contains(&v) {
            return false;
        }
        bucket.push(v);
        true
    }

    fn remove(&mut self, v: i64) -> Result<i64, Error> {
        let bucket = &mut self.buckets[Self::bucket(v)];
        let p = bucket
            .iter()
            .position(|x| *x == v)
            .ok_or(Error::ValueNotFound)?;
        Ok(bucket.remove(p))
    }

    fn position_of(&self, v: i64) -> Position {
        let bucket = Self::bucket(v);
        let chain = &self.buckets[bucket];
        Position {
            bucket,
            bucket_len: chain.len(),
            index: chain.iter().position(|x| *x == v),
        }
    }

    fn stored(&self, rng: &mut StdRng) -> Option<i64> {
        let len = self.len();
        if len == 0 {
            return None;
        }
        self.buckets.iter().flatten().nth(rng.gen_range(0..len)).copied()
    }
}

pub struct TableOperationGenerator {
    rng: StdRng,
    data: ReferenceTable,
}

impl TableOperationGenerator {
    // prefers values already in the table three times out of four
    fn value(&mut self) -> i64 {
        if self.rng.gen_bool(0.75) {
            if let Some(v) = self.data.stored(&mut self.rng) {
                return v;
            }
        }
        self.rng.gen_range(VALUES)
    }
}

impl OperationGenerator for TableOperationGenerator {
    type Operation = TableOperation;
    type ReferenceImpl = ReferenceTable;

    fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            data: ReferenceTable::new(),
        }
    }

    fn data(self) -> Self::ReferenceImpl {
        self.data
    }
}

impl Iterator for TableOperationGenerator {
    type Item = (TableOperation, Outcome<i64>);

    fn next(&mut self) -> Option<Self::Item> {
        let choice = if self.data.len() > MIN_VALUES {
            self.rng.gen_range(0..5)
        } else {
            0
        };

        let item = match choice {
            0 => {
                let v = self.rng.gen_range(VALUES);
                (TableOperation::Insert(v), Outcome::Inserted(self.data.insert(v)))
            }
            1 => {
                let v = self.value();
                (TableOperation::Remove(v), self.data.remove(v).into())
            }
            2 => {
                let v = self.value();
                let found = self.data.position_of(v).index.is_some();
                (TableOperation::Contains(v), Outcome::Found(found))
            }
            3 => {
                let v = self.value();
                (TableOperation::PositionOf(v), Outcome::Position(self.data.position_of(v)))
            }
            4 => (TableOperation::Len, Outcome::Len(self.data.len())),
            _ => unreachable!(),
        };
        Some(item)
    }
}
