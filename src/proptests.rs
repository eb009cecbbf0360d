// Property tests for the list and the table, checked against std collections.

use crate::{
    error::Error,
    hash_table::{ChainedHashTable, HashCode, Position},
    linked_lists::SinglyLinkedList,
};
use proptest::prelude::*;
use std::collections::{HashSet, VecDeque};

#[derive(Clone, Debug)]
enum ListOp {
    InsertFront(u8),
    InsertBack(u8),
    InsertAt(usize, u8),
    RemoveFront,
    RemoveBack,
    RemoveAt(usize),
    Remove(u8),
    PositionOf(u8),
}

fn arb_list_op() -> impl Strategy<Value = ListOp> {
    // Small value and index ranges so collisions and edge positions are common.
    prop_oneof![
        (0u8..16).prop_map(ListOp::InsertFront),
        (0u8..16).prop_map(ListOp::InsertBack),
        (0usize..12, 0u8..16).prop_map(|(p, v)| ListOp::InsertAt(p, v)),
        Just(ListOp::RemoveFront),
        Just(ListOp::RemoveBack),
        (0usize..12).prop_map(ListOp::RemoveAt),
        (0u8..16).prop_map(ListOp::Remove),
        (0u8..16).prop_map(ListOp::PositionOf),
    ]
}

fn list_items(lst: &SinglyLinkedList<u8>) -> Vec<u8> {
    lst.iter().copied().collect()
}

// The model mirrors the documented error precedence: emptiness first, then
// range, then membership.
fn apply_model(model: &mut VecDeque<u8>, op: &ListOp) -> Result<Option<u8>, Error> {
    let len = model.len();
    match *op {
        ListOp::InsertFront(v) => {
            model.push_front(v);
            Ok(None)
        }
        ListOp::InsertBack(v) => {
            model.push_back(v);
            Ok(None)
        }
        ListOp::InsertAt(p, v) if p <= len => {
            model.insert(p, v);
            Ok(None)
        }
        ListOp::InsertAt(position, _) => Err(Error::InvalidPosition { position, len }),
        ListOp::RemoveFront => model.pop_front().map(Some).ok_or(Error::EmptyContainer),
        ListOp::RemoveBack => model.pop_back().map(Some).ok_or(Error::EmptyContainer),
        ListOp::RemoveAt(p) if p < len => Ok(model.remove(p)),
        ListOp::RemoveAt(position) => Err(Error::InvalidPosition { position, len }),
        ListOp::Remove(_) | ListOp::PositionOf(_) if len == 0 => Err(Error::EmptyContainer),
        ListOp::Remove(v) => {
            let p = model
                .iter()
                .position(|x| *x == v)
                .ok_or(Error::ValueNotFound)?;
            Ok(model.remove(p))
        }
        ListOp::PositionOf(v) => model
            .iter()
            .position(|x| *x == v)
            .map(|p| Some(p as u8))
            .ok_or(Error::ValueNotFound),
    }
}

fn apply_list(lst: &mut SinglyLinkedList<u8>, op: &ListOp) -> Result<Option<u8>, Error> {
    match *op {
        ListOp::InsertFront(v) => {
            lst.insert_front(v);
            Ok(None)
        }
        ListOp::InsertBack(v) => {
            lst.insert_back(v);
            Ok(None)
        }
        ListOp::InsertAt(p, v) => lst.insert_at(p, v).map(|()| None),
        ListOp::RemoveFront => lst.remove_front().map(Some),
        ListOp::RemoveBack => lst.remove_back().map(Some),
        ListOp::RemoveAt(p) => lst.remove_at(p).map(Some),
        ListOp::Remove(v) => lst.remove(&v).map(Some),
        ListOp::PositionOf(v) => lst.position_of(&v).map(|p| Some(p as u8)),
    }
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn list_matches_vecdeque(ops in proptest::collection::vec(arb_list_op(), 1..80)) {
        let mut lst = SinglyLinkedList::new();
        let mut model = VecDeque::new();
        for op in &ops {
            let expected = apply_model(&mut model, op);
            let actual = apply_list(&mut lst, op);
            prop_assert_eq!(actual, expected, "op {:?}", op);
            prop_assert_eq!(lst.len(), model.len());
            prop_assert_eq!(lst.is_empty(), model.is_empty());
        }
        prop_assert_eq!(list_items(&lst), model.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn insert_front_then_remove_front(items in proptest::collection::vec(any::<u8>(), 0..20), v in any::<u8>()) {
        let mut lst: SinglyLinkedList<u8> = items.iter().copied().collect();
        let before = list_items(&lst);
        lst.insert_front(v);
        prop_assert!(lst.contains(&v));
        prop_assert_eq!(lst.len(), before.len() + 1);
        prop_assert_eq!(lst.remove_front(), Ok(v));
        prop_assert_eq!(list_items(&lst), before);
    }

    #[test]
    fn insert_at_edges(items in proptest::collection::vec(any::<u8>(), 0..20), v in any::<u8>()) {
        let mut at_end: SinglyLinkedList<u8> = items.iter().copied().collect();
        let mut back: SinglyLinkedList<u8> = items.iter().copied().collect();
        let len = at_end.len();
        at_end.insert_at(len, v).unwrap();
        back.insert_back(v);
        prop_assert_eq!(list_items(&at_end), list_items(&back));

        let mut at_start: SinglyLinkedList<u8> = items.iter().copied().collect();
        let mut front: SinglyLinkedList<u8> = items.iter().copied().collect();
        at_start.insert_at(0, v).unwrap();
        front.insert_front(v);
        prop_assert_eq!(list_items(&at_start), list_items(&front));
    }

    #[test]
    fn remove_at_len_is_invalid(items in proptest::collection::vec(any::<u8>(), 0..20)) {
        let mut lst: SinglyLinkedList<u8> = items.iter().copied().collect();
        let len = lst.len();
        prop_assert_eq!(lst.remove_at(len), Err(Error::InvalidPosition { position: len, len }));
        prop_assert_eq!(lst.len(), len);
    }

    #[test]
    fn table_matches_hashset(
        inserts in proptest::collection::vec(-50i32..50, 0..60),
        removals in proptest::collection::vec(-50i32..50, 0..60),
    ) {
        let mut table = ChainedHashTable::<i32, 7>::new();
        let mut model = HashSet::new();
        let mut buckets: Vec<Vec<i32>> = vec![Vec::new(); 7];
        for v in &inserts {
            prop_assert_eq!(table.insert(*v), model.insert(*v));
            let bucket = &mut buckets[v.hash_code() % 7];
            if !bucket.contains(v) {
                bucket.push(*v);
            }
        }
        for v in &removals {
            let expected = if model.remove(v) { Ok(*v) } else { Err(Error::ValueNotFound) };
            prop_assert_eq!(table.remove(v), expected);
            buckets[v.hash_code() % 7].retain(|x| x != v);
        }
        prop_assert_eq!(table.len(), model.len());
        for v in -50i32..50 {
            prop_assert_eq!(table.contains(&v), model.contains(&v));
            let bucket = v.hash_code() % 7;
            prop_assert_eq!(
                table.position_of(&v),
                Position {
                    bucket,
                    bucket_len: buckets[bucket].len(),
                    index: buckets[bucket].iter().position(|x| *x == v),
                }
            );
        }
    }

    #[test]
    fn table_insert_twice_and_round_trip(
        seed in proptest::collection::vec("[a-z]{0,6}", 0..20),
        v in "[a-z]{0,6}",
    ) {
        let mut table: ChainedHashTable<String, 11> = seed.into_iter().collect();
        let len = table.len();
        let present = table.contains(&v);

        table.insert(v.clone());
        let after_first = table.len();
        prop_assert!(!table.insert(v.clone()));
        prop_assert_eq!(table.len(), after_first);
        prop_assert!(table.contains(&v));

        if !present {
            prop_assert_eq!(after_first, len + 1);
            prop_assert_eq!(table.remove(&v), Ok(v.clone()));
            prop_assert_eq!(table.len(), len);
            prop_assert!(!table.contains(&v));
        }
    }
}
