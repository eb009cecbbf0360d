use crate::{error::Result, hash_table::Position};

/// High level hash table holding each value at most once.
pub trait HashTable<T> {
    /// Number of buckets; fixed for the table's lifetime.
    fn capacity(&self) -> usize;
    /// Bucket index for `value`, in `0..capacity()`.
    fn hash_of(&self, value: &T) -> usize;
    /// Returns `false` and leaves the table untouched if `value` is already
    /// present.
    fn insert(&mut self, value: T) -> bool;
    /// Removes `value` from its bucket and returns it.
    ///
    /// Fails with [`Error::ValueNotFound`](crate::Error::ValueNotFound) when
    /// the value is not stored; the table is left unchanged.
    fn remove(&mut self, value: &T) -> Result<T>;
    fn contains(&self, value: &T) -> bool;
    /// Total number of stored values, summed over every bucket.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Where `value` is, or would be, stored. Never fails.
    fn position_of(&self, value: &T) -> Position;
}
