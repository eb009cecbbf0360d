use core::{
    fmt::{self, Debug, Formatter},
    marker::PhantomData,
};

use log::{debug, trace};

use crate::{
    error::{Error, Result},
    hash_table::{
        hash_code::{ElementHash, HashStrategy},
        Position,
    },
    linked_lists::SinglyLinkedList,
    traits::{HashTable, Sequence},
};

/// Bucket count for callers without a preference.
pub const DEFAULT_CAPACITY: usize = 50;

pub type ChainedHashTable<T, const N: usize = DEFAULT_CAPACITY, H = ElementHash> =
    SeparateChainingTable<T, SinglyLinkedList<T>, H, N>;

/// This hashtable keeps `N` buckets, each a sequence of the values that hash
/// to it. The bucket array is fixed at `N` and never grows or rehashes.
///
/// A value is stored at most once, in the bucket `hash_of` picks for it, and
/// keeps its insertion order relative to the other values of that bucket.
pub struct SeparateChainingTable<T, B, H, const N: usize> {
    buckets: [B; N],
    hasher: H,
    marker: PhantomData<T>,
}

impl<T, B, H, const N: usize> SeparateChainingTable<T, B, H, N>
where
    T: PartialEq,
    B: Sequence<T> + Default,
    H: HashStrategy<T>,
{
    const NONZERO_CAPACITY: () = assert!(N > 0, "a hash table needs at least one bucket");

    pub fn with_hasher(hasher: H) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NONZERO_CAPACITY;
        Self {
            buckets: core::array::from_fn(|_| B::default()),
            hasher,
            marker: PhantomData,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn hash_of(&self, value: &T) -> usize {
        self.hasher.hash_code(value) % N
    }

    /// Appends `value` to its bucket unless the bucket already holds it.
    pub fn insert(&mut self, value: T) -> bool {
        let index = self.hash_of(&value);
        let bucket = &mut self.buckets[index];
        if bucket.contains(&value) {
            debug!("insert: bucket {index} already holds the value");
            return false;
        }
        bucket.insert_back(value);
        trace!("insert: bucket {index} now holds {}", bucket.len());
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.buckets[self.hash_of(value)].contains(value)
    }

    pub fn remove(&mut self, value: &T) -> Result<T> {
        let index = self.hash_of(value);
        let bucket = &mut self.buckets[index];
        if !bucket.contains(value) {
            debug!("remove: value absent from bucket {index}");
            return Err(Error::ValueNotFound);
        }
        trace!("remove: bucket {index}");
        bucket.remove(value)
    }

    /// Total number of values; walks every bucket.
    pub fn len(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(|bucket| bucket.is_empty())
    }

    /// Reports the bucket for `value`, that bucket's length and, when the
    /// value is stored, its position in the bucket.
    pub fn position_of(&self, value: &T) -> Position {
        let bucket = self.hash_of(value);
        let chain = &self.buckets[bucket];
        Position {
            bucket,
            bucket_len: chain.len(),
            index: chain.position_of(value).ok(),
        }
    }

    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            *bucket = B::default();
        }
    }
}

impl<T, B, H, const N: usize> SeparateChainingTable<T, B, H, N>
where
    T: PartialEq,
    B: Sequence<T> + Default,
    H: HashStrategy<T> + Default,
{
    pub fn new() -> Self {
        Self::with_hasher(H::default())
    }
}

impl<T, B, H, const N: usize> Default for SeparateChainingTable<T, B, H, N>
where
    T: PartialEq,
    B: Sequence<T> + Default,
    H: HashStrategy<T> + Default,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B, H, const N: usize> Debug for SeparateChainingTable<T, B, H, N>
where
    T: PartialEq,
    B: Sequence<T> + Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len: usize = self.buckets.iter().map(|bucket| bucket.len()).sum();
        write!(
            f,
            "HashTable {{ capacity: {N}, length: {len}, buckets: {{"
        )?;
        let mut occupied = self
            .buckets
            .iter()
            .enumerate()
            .filter(|(_, bucket)| !bucket.is_empty());
        if let Some((index, bucket)) = occupied.next() {
            write!(f, "{index}: {bucket:?}")?
        }
        for (index, bucket) in occupied {
            write!(f, ", {index}: {bucket:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T, B, H, const N: usize> FromIterator<T> for SeparateChainingTable<T, B, H, N>
where
    T: PartialEq,
    B: Sequence<T> + Default,
    H: HashStrategy<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<T, B, H, const N: usize> Extend<T> for SeparateChainingTable<T, B, H, N>
where
    T: PartialEq,
    B: Sequence<T> + Default,
    H: HashStrategy<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T, B, H, const N: usize> HashTable<T> for SeparateChainingTable<T, B, H, N>
where
    T: PartialEq,
    B: Sequence<T> + Default,
    H: HashStrategy<T>,
{
    fn capacity(&self) -> usize {
        N
    }
    fn hash_of(&self, value: &T) -> usize {
        SeparateChainingTable::hash_of(self, value)
    }
    fn insert(&mut self, value: T) -> bool {
        SeparateChainingTable::insert(self, value)
    }
    fn remove(&mut self, value: &T) -> Result<T> {
        SeparateChainingTable::remove(self, value)
    }
    fn contains(&self, value: &T) -> bool {
        SeparateChainingTable::contains(self, value)
    }
    fn len(&self) -> usize {
        SeparateChainingTable::len(self)
    }
    fn position_of(&self, value: &T) -> Position {
        SeparateChainingTable::position_of(self, value)
    }
}
