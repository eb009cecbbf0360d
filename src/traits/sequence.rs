use crate::error::Result;

/// An ordered sequence addressed by position from its head.
///
/// All scans run from the head towards the tail, so "first occurrence" always
/// means the occurrence closest to the head.
pub trait Sequence<T: PartialEq> {
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Position of the first element equal to `value`.
    ///
    /// Fails with [`EmptyContainer`](crate::Error::EmptyContainer) before
    /// scanning an empty sequence and with
    /// [`ValueNotFound`](crate::Error::ValueNotFound) after a full scan.
    fn position_of(&self, value: &T) -> Result<usize>;
    fn contains(&self, value: &T) -> bool;

    fn insert_front(&mut self, value: T);
    /// Inserts so that `value` ends up at `position`; `position` may be
    /// `len()`, which appends.
    fn insert_at(&mut self, position: usize, value: T) -> Result<()>;
    fn insert_back(&mut self, value: T);

    fn remove_front(&mut self) -> Result<T>;
    fn remove_at(&mut self, position: usize) -> Result<T>;
    fn remove_back(&mut self) -> Result<T>;
    /// Removes and returns the first element equal to `value`.
    fn remove(&mut self, value: &T) -> Result<T>;
}
