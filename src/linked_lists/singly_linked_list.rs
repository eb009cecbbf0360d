use alloc::boxed::Box;

use core::{
    fmt::{self, Debug, Formatter},
    iter::Extend,
};

use crate::{
    error::{Error, Result},
    traits::Sequence,
};

type Link<T> = Option<Box<SinglyLinkedListNode<T>>>;

/// A singly linked list that tracks its length.
///
/// Every node is owned by its predecessor (or by `head` for the first one),
/// so the chain can never form a cycle. Dropping the list releases the chain
/// in a loop rather than recursively.
pub struct SinglyLinkedList<T> {
    head: Link<T>,
    len: usize,
}

struct SinglyLinkedListNode<T> {
    value: T,
    next: Link<T>,
}

impl<T> SinglyLinkedList<T> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts an element at the beginning of the list
    pub fn insert_front(&mut self, value: T) {
        let next = self.head.take();
        self.head = Some(Box::new(SinglyLinkedListNode { value, next }));
        self.len += 1;
    }

    /// Inserts `value` so that it ends up at `position`. The element that was
    /// there, and everything after it, shifts one place towards the tail.
    pub fn insert_at(&mut self, position: usize, value: T) -> Result<()> {
        if position > self.len {
            return Err(Error::InvalidPosition {
                position,
                len: self.len,
            });
        }
        let link = self.link_mut(position);
        let next = link.take();
        *link = Some(Box::new(SinglyLinkedListNode { value, next }));
        self.len += 1;
        Ok(())
    }

    /// Inserts an element at the end of the list
    pub fn insert_back(&mut self, value: T) {
        let link = self.link_mut(self.len);
        *link = Some(Box::new(SinglyLinkedListNode { value, next: None }));
        self.len += 1;
    }

    pub fn remove_front(&mut self) -> Result<T> {
        let node = self.head.take().ok_or(Error::EmptyContainer)?;
        let SinglyLinkedListNode { value, next } = *node;
        self.head = next;
        self.len -= 1;
        Ok(value)
    }

    pub fn remove_at(&mut self, position: usize) -> Result<T> {
        if position >= self.len {
            return Err(Error::InvalidPosition {
                position,
                len: self.len,
            });
        }
        let value = Self::unlink(self.link_mut(position));
        self.len -= 1;
        Ok(value)
    }

    pub fn remove_back(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.remove_at(self.len - 1)
    }

    pub fn clear(&mut self) {
        let mut head = self.head.take();
        while let Some(mut node) = head {
            head = node.next.take();
        }
        self.len = 0;
    }

    pub(crate) fn iter(&self) -> Iter<'_, T> {
        Iter {
            node: self.head.as_deref(),
        }
    }

    /// The link owning the node at `position`; `position == len` yields the
    /// empty link after the tail.
    fn link_mut(&mut self, position: usize) -> &mut Link<T> {
        debug_assert!(position <= self.len);
        let mut link = &mut self.head;
        for _ in 0..position {
            match link {
                Some(node) => link = &mut node.next,
                None => unreachable!("list is shorter than its length"),
            }
        }
        link
    }

    /// Detaches the node owned by `link` and returns its value.
    fn unlink(link: &mut Link<T>) -> T {
        match link.take() {
            Some(node) => {
                let SinglyLinkedListNode { value, next } = *node;
                *link = next;
                value
            }
            None => unreachable!("unlinking past the tail"),
        }
    }
}

impl<T: PartialEq> SinglyLinkedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.iter().any(|v| v == value)
    }

    pub fn position_of(&self, value: &T) -> Result<usize> {
        if self.is_empty() {
            return Err(Error::EmptyContainer);
        }
        self.iter()
            .position(|v| v == value)
            .ok_or(Error::ValueNotFound)
    }

    /// Removes the first element equal to `value`.
    pub fn remove(&mut self, value: &T) -> Result<T> {
        let position = self.position_of(value)?;
        self.remove_at(position)
    }
}

impl<T> Default for SinglyLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SinglyLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Debug> Debug for SinglyLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let len = self.len;
        write!(f, "SinglyLinkedList {{ length: {len}, items: {{")?;
        let mut iter = self.iter();
        if let Some(elem) = iter.next() {
            write!(f, "{elem:?}")?
        }
        for elem in iter {
            write!(f, ", {elem:?}")?;
        }
        write!(f, "}} }}")
    }
}

impl<T> FromIterator<T> for SinglyLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut lst = SinglyLinkedList::new();
        lst.extend(iter);
        lst
    }
}

/// Appends in iteration order.
impl<T> Extend<T> for SinglyLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let mut len = self.len;
        let mut tail = self.link_mut(len);
        for value in iter {
            tail = &mut tail
                .insert(Box::new(SinglyLinkedListNode { value, next: None }))
                .next;
            len += 1;
        }
        self.len = len;
    }
}

impl<T: PartialEq> Sequence<T> for SinglyLinkedList<T> {
    fn len(&self) -> usize {
        SinglyLinkedList::len(self)
    }
    fn position_of(&self, value: &T) -> Result<usize> {
        SinglyLinkedList::position_of(self, value)
    }
    fn contains(&self, value: &T) -> bool {
        SinglyLinkedList::contains(self, value)
    }
    fn insert_front(&mut self, value: T) {
        SinglyLinkedList::insert_front(self, value)
    }
    fn insert_at(&mut self, position: usize, value: T) -> Result<()> {
        SinglyLinkedList::insert_at(self, position, value)
    }
    fn insert_back(&mut self, value: T) {
        SinglyLinkedList::insert_back(self, value)
    }
    fn remove_front(&mut self) -> Result<T> {
        SinglyLinkedList::remove_front(self)
    }
    fn remove_at(&mut self, position: usize) -> Result<T> {
        SinglyLinkedList::remove_at(self, position)
    }
    fn remove_back(&mut self) -> Result<T> {
        SinglyLinkedList::remove_back(self)
    }
    fn remove(&mut self, value: &T) -> Result<T> {
        SinglyLinkedList::remove(self, value)
    }
}

pub(crate) use iters::*;
mod iters {
    use super::*;

    pub(crate) struct Iter<'a, T> {
        pub(super) node: Option<&'a SinglyLinkedListNode<T>>,
    }

    impl<'a, T> Iterator for Iter<'a, T> {
        type Item = &'a T;
        fn next(&mut self) -> Option<Self::Item> {
            self.node.map(|node| {
                self.node = node.next.as_deref();
                &node.value
            })
        }
    }
}
