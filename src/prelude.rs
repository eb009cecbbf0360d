pub use crate::error::{Error, Result};
pub use crate::hash_table::{
    ChainedHashTable, ConstantHash, ElementHash, HashCode, HashStrategy, Position,
};
pub use crate::linked_lists::SinglyLinkedList;
pub use crate::traits::{HashTable, Sequence};
