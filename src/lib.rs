//! A singly linked list and a fixed-size hash table that chains colliding
//! values through it.
//!
//! The table never resizes: its bucket count is the const parameter `N`, and
//! a value's bucket is its [`HashCode`](hash_table::HashCode) (or the
//! table's [`HashStrategy`](hash_table::HashStrategy)) modulo `N`.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod prelude;

pub mod error;
pub mod hash_table;
pub mod linked_lists;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use error::{Error, Result};
pub use hash_table::{ChainedHashTable, Position, SeparateChainingTable};
pub use linked_lists::SinglyLinkedList;

#[cfg(test)]
pub(crate) fn init_test_logger() {
    use std::sync::Once;

    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .parse_default_env()
            .try_init();
    });
}
