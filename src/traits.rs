pub mod hash_table;
pub mod sequence;

pub use hash_table::HashTable;
pub use sequence::Sequence;
