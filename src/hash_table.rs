pub mod hash_code;
pub mod position;
pub mod separate_chaining;

pub use hash_code::{ConstantHash, ElementHash, HashCode, HashStrategy};
pub use position::Position;
pub use separate_chaining::{ChainedHashTable, SeparateChainingTable, DEFAULT_CAPACITY};
