use core::fmt::{self, Display, Formatter};

/// Where a value is, or would be, stored in a table.
///
/// A snapshot taken at query time; it does not track later mutations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Bucket the value hashes to.
    pub bucket: usize,
    /// Length of that bucket when queried.
    pub bucket_len: usize,
    /// Position inside the bucket, if the value is present.
    pub index: Option<usize>,
}

impl Position {
    pub fn is_present(&self) -> bool {
        self.index.is_some()
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(
                f,
                "bucket {} [{} of {}]",
                self.bucket, index, self.bucket_len
            ),
            None => write!(f, "bucket {} [absent, {} stored]", self.bucket, self.bucket_len),
        }
    }
}
