/// Failures reported by list and table operations.
///
/// Every variant is raised before the container is touched, so a failed call
/// leaves the container exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The operation needs at least one element.
    #[error("the list is empty")]
    EmptyContainer,

    /// The value was looked for and is not there.
    #[error("value not found")]
    ValueNotFound,

    /// A positional argument fell outside the range the operation accepts.
    #[error("position {position} is out of range for a list of length {len}")]
    InvalidPosition { position: usize, len: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
