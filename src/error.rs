use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// Rejected before any element was touched.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A broken internal invariant. Seeing this means a bug, not bad input.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),
}
