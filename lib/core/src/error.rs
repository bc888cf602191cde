use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Transform or query attempted before any successful fit.
    #[error("Encoder is not fitted")]
    NotFitted,

    /// A vector reached the index with a width other than the one it was built for.
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Vectors and item references passed to an index build are not aligned 1:1.
    #[error("Index build misaligned: {vectors} vectors for {refs} item references")]
    LengthMismatch { vectors: usize, refs: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
