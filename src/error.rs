//! Error types for prooftree

use thiserror::Error;

/// Result type alias for prooftree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in prooftree operations
#[derive(Error, Debug)]
pub enum Error {
    /// A structured record could not be encoded into bytes for hashing
    #[error("Encoding error: {0}")]
    Encoding(#[from] bincode::Error),

    /// A proof was requested for data whose digest is not in the tree
    #[error("Digest not in tree: {0}")]
    NotFound(String),
}
