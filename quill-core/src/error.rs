//! Error types for quill

use thiserror::Error;

/// Result type alias for quill operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for quill operations
#[derive(Error, Debug)]
pub enum Error {
    /// Command-line input that could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A pull request or branch context that could not be resolved
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Git error
    #[error("Git error: {0}")]
    Git(String),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}
