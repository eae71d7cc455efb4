use std::io;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, UndirectError>;

/// Errors produced while reading, transforming, or writing graphs.
#[derive(Debug, Error)]
pub enum UndirectError {
    /// I/O failure on the input or output stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    /// Malformed file header or banner.
    #[error("format error: {0}")]
    Format(String),
    /// Invalid caller-supplied option.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
