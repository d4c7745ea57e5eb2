//! Error types for file I/O operations.

use thiserror::Error;

/// Error types for reading and enumeration.
///
/// Each variant represents a specific failure mode in the I/O layer.
#[derive(Error, Debug)]
pub enum IoError {
    /// File or directory does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// Enumeration root exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// File exceeds the configured size limit.
    #[error("file too large: {0} bytes (limit: {1})")]
    TooLarge(u64, u64),

    /// File contains binary content (NULL bytes detected).
    #[error("binary file detected")]
    BinaryFile,

    /// Low-level I/O error from std::io.
    #[error("io error: {0}")]
    System(#[from] std::io::Error),
}
