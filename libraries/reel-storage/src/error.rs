/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
///
/// Only catalogue loading can fail this way. Store operations report
/// domain outcomes through `reel_core::ReelError`.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Catalogue row does not have exactly `title | id | tags`
    #[error("Malformed catalogue record on line {line}: expected 3 fields, found {fields}")]
    MalformedRecord { line: usize, fields: usize },

    /// I/O error
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// Create a malformed record error
    pub fn malformed(line: usize, fields: usize) -> Self {
        Self::MalformedRecord { line, fields }
    }
}
