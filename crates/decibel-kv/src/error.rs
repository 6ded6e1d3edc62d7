//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the blob store.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the store.
    #[error("Failed to open store: {0}")]
    Open(String),

    /// Key contains characters outside `[A-Za-z0-9._-]` or is empty.
    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("Store operation failed: {0}")]
    Io(#[from] std::io::Error),
}
