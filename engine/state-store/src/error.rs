//! Error types for the state store

use thiserror::Error;

/// Result type alias for state store operations
pub type Result<T> = std::result::Result<T, StateStoreError>;

/// Errors that can occur while persisting or loading tracker state
#[derive(Error, Debug)]
pub enum StateStoreError {
    /// I/O errors (file operations)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
