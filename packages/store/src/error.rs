//! Error types for store operations.
//!
//! Only storage and configuration problems are errors. A malformed persisted
//! document is recovered by falling back to the default, and an unknown id on
//! update/remove is a no-op, so neither shows up here.

use thiserror::Error;

/// Result type alias for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend read/write failure (quota exceeded, storage unavailable, I/O)
    #[error("Storage error: {0}")]
    Storage(String),

    /// The document could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Configuration file unreadable or invalid
    #[error("Config error: {0}")]
    Config(String),
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}

impl From<toml::de::Error> for StoreError {
    fn from(err: toml::de::Error) -> Self {
        StoreError::Config(err.to_string())
    }
}
