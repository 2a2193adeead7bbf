//! Storage error types for desk-store.

use thiserror::Error;

/// Errors from keyed storage and article persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing medium failed.
    #[error("Storage I/O failed for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored value is not valid JSON, or not the expected shape.
    #[error("Stored value under '{key}' could not be parsed: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized for writing.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The key cannot be used as a storage name.
    #[error("Invalid storage key '{0}'")]
    InvalidKey(String),
}
