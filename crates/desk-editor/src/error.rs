//! Image upload error types.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    /// One file of the batch could not be read; the whole batch is dropped.
    #[error("Failed to read image '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The upload was cancelled before the batch completed.
    #[error("Image upload was cancelled")]
    Cancelled,

    /// A read task panicked.
    #[error("Image read task failed: {0}")]
    Task(String),
}

impl From<tokio::task::JoinError> for UploadError {
    fn from(error: tokio::task::JoinError) -> Self {
        if error.is_cancelled() {
            Self::Cancelled
        } else {
            Self::Task(error.to_string())
        }
    }
}
