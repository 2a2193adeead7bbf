//! Cross-cutting error types for newsdesk.
//!
//! Domain-specific errors (`StoreError`, `UploadError`, ...) live in their
//! respective crates. The binary converges everything into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any newsdesk crate.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// A string did not name a known enum variant.
    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    /// A publication date was not a valid `YYYY-MM-DD` calendar date.
    #[error("Invalid publication date '{0}'")]
    InvalidDate(String),
}
