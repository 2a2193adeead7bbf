//! # desk-editor
//!
//! The article editor: one create/view/edit session at a time.
//!
//! - [`EditorForm`]: draft, touched flags, and the mode-dependent submit path
//! - [`validate`]: the per-field rules and their messages
//! - [`ImageUpload`]: reads a batch of image files into data URLs, all or nothing

pub mod draft;
pub mod error;
pub mod form;
pub mod upload;
pub mod validation;

pub use draft::Draft;
pub use error::UploadError;
pub use form::{EditorForm, EditorTarget, SubmitOutcome};
pub use upload::ImageUpload;
pub use validation::{FieldError, ValidationErrors, validate};
