//! Entity structs for newsdesk domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field names
//! are serialized in `camelCase`, which is the shape of the persisted
//! collection (`publicationDate`, `sizeBytes`, `dataUrl`).

mod article;
mod image;

pub use article::{Article, ArticleFields};
pub use image::ArticleImage;
