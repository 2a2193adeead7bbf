//! The operations consumers perform on the article collection.
//!
//! Views and the editor take `&mut impl ArticleOps` instead of a concrete
//! store, which is also how tests substitute a recording double.

use desk_core::entities::{Article, ArticleFields};
use desk_core::updates::ArticleUpdate;

use crate::error::StoreError;

pub trait ArticleOps {
    /// Current snapshot of the collection, newest-created first.
    fn articles(&self) -> &[Article];

    /// Create an article with a fresh id and prepend it.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the new collection cannot be persisted.
    fn add(&mut self, fields: ArticleFields) -> Result<Article, StoreError>;

    /// Shallow-merge `update` into the article with `id`.
    ///
    /// Returns `Ok(false)` and changes nothing when `id` is unknown.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the new collection cannot be persisted.
    fn update(&mut self, id: &str, update: &ArticleUpdate) -> Result<bool, StoreError>;

    /// Remove the article with `id`. `Ok(false)` when it is not present.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the new collection cannot be persisted.
    fn delete(&mut self, id: &str) -> Result<bool, StoreError>;

    /// Flip the publish flag of the article with `id`. `Ok(false)` when unknown.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the new collection cannot be persisted.
    fn toggle_publish(&mut self, id: &str) -> Result<bool, StoreError>;

    /// Ask the host shell to show the live-site preview of `id`. No state change.
    fn goto_article(&mut self, id: &str);

    fn find(&self, id: &str) -> Option<&Article> {
        self.articles().iter().find(|a| a.id == id)
    }
}
