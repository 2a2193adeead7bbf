//! Partial article update and its builder.
//!
//! Fields left as `None` are untouched when the update is applied (shallow
//! merge). The `id` is never part of an update.

use serde::Serialize;

use crate::entities::{Article, ArticleFields, ArticleImage};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ArticleImage>>,
}

impl ArticleUpdate {
    /// Whether applying this update would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.headline.is_none()
            && self.author.is_none()
            && self.body.is_none()
            && self.publication_date.is_none()
            && self.published.is_none()
            && self.images.is_none()
    }

    /// Merge the present fields into `article`.
    pub fn apply_to(&self, article: &mut Article) {
        if let Some(ref headline) = self.headline {
            article.headline.clone_from(headline);
        }
        if let Some(ref author) = self.author {
            article.author.clone_from(author);
        }
        if let Some(ref body) = self.body {
            article.body.clone_from(body);
        }
        if let Some(ref publication_date) = self.publication_date {
            article.publication_date.clone_from(publication_date);
        }
        if let Some(published) = self.published {
            article.published = published;
        }
        if let Some(ref images) = self.images {
            article.images.clone_from(images);
        }
    }
}

/// A full field set replaces every field.
impl From<ArticleFields> for ArticleUpdate {
    fn from(fields: ArticleFields) -> Self {
        Self {
            headline: Some(fields.headline),
            author: Some(fields.author),
            body: Some(fields.body),
            publication_date: Some(fields.publication_date),
            published: Some(fields.published),
            images: Some(fields.images),
        }
    }
}

pub struct ArticleUpdateBuilder(ArticleUpdate);

impl ArticleUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ArticleUpdate::default())
    }

    #[must_use]
    pub fn headline(mut self, headline: impl Into<String>) -> Self {
        self.0.headline = Some(headline.into());
        self
    }

    #[must_use]
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.0.author = Some(author.into());
        self
    }

    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.0.body = Some(body.into());
        self
    }

    #[must_use]
    pub fn publication_date(mut self, publication_date: impl Into<String>) -> Self {
        self.0.publication_date = Some(publication_date.into());
        self
    }

    #[must_use]
    pub const fn published(mut self, published: bool) -> Self {
        self.0.published = Some(published);
        self
    }

    #[must_use]
    pub fn images(mut self, images: Vec<ArticleImage>) -> Self {
        self.0.images = Some(images);
        self
    }

    #[must_use]
    pub fn build(self) -> ArticleUpdate {
        self.0
    }
}

impl Default for ArticleUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
