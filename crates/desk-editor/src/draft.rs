//! The transient copy of an article's editable fields.

use desk_core::entities::{Article, ArticleFields, ArticleImage};
use desk_core::enums::Field;

/// Editable fields of one editor session. Never persisted directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    pub headline: String,
    pub author: String,
    pub body: String,
    pub publication_date: String,
    pub published: bool,
    pub images: Vec<ArticleImage>,
}

impl Draft {
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Headline => &self.headline,
            Field::Author => &self.author,
            Field::Body => &self.body,
            Field::PublicationDate => &self.publication_date,
        }
    }

    pub fn set_text(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Headline => &mut self.headline,
            Field::Author => &mut self.author,
            Field::Body => &mut self.body,
            Field::PublicationDate => &mut self.publication_date,
        };
        *slot = value;
    }

    /// The create/update payload.
    #[must_use]
    pub fn to_fields(&self) -> ArticleFields {
        ArticleFields {
            headline: self.headline.clone(),
            author: self.author.clone(),
            body: self.body.clone(),
            publication_date: self.publication_date.clone(),
            published: self.published,
            images: self.images.clone(),
        }
    }
}

impl From<&Article> for Draft {
    fn from(article: &Article) -> Self {
        Self {
            headline: article.headline.clone(),
            author: article.author.clone(),
            body: article.body.clone(),
            publication_date: article.publication_date.clone(),
            published: article.published,
            images: article.images.clone(),
        }
    }
}
