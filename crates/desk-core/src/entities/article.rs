use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::ArticleImage;

/// A content record managed by the dashboard.
///
/// `id` is assigned by the store at creation and never changes.
/// `publication_date` is an ISO `YYYY-MM-DD` string; the store does not
/// validate it, the editor does.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub headline: String,
    pub author: String,
    pub body: String,
    pub publication_date: String,
    pub published: bool,
    /// Carousel order. Older payloads used the `image` key or omitted it.
    #[serde(default, alias = "image")]
    pub images: Vec<ArticleImage>,
}

/// Every article field except `id`: the payload of a create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ArticleFields {
    pub headline: String,
    pub author: String,
    pub body: String,
    pub publication_date: String,
    pub published: bool,
    #[serde(default)]
    pub images: Vec<ArticleImage>,
}

impl Article {
    /// Build a full article from an id and its fields.
    #[must_use]
    pub fn from_fields(id: String, fields: ArticleFields) -> Self {
        Self {
            id,
            headline: fields.headline,
            author: fields.author,
            body: fields.body,
            publication_date: fields.publication_date,
            published: fields.published,
            images: fields.images,
        }
    }

    /// Copy out everything except the id.
    #[must_use]
    pub fn fields(&self) -> ArticleFields {
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

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fields_roundtrip_through_article() {
        let fields = ArticleFields {
            headline: "Headline".into(),
            author: "Author".into(),
            body: "Body".into(),
            publication_date: "2025-01-01".into(),
            published: true,
            images: vec![],
        };
        let article = Article::from_fields("a-1".into(), fields.clone());
        assert_eq!(article.id, "a-1");
        assert_eq!(article.fields(), fields);
    }

    #[test]
    fn serializes_camel_case() {
        let article = Article::from_fields("1".into(), ArticleFields::default());
        let value = serde_json::to_value(&article).unwrap();
        assert!(value.get("publicationDate").is_some());
        assert!(value.get("images").is_some());
        assert!(value.get("publication_date").is_none());
    }

    #[test]
    fn reads_legacy_image_key() {
        let json = r#"{
            "id": "1",
            "headline": "h",
            "author": "a",
            "body": "b",
            "publicationDate": "2025-05-16",
            "published": true,
            "image": [{"name": "x.png", "size": 3, "dataUrl": "data:image/png;base64,AAA="}]
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.images.len(), 1);
        assert_eq!(article.images[0].name, "x.png");
    }

    #[test]
    fn missing_images_default_empty() {
        let json = r#"{"id":"2","headline":"h","author":"a","body":"b","publicationDate":"2025-05-15","published":false}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert!(article.images.is_empty());
    }
}
