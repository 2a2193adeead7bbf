//! Single-article preview as readers see it on the public site.

use desk_core::dates::format_display_date;
use desk_core::entities::{Article, ArticleImage};

/// Title shown above every preview.
pub const MASTHEAD: &str = "Daily News";

/// Preview state: which article, and which of its images is on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveSite {
    article_id: String,
    current_image: usize,
}

/// What to draw for a [`LiveSite`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Preview<'a> {
    NotFound { id: &'a str },
    Article(ArticlePreview<'a>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePreview<'a> {
    /// `DD/MM/YYYY`.
    pub date: String,
    pub headline: &'a str,
    /// `"By {author}"`.
    pub byline: String,
    pub image: Option<&'a ArticleImage>,
    /// Back/next controls are only shown with more than one image.
    pub show_carousel_controls: bool,
    pub body: &'a str,
}

impl LiveSite {
    #[must_use]
    pub fn new(article_id: impl Into<String>) -> Self {
        Self {
            article_id: article_id.into(),
            current_image: 0,
        }
    }

    #[must_use]
    pub fn article_id(&self) -> &str {
        &self.article_id
    }

    #[must_use]
    pub const fn current_image(&self) -> usize {
        self.current_image
    }

    fn find<'a>(&self, articles: &'a [Article]) -> Option<&'a Article> {
        articles.iter().find(|a| a.id == self.article_id)
    }

    #[must_use]
    pub fn render<'a>(&'a self, articles: &'a [Article]) -> Preview<'a> {
        let Some(article) = self.find(articles) else {
            return Preview::NotFound {
                id: &self.article_id,
            };
        };

        // Images may have been removed since the carousel last moved.
        let image = article
            .images
            .get(self.current_image)
            .or_else(|| article.images.first());

        Preview::Article(ArticlePreview {
            date: format_display_date(&article.publication_date),
            headline: &article.headline,
            byline: format!("By {}", article.author),
            image,
            show_carousel_controls: article.images.len() > 1,
            body: &article.body,
        })
    }

    /// Show the next image, wrapping to the first.
    pub fn next_image(&mut self, articles: &[Article]) {
        self.advance_images(articles, 1);
    }

    /// Press next `steps` times. Whole laps are skipped.
    pub fn advance_images(&mut self, articles: &[Article], steps: usize) {
        let count = self.image_count(articles);
        if count > 0 {
            self.current_image = (self.current_image + steps % count) % count;
        }
    }

    /// Show the previous image, wrapping to the last.
    pub fn prev_image(&mut self, articles: &[Article]) {
        let count = self.image_count(articles);
        if count > 0 {
            self.current_image = (self.current_image.min(count - 1) + count - 1) % count;
        }
    }

    fn image_count(&self, articles: &[Article]) -> usize {
        self.find(articles).map_or(0, |a| a.images.len())
    }
}
