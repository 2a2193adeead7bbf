use std::fmt::Write as _;

use serde::Serialize;

use desk_core::dates::format_display_date;
use desk_core::entities::Article;
use desk_core::enums::StatusFilter;
use desk_view::live_site::MASTHEAD;
use desk_view::{Preview, ViewPage};

use crate::output::Tabular;
use crate::output::table::render_table;

/// One row of the dashboard table.
#[derive(Debug, Serialize)]
pub struct ArticleRow {
    pub id: String,
    pub headline: String,
    pub author: String,
    pub date: String,
    pub published: bool,
    pub images: usize,
}

impl From<&Article> for ArticleRow {
    fn from(article: &Article) -> Self {
        Self {
            id: article.id.clone(),
            headline: article.headline.clone(),
            author: article.author.clone(),
            date: format_display_date(&article.publication_date),
            published: article.published,
            images: article.images.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub search: String,
    pub status: StatusFilter,
    pub items: Vec<ArticleRow>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub range: String,
    pub has_prev: bool,
    pub has_next: bool,
}

impl ListResponse {
    pub fn new(search: &str, status: StatusFilter, view: &ViewPage<'_>) -> Self {
        Self {
            search: search.to_string(),
            status,
            items: view.items.iter().map(|a| ArticleRow::from(*a)).collect(),
            page: view.page,
            total_pages: view.total_pages,
            total_items: view.total_items,
            range: view.range_label(),
            has_prev: view.has_prev(),
            has_next: view.has_next(),
        }
    }
}

impl Tabular for ListResponse {
    fn to_table(&self, max_width: Option<usize>) -> String {
        if self.items.is_empty() {
            return format!("(no articles)\n{}", self.range);
        }

        let rows: Vec<Vec<String>> = self
            .items
            .iter()
            .map(|row| {
                vec![
                    row.id.clone(),
                    row.headline.clone(),
                    row.author.clone(),
                    row.date.clone(),
                    if row.published { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        let table = render_table(
            &["id", "headline", "author", "date", "published"],
            &rows,
            max_width,
        );

        let prev = if self.has_prev { "< prev" } else { "" };
        let next = if self.has_next { "next >" } else { "" };
        format!(
            "{table}\n\n{}  page {}/{}  {prev} {next}",
            self.range,
            self.page,
            self.total_pages.max(1)
        )
        .trim_end()
        .to_string()
    }
}

/// A whole article, as stored.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ArticleResponse(pub Article);

impl Tabular for ArticleResponse {
    fn to_table(&self, max_width: Option<usize>) -> String {
        let article = &self.0;
        let images = article
            .images
            .iter()
            .map(|image| format!("{} ({})", image.name, image.size_label()))
            .collect::<Vec<_>>()
            .join(", ");

        let rows = vec![
            vec!["id".to_string(), article.id.clone()],
            vec!["headline".to_string(), article.headline.clone()],
            vec!["author".to_string(), article.author.clone()],
            vec!["date".to_string(), article.publication_date.clone()],
            vec!["published".to_string(), article.published.to_string()],
            vec!["images".to_string(), images],
            vec!["body".to_string(), article.body.clone()],
        ];
        render_table(&["field", "value"], &rows, max_width)
    }
}

/// Outcome of a row action on the dashboard.
#[derive(Debug, Serialize)]
pub struct MutationResponse {
    pub action: &'static str,
    pub id: String,
    /// False when no article had this id.
    pub applied: bool,
}

impl Tabular for MutationResponse {
    fn to_table(&self, _max_width: Option<usize>) -> String {
        if self.applied {
            format!("{} {}: done", self.action, self.id)
        } else {
            format!("{} {}: no such article", self.action, self.id)
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PreviewResponse {
    NotFound {
        id: String,
    },
    Found {
        masthead: &'static str,
        date: String,
        headline: String,
        byline: String,
        image: Option<String>,
        carousel: bool,
        body: String,
    },
}

impl From<Preview<'_>> for PreviewResponse {
    fn from(preview: Preview<'_>) -> Self {
        match preview {
            Preview::NotFound { id } => Self::NotFound { id: id.to_string() },
            Preview::Article(article) => Self::Found {
                masthead: MASTHEAD,
                date: article.date,
                headline: article.headline.to_string(),
                byline: article.byline,
                image: article.image.map(|image| image.name.clone()),
                carousel: article.show_carousel_controls,
                body: article.body.to_string(),
            },
        }
    }
}

impl Tabular for PreviewResponse {
    fn to_table(&self, _max_width: Option<usize>) -> String {
        match self {
            Self::NotFound { .. } => "Article not found.".to_string(),
            Self::Found {
                masthead,
                date,
                headline,
                byline,
                image,
                carousel,
                body,
            } => {
                let mut out = format!("{masthead}\n\n{date}\n\n{headline}\n{byline}\n");
                if let Some(image) = image {
                    let _ = write!(out, "\n[image: {image}]");
                    if *carousel {
                        out.push_str("  < back | next >");
                    }
                    out.push('\n');
                }
                let _ = write!(out, "\n{body}");
                out
            }
        }
    }
}
