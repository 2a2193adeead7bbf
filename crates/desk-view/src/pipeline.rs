//! The view pipeline: `(articles, query) -> (visible slice, total pages)`.
//!
//! Pure and deterministic. Stages run in a fixed order:
//! 1. case-insensitive headline substring match (empty query keeps everything)
//! 2. status filter
//! 3. page count, `ceil(filtered / page_size)`, zero when nothing matched
//! 4. the `[(page - 1) * page_size, page * page_size)` window

use std::num::NonZeroUsize;

use desk_core::entities::Article;
use desk_core::enums::StatusFilter;

/// Default page size of the dashboard table.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Inputs of one derivation. `page` is 1-based; 0 is read as 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewQuery {
    pub search: String,
    pub status: StatusFilter,
    pub page: usize,
    pub page_size: NonZeroUsize,
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: StatusFilter::All,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// The visible window of the filtered collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewPage<'a> {
    pub items: Vec<&'a Article>,
    /// Number of articles that passed both filters.
    pub total_items: usize,
    pub total_pages: usize,
    pub page: usize,
    pub page_size: usize,
}

/// Derive the visible page. Never mutates `articles`.
#[must_use]
pub fn derive_view<'a>(articles: &'a [Article], query: &ViewQuery) -> ViewPage<'a> {
    let needle = query.search.to_lowercase();
    let filtered: Vec<&Article> = articles
        .iter()
        .filter(|a| needle.is_empty() || a.headline.to_lowercase().contains(&needle))
        .filter(|a| query.status.matches(a.published))
        .collect();

    let page_size = query.page_size.get();
    let page = query.page.max(1);
    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(page_size);

    let start = (page - 1).saturating_mul(page_size);
    let items = filtered.into_iter().skip(start).take(page_size).collect();

    ViewPage {
        items,
        total_items,
        total_pages,
        page,
        page_size,
    }
}
