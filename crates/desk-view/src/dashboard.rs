//! Dashboard controller: list controls plus the editor drawer.
//!
//! Holds only UI state. The article collection stays in the store, which
//! every operation receives explicitly.

use std::num::NonZeroUsize;

use desk_config::DashboardConfig;
use desk_core::entities::Article;
use desk_core::enums::StatusFilter;
use desk_editor::{EditorForm, EditorTarget, SubmitOutcome};
use desk_store::{ArticleOps, StoreError};

use crate::pipeline::{DEFAULT_PAGE_SIZE, ViewPage, ViewQuery, derive_view};

#[derive(Debug, Clone)]
pub struct Dashboard {
    search: String,
    status: StatusFilter,
    page: usize,
    rows_per_page: NonZeroUsize,
    rows_per_page_options: Vec<NonZeroUsize>,
    editor: EditorForm,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::from_config(&DashboardConfig::default())
    }
}

impl Dashboard {
    /// Build from validated configuration. Zero sizes are dropped; an unusable
    /// default falls back to 10 rows.
    #[must_use]
    pub fn from_config(config: &DashboardConfig) -> Self {
        let rows_per_page_options: Vec<NonZeroUsize> = config
            .rows_per_page_options
            .iter()
            .copied()
            .filter_map(NonZeroUsize::new)
            .collect();
        let rows_per_page = NonZeroUsize::new(config.rows_per_page).unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            search: String::new(),
            status: StatusFilter::All,
            page: 1,
            rows_per_page,
            rows_per_page_options,
            editor: EditorForm::new(),
        }
    }

    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    #[must_use]
    pub const fn rows_per_page(&self) -> usize {
        self.rows_per_page.get()
    }

    #[must_use]
    pub fn rows_per_page_options(&self) -> &[NonZeroUsize] {
        &self.rows_per_page_options
    }

    /// Change the search query and go back to page 1.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.search = search.into();
        self.page = 1;
    }

    /// Change the status filter and go back to page 1.
    pub fn set_status(&mut self, status: StatusFilter) {
        self.status = status;
        self.page = 1;
    }

    /// Jump to `page` (1-based). The pipeline shows an empty window past the end.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Pick one of the offered page sizes and go back to page 1.
    ///
    /// Returns false and changes nothing when `rows` is not an offered option.
    pub fn set_rows_per_page(&mut self, rows: usize) -> bool {
        let Some(rows) = self
            .rows_per_page_options
            .iter()
            .copied()
            .find(|option| option.get() == rows)
        else {
            tracing::debug!(rows, "ignoring rows-per-page outside the offered options");
            return false;
        };
        self.rows_per_page = rows;
        self.page = 1;
        true
    }

    #[must_use]
    pub fn query(&self) -> ViewQuery {
        ViewQuery {
            search: self.search.clone(),
            status: self.status,
            page: self.page,
            page_size: self.rows_per_page,
        }
    }

    /// The current table page over `articles`.
    #[must_use]
    pub fn view<'a>(&self, articles: &'a [Article]) -> ViewPage<'a> {
        derive_view(articles, &self.query())
    }

    /// Step back one page if the control is enabled.
    pub fn prev_page(&mut self, articles: &[Article]) -> bool {
        let enabled = self.view(articles).has_prev();
        if enabled {
            self.page -= 1;
        }
        enabled
    }

    /// Step forward one page if the control is enabled.
    pub fn next_page(&mut self, articles: &[Article]) -> bool {
        let enabled = self.view(articles).has_next();
        if enabled {
            self.page += 1;
        }
        enabled
    }

    #[must_use]
    pub const fn editor(&self) -> &EditorForm {
        &self.editor
    }

    pub const fn editor_mut(&mut self) -> &mut EditorForm {
        &mut self.editor
    }

    /// Open the drawer on an empty draft.
    pub fn open_create(&mut self) {
        self.editor.open(EditorTarget::Create);
    }

    /// Open the drawer read-only on `id`. Does nothing if `id` is absent.
    pub fn open_view(&mut self, ops: &impl ArticleOps, id: &str) -> bool {
        self.open_existing(ops, id, EditorTarget::View)
    }

    /// Open the drawer for editing `id`. Does nothing if `id` is absent.
    pub fn open_edit(&mut self, ops: &impl ArticleOps, id: &str) -> bool {
        self.open_existing(ops, id, EditorTarget::Edit)
    }

    /// Move the open view session to edit mode, re-seeded from the stored article.
    pub fn switch_to_edit(&mut self, ops: &impl ArticleOps) -> bool {
        let Some(article) = self.editor.article_id().and_then(|id| ops.find(id)) else {
            return false;
        };
        self.editor.switch_to_edit(article)
    }

    pub fn close_editor(&mut self) {
        self.editor.close();
    }

    /// Submit the drawer through `ops`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the change cannot be persisted.
    pub fn submit_editor(&mut self, ops: &mut impl ArticleOps) -> Result<SubmitOutcome, StoreError> {
        self.editor.submit(ops)
    }

    /// Delete `id`, closing the drawer when it is open on that article.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the change cannot be persisted.
    pub fn delete(&mut self, ops: &mut impl ArticleOps, id: &str) -> Result<bool, StoreError> {
        let removed = ops.delete(id)?;
        if self.editor.article_id() == Some(id) {
            self.editor.close();
        }
        Ok(removed)
    }

    fn open_existing(
        &mut self,
        ops: &impl ArticleOps,
        id: &str,
        target: fn(Article) -> EditorTarget,
    ) -> bool {
        let Some(article) = ops.find(id) else {
            tracing::debug!(id, "cannot open drawer on unknown article");
            return false;
        };
        self.editor.open(target(article.clone()));
        true
    }
}
