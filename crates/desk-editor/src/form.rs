//! The editor form state machine.
//!
//! ```text
//!            open(target)                 submit ok / close
//! closed ───────────────► open{mode} ───────────────────────► closed
//!                           │  ▲
//!          switch_to_edit   │  │ re-seed draft, clear touched
//!          (view only)      └──┘
//! ```
//!
//! Errors are shown for a field only once it is touched, but submit in
//! create/edit mode is gated on all current errors.

use desk_core::entities::{Article, ArticleImage};
use desk_core::enums::{EditorMode, Field};
use desk_core::updates::{ArticleUpdate, ArticleUpdateBuilder};
use desk_store::{ArticleOps, StoreError};

use crate::draft::Draft;
use crate::validation::{FieldError, ValidationErrors, validate};

/// What the editor is opened on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorTarget {
    Create,
    View(Article),
    Edit(Article),
}

impl EditorTarget {
    #[must_use]
    pub const fn mode(&self) -> EditorMode {
        match self {
            Self::Create => EditorMode::Create,
            Self::View(_) => EditorMode::View,
            Self::Edit(_) => EditorMode::Edit,
        }
    }

    #[must_use]
    pub const fn article(&self) -> Option<&Article> {
        match self {
            Self::Create => None,
            Self::View(article) | Self::Edit(article) => Some(article),
        }
    }
}

/// Result of [`EditorForm::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A new article was added; the editor closed.
    Created(Article),
    /// An update was dispatched; the editor closed. `applied` is false when
    /// the article had disappeared from the store in the meantime.
    Updated { id: String, applied: bool },
    /// Validation failed; every field is now touched and the editor stays open.
    Blocked(ValidationErrors),
    /// The editor was not open.
    NotOpen,
}

#[derive(Debug, Clone)]
struct Session {
    target: EditorTarget,
    draft: Draft,
    touched: [bool; Field::COUNT],
}

impl Session {
    fn seed(target: EditorTarget) -> Self {
        let draft = target.article().map(Draft::from).unwrap_or_default();
        Self {
            target,
            draft,
            touched: [false; Field::COUNT],
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EditorForm {
    session: Option<Session>,
}

impl EditorForm {
    #[must_use]
    pub const fn new() -> Self {
        Self { session: None }
    }

    /// Open (or re-open) the editor. Always re-seeds the draft and clears touched flags.
    pub fn open(&mut self, target: EditorTarget) {
        tracing::debug!(mode = %target.mode(), "editor opened");
        self.session = Some(Session::seed(target));
    }

    /// Discard the session.
    pub fn close(&mut self) {
        self.session = None;
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    #[must_use]
    pub fn mode(&self) -> Option<EditorMode> {
        self.session.as_ref().map(|s| s.target.mode())
    }

    /// Id of the article being viewed or edited.
    #[must_use]
    pub fn article_id(&self) -> Option<&str> {
        self.session
            .as_ref()
            .and_then(|s| s.target.article())
            .map(|a| a.id.as_str())
    }

    #[must_use]
    pub fn draft(&self) -> Option<&Draft> {
        self.session.as_ref().map(|s| &s.draft)
    }

    /// Move a view session to edit mode, re-seeded from `article`.
    ///
    /// Returns false (and changes nothing) unless the editor is viewing the
    /// article with the same id.
    pub fn switch_to_edit(&mut self, article: &Article) -> bool {
        let viewing_same = self.session.as_ref().is_some_and(|s| {
            s.target.mode().can_transition_to(EditorMode::Edit)
                && s.target.article().is_some_and(|current| current.id == article.id)
        });
        if !viewing_same {
            return false;
        }
        self.open(EditorTarget::Edit(article.clone()));
        true
    }

    /// Replace the text of `field`. Ignored when closed or in view mode.
    pub fn set_text(&mut self, field: Field, value: impl Into<String>) {
        if let Some(session) = self.editable_session() {
            session.draft.set_text(field, value.into());
        }
    }

    /// Set the publish flag. Allowed in every mode.
    pub fn set_published(&mut self, published: bool) {
        if let Some(session) = self.session.as_mut() {
            session.draft.published = published;
        }
    }

    /// Mark `field` as touched (it lost focus).
    pub fn blur(&mut self, field: Field) {
        if let Some(session) = self.session.as_mut() {
            session.touched[field.index()] = true;
        }
    }

    pub fn touch_all(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.touched = [true; Field::COUNT];
        }
    }

    #[must_use]
    pub fn is_touched(&self, field: Field) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.touched[field.index()])
    }

    /// All current errors, touched or not. Empty when closed.
    #[must_use]
    pub fn errors(&self) -> ValidationErrors {
        self.session
            .as_ref()
            .map(|s| validate(&s.draft))
            .unwrap_or_default()
    }

    /// The error to render next to `field`: only once the field is touched.
    #[must_use]
    pub fn visible_error(&self, field: Field) -> Option<FieldError> {
        if !self.is_touched(field) {
            return None;
        }
        self.errors().get(field)
    }

    /// Whether the submit control is enabled.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        match self.mode() {
            None => false,
            Some(EditorMode::View) => true,
            Some(EditorMode::Create | EditorMode::Edit) => self.errors().is_empty(),
        }
    }

    /// Append a completed upload batch, preserving its order.
    pub fn commit_images(&mut self, batch: Vec<ArticleImage>) {
        if let Some(session) = self.editable_session() {
            session.draft.images.extend(batch);
        }
    }

    /// Remove the image at `index` from the draft.
    pub fn remove_image(&mut self, index: usize) -> Option<ArticleImage> {
        let session = self.editable_session()?;
        (index < session.draft.images.len()).then(|| session.draft.images.remove(index))
    }

    /// Dispatch the session through `ops` and close on success.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the store cannot persist the change; the
    /// editor stays open with its draft intact.
    pub fn submit(&mut self, ops: &mut impl ArticleOps) -> Result<SubmitOutcome, StoreError> {
        let Some(session) = self.session.as_ref() else {
            return Ok(SubmitOutcome::NotOpen);
        };

        let outcome = match &session.target {
            EditorTarget::View(article) => {
                let update = ArticleUpdateBuilder::new()
                    .published(session.draft.published)
                    .build();
                let applied = ops.update(&article.id, &update)?;
                SubmitOutcome::Updated {
                    id: article.id.clone(),
                    applied,
                }
            }
            target => {
                let errors = validate(&session.draft);
                if !errors.is_empty() {
                    self.touch_all();
                    return Ok(SubmitOutcome::Blocked(errors));
                }
                match target {
                    EditorTarget::Edit(article) => {
                        let update = ArticleUpdate::from(session.draft.to_fields());
                        let applied = ops.update(&article.id, &update)?;
                        SubmitOutcome::Updated {
                            id: article.id.clone(),
                            applied,
                        }
                    }
                    _ => SubmitOutcome::Created(ops.add(session.draft.to_fields())?),
                }
            }
        };

        self.close();
        Ok(outcome)
    }

    fn editable_session(&mut self) -> Option<&mut Session> {
        self.session
            .as_mut()
            .filter(|s| s.target.mode() != EditorMode::View)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn article() -> Article {
        Article {
            id: "1".into(),
            headline: "City Council Approves New Public Park Initiative".into(),
            author: "Joe Doe".into(),
            body: "Body".into(),
            publication_date: "2025-05-16".into(),
            published: true,
            images: vec![],
        }
    }

    #[test]
    fn closed_form_is_inert() {
        let mut form = EditorForm::new();
        form.set_text(Field::Headline, "x");
        form.blur(Field::Headline);
        assert!(!form.is_open());
        assert!(!form.can_submit());
        assert!(form.errors().is_empty());
        assert_eq!(form.draft(), None);
    }

    #[test]
    fn create_starts_empty_and_untouched() {
        let mut form = EditorForm::new();
        form.open(EditorTarget::Create);

        assert_eq!(form.draft(), Some(&Draft::default()));
        assert_eq!(form.mode(), Some(EditorMode::Create));
        for field in Field::ALL {
            assert!(!form.is_touched(field));
            assert_eq!(form.visible_error(field), None);
        }
        assert_eq!(form.errors().len(), 4);
        assert!(!form.can_submit());
    }

    #[test]
    fn error_shows_only_after_blur() {
        let mut form = EditorForm::new();
        form.open(EditorTarget::Create);
        form.set_text(Field::Author, "Agent 47");

        assert_eq!(form.visible_error(Field::Author), None);
        form.blur(Field::Author);
        assert_eq!(
            form.visible_error(Field::Author),
            Some(FieldError::AuthorContainsNumbers)
        );

        form.set_text(Field::Author, "Agent Smith");
        assert_eq!(form.visible_error(Field::Author), None);
    }

    #[test]
    fn edit_prefills_without_errors() {
        let mut form = EditorForm::new();
        form.open(EditorTarget::Edit(article()));

        assert_eq!(form.draft().unwrap().headline, article().headline);
        assert!(form.errors().is_empty());
        assert!(form.can_submit());
    }

    #[test]
    fn reopening_resets_touched_and_draft() {
        let mut form = EditorForm::new();
        form.open(EditorTarget::Edit(article()));
        form.set_text(Field::Headline, "");
        form.blur(Field::Headline);

        form.open(EditorTarget::Create);

        assert!(!form.is_touched(Field::Headline));
        assert_eq!(form.draft(), Some(&Draft::default()));
    }

    #[test]
    fn view_mode_only_allows_publish_toggle() {
        let mut form = EditorForm::new();
        form.open(EditorTarget::View(article()));

        form.set_text(Field::Headline, "changed");
        form.commit_images(vec![ArticleImage {
            name: "a.png".into(),
            size_bytes: 1,
            data_url: "data:image/png;base64,AA==".into(),
        }]);
        form.set_published(false);

        let draft = form.draft().unwrap();
        assert_eq!(draft.headline, article().headline);
        assert!(draft.images.is_empty());
        assert!(!draft.published);
        assert!(form.can_submit());
    }

    #[test]
    fn switch_to_edit_requires_matching_view_session() {
        let mut form = EditorForm::new();
        assert!(!form.switch_to_edit(&article()));

        form.open(EditorTarget::Create);
        assert!(!form.switch_to_edit(&article()));

        let mut other = article();
        other.id = "2".into();
        form.open(EditorTarget::View(article()));
        assert!(!form.switch_to_edit(&other));
        assert_eq!(form.mode(), Some(EditorMode::View));

        form.set_published(false);
        form.blur(Field::Body);
        assert!(form.switch_to_edit(&article()));
        assert_eq!(form.mode(), Some(EditorMode::Edit));
        assert!(form.draft().unwrap().published, "draft re-seeded");
        assert!(!form.is_touched(Field::Body));
    }

    #[test]
    fn edit_session_does_not_switch_again() {
        let mut form = EditorForm::new();
        form.open(EditorTarget::Edit(article()));
        form.set_text(Field::Headline, "Changed");

        assert!(!form.switch_to_edit(&article()));
        assert_eq!(form.draft().unwrap().headline, "Changed", "draft kept");
    }

    #[test]
    fn remove_image_by_index() {
        let image = |name: &str| ArticleImage {
            name: name.into(),
            size_bytes: 1,
            data_url: String::new(),
        };
        let mut form = EditorForm::new();
        form.open(EditorTarget::Create);
        form.commit_images(vec![image("a"), image("b"), image("c")]);

        assert_eq!(form.remove_image(1).map(|i| i.name), Some("b".to_string()));
        assert_eq!(form.remove_image(5), None);
        let names: Vec<_> = form
            .draft()
            .unwrap()
            .images
            .iter()
            .map(|i| i.name.as_str())
            .collect();
        assert_eq!(names, ["a", "c"]);
    }
}
