//! Status filters, editor modes, and form fields for newsdesk.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the wire/CLI representation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// StatusFilter
// ---------------------------------------------------------------------------

/// Publish-status filter applied by the dashboard listing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum StatusFilter {
    #[default]
    All,
    Published,
    Unpublished,
}

impl StatusFilter {
    /// Whether an article with the given publish flag passes this filter.
    #[must_use]
    pub const fn matches(self, published: bool) -> bool {
        match self {
            Self::All => true,
            Self::Published => published,
            Self::Unpublished => !published,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Published => "published",
            Self::Unpublished => "unpublished",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusFilter {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "published" => Ok(Self::Published),
            "unpublished" => Ok(Self::Unpublished),
            other => Err(CoreError::UnknownVariant {
                kind: "status filter",
                value: other.to_string(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// EditorMode
// ---------------------------------------------------------------------------

/// Mode of an editor session.
///
/// ```text
/// create
/// view → edit   (explicit "switch to edit" only)
/// edit
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EditorMode {
    Create,
    View,
    Edit,
}

impl EditorMode {
    /// Valid next modes from the current mode.
    #[must_use]
    pub const fn allowed_next_modes(self) -> &'static [Self] {
        match self {
            Self::View => &[Self::Edit],
            Self::Create | Self::Edit => &[],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_modes().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "create",
            Self::View => "view",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for EditorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Field
// ---------------------------------------------------------------------------

/// A validated text field of the article editor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Headline,
    Author,
    Body,
    PublicationDate,
}

impl Field {
    /// Number of validated fields.
    pub const COUNT: usize = 4;

    /// Every validated field, in form order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Headline,
        Self::Author,
        Self::Body,
        Self::PublicationDate,
    ];

    /// Human-facing label used next to the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Headline => "Headline",
            Self::Author => "Author",
            Self::Body => "Body",
            Self::PublicationDate => "Publish Date",
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Headline => "headline",
            Self::Author => "author",
            Self::Body => "body",
            Self::PublicationDate => "publication_date",
        }
    }

    /// Position in [`Field::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Headline => 0,
            Self::Author => 1,
            Self::Body => 2,
            Self::PublicationDate => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_matches() {
        assert!(StatusFilter::All.matches(true));
        assert!(StatusFilter::All.matches(false));
        assert!(StatusFilter::Published.matches(true));
        assert!(!StatusFilter::Published.matches(false));
        assert!(StatusFilter::Unpublished.matches(false));
        assert!(!StatusFilter::Unpublished.matches(true));
    }

    #[test]
    fn status_filter_parses_its_own_strings() {
        for filter in [
            StatusFilter::All,
            StatusFilter::Published,
            StatusFilter::Unpublished,
        ] {
            assert_eq!(filter.as_str().parse::<StatusFilter>().unwrap(), filter);
        }
    }

    #[test]
    fn status_filter_rejects_unknown() {
        let err = "drafts".parse::<StatusFilter>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown status filter 'drafts'");
    }

    #[test]
    fn only_view_switches_to_edit() {
        assert!(EditorMode::View.can_transition_to(EditorMode::Edit));
        assert!(!EditorMode::Edit.can_transition_to(EditorMode::View));
        assert!(!EditorMode::Create.can_transition_to(EditorMode::Edit));
    }

    #[test]
    fn field_indices_are_dense() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn field_serializes_snake_case() {
        let json = serde_json::to_string(&Field::PublicationDate).unwrap();
        assert_eq!(json, "\"publication_date\"");
    }
}
