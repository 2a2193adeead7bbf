//! Field validation rules for the article editor.
//!
//! | Field | Rule | Message |
//! |---|---|---|
//! | headline | non-empty after trim | Headline is required |
//! | author | non-empty after trim | Author is required |
//! | author | no digits (when non-empty) | Author must not contain numbers |
//! | body | non-empty after trim | Body is required |
//! | publication date | non-empty after trim | Publication date is required |
//! | publication date | real `YYYY-MM-DD` date (when non-empty) | Invalid date |
//!
//! Rules are evaluated from the current draft regardless of touched state.

use std::collections::BTreeMap;

use thiserror::Error;

use desk_core::dates::parse_publication_date;
use desk_core::enums::Field;

use crate::draft::Draft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Headline is required")]
    HeadlineRequired,
    #[error("Author is required")]
    AuthorRequired,
    #[error("Author must not contain numbers")]
    AuthorContainsNumbers,
    #[error("Body is required")]
    BodyRequired,
    #[error("Publication date is required")]
    PublicationDateRequired,
    #[error("Invalid date")]
    InvalidDate,
}

/// At most one error per field: the first failing rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<Field, FieldError>);

impl ValidationErrors {
    #[must_use]
    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

impl FromIterator<(Field, FieldError)> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = (Field, FieldError)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Check one field of `draft`.
#[must_use]
pub fn validate_field(draft: &Draft, field: Field) -> Option<FieldError> {
    let value = draft.text(field).trim();
    match field {
        Field::Headline if value.is_empty() => Some(FieldError::HeadlineRequired),
        Field::Author if value.is_empty() => Some(FieldError::AuthorRequired),
        Field::Author if value.chars().any(|c| c.is_ascii_digit()) => {
            Some(FieldError::AuthorContainsNumbers)
        }
        Field::Body if value.is_empty() => Some(FieldError::BodyRequired),
        Field::PublicationDate if value.is_empty() => Some(FieldError::PublicationDateRequired),
        Field::PublicationDate if parse_publication_date(value).is_err() => {
            Some(FieldError::InvalidDate)
        }
        _ => None,
    }
}

/// Check every field of `draft`.
#[must_use]
pub fn validate(draft: &Draft) -> ValidationErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| validate_field(draft, field).map(|e| (field, e)))
        .collect()
}
