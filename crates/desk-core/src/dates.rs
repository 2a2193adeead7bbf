//! Publication date handling.
//!
//! Dates are stored as ISO `YYYY-MM-DD` strings and rendered as `DD/MM/YYYY`.

use chrono::NaiveDate;

use crate::errors::CoreError;

/// Storage format of `Article::publication_date`.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d";

/// Display format used by the dashboard table and the live-site preview.
pub const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parse a stored publication date.
///
/// # Errors
///
/// Returns `CoreError::InvalidDate` if `raw` is not a real calendar date in
/// `YYYY-MM-DD` form (surrounding whitespace is ignored).
pub fn parse_publication_date(raw: &str) -> Result<NaiveDate, CoreError> {
    NaiveDate::parse_from_str(raw.trim(), STORAGE_FORMAT)
        .map_err(|_| CoreError::InvalidDate(raw.to_string()))
}

/// Render a stored publication date for display.
///
/// Empty input renders empty; input that does not parse is returned as-is.
#[must_use]
pub fn format_display_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    parse_publication_date(raw).map_or_else(
        |_| raw.to_string(),
        |date| date.format(DISPLAY_FORMAT).to_string(),
    )
}
