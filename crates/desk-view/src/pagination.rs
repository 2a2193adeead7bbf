//! Pagination controls derived from a [`ViewPage`].

use crate::pipeline::ViewPage;

/// `"{start}-{end} of {total}"`, 1-based and inclusive. `start` is 0 when
/// nothing matched.
#[must_use]
pub fn range_label(page: usize, page_size: usize, total: usize) -> String {
    let page = page.max(1);
    let start = if total == 0 {
        0
    } else {
        (page - 1).saturating_mul(page_size) + 1
    };
    let end = page.saturating_mul(page_size).min(total);
    format!("{start}-{end} of {total}")
}

/// The previous-page control is disabled on the first page.
#[must_use]
pub const fn has_prev(page: usize) -> bool {
    page > 1
}

/// The next-page control is disabled on (or past) the last page.
#[must_use]
pub const fn has_next(page: usize, total_pages: usize) -> bool {
    page < total_pages
}

impl ViewPage<'_> {
    #[must_use]
    pub fn range_label(&self) -> String {
        range_label(self.page, self.page_size, self.total_items)
    }

    #[must_use]
    pub const fn has_prev(&self) -> bool {
        has_prev(self.page)
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        has_next(self.page, self.total_pages)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(1, 10, 25, "1-10 of 25")]
    #[case(3, 10, 25, "21-25 of 25")]
    #[case(1, 10, 0, "0-0 of 0")]
    #[case(2, 5, 7, "6-7 of 7")]
    #[case(1, 50, 3, "1-3 of 3")]
    fn labels(#[case] page: usize, #[case] size: usize, #[case] total: usize, #[case] expected: &str) {
        assert_eq!(range_label(page, size, total), expected);
    }

    #[rstest]
    #[case(1, 3, false, true)]
    #[case(2, 3, true, true)]
    #[case(3, 3, true, false)]
    #[case(1, 0, false, false)]
    #[case(1, 1, false, false)]
    fn enablement(
        #[case] page: usize,
        #[case] total_pages: usize,
        #[case] prev: bool,
        #[case] next: bool,
    ) {
        assert_eq!(has_prev(page), prev);
        assert_eq!(has_next(page, total_pages), next);
    }
}
