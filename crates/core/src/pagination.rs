//! Pagination arithmetic shared by both repositories.
//!
//! Both resource kinds use the same zero-based convention:
//! `offset = page * rows_per_page`. Page 0 is the first page.

/// Rows per page when the caller does not specify one.
pub const DEFAULT_ROWS_PER_PAGE: i64 = 10;

/// Upper bound on rows per page.
pub const MAX_ROWS_PER_PAGE: i64 = 100;

/// A zero-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: i64,
    rows_per_page: i64,
}

impl Page {
    /// Build a page request, clamping out-of-range values.
    ///
    /// A negative `page` is treated as 0; `rows_per_page` is clamped into
    /// `1..=MAX_ROWS_PER_PAGE`.
    pub fn new(page: i64, rows_per_page: i64) -> Self {
        Self {
            page: page.max(0),
            rows_per_page: rows_per_page.clamp(1, MAX_ROWS_PER_PAGE),
        }
    }

    pub fn limit(&self) -> i64 {
        self.rows_per_page
    }

    pub fn offset(&self) -> i64 {
        self.page * self.rows_per_page
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, DEFAULT_ROWS_PER_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_starts_at_zero() {
        let page = Page::new(0, 10);
        assert_eq!(page.offset(), 0);
        assert_eq!(page.limit(), 10);
    }

    #[test]
    fn offset_is_page_times_rows() {
        assert_eq!(Page::new(3, 25).offset(), 75);
    }

    #[test]
    fn negative_page_clamps_to_zero() {
        assert_eq!(Page::new(-1, 10).offset(), 0);
    }

    #[test]
    fn rows_per_page_is_clamped() {
        assert_eq!(Page::new(0, 0).limit(), 1);
        assert_eq!(Page::new(0, 10_000).limit(), MAX_ROWS_PER_PAGE);
    }

    #[test]
    fn default_matches_handler_defaults() {
        let page = Page::default();
        assert_eq!(page.limit(), DEFAULT_ROWS_PER_PAGE);
        assert_eq!(page.offset(), 0);
    }
}
