//! Mutable view state of the client list.

use crate::config::DEFAULT_PAGE_SIZE;
use crate::view::columns::SortOrder;
use serde::Serialize;
use std::ops::Range;

/// Page cursor for the table.
///
/// `total` tracks the size of the whole collection, not the filtered rows. A
/// `page_size` of 0 is treated as 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub total: usize,
    pub page_size: usize,
    /// 1-based page number.
    pub current: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            total: 0,
            page_size: page_size.max(1),
            current: 1,
        }
    }

    /// Number of pages needed for `rows`; an empty table still has one page.
    pub fn page_count(&self, rows: usize) -> usize {
        rows.div_ceil(self.size()).max(1)
    }

    fn size(&self) -> usize {
        self.page_size.max(1)
    }

    /// Index range of the rows on the current page, clamped to the last page.
    pub fn window(&self, rows: usize) -> Range<usize> {
        let page = self.current.clamp(1, self.page_count(rows));
        let size = self.size();
        let start = (page - 1) * size;
        start..(start + size).min(rows)
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    /// Set only while a create request is in flight.
    pub loading: bool,
    /// Trimmed search text; never `Some("")`.
    pub search_term: Option<String>,
    pub pagination: Pagination,
    pub sort: Option<SortOrder>,
}

impl ViewState {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_slices_pages() {
        let pagination = Pagination {
            total: 25,
            page_size: 10,
            current: 3,
        };
        assert_eq!(pagination.page_count(25), 3);
        assert_eq!(pagination.window(25), 20..25);
    }

    #[test]
    fn test_window_clamps_past_the_last_page() {
        let pagination = Pagination {
            total: 25,
            page_size: 10,
            current: 3,
        };
        assert_eq!(pagination.window(4), 0..4);
        assert_eq!(pagination.window(0), 0..0);
    }

    #[test]
    fn test_zero_page_size_shows_one_row_per_page() {
        let pagination = Pagination {
            total: 3,
            page_size: 0,
            current: 2,
        };
        assert_eq!(pagination.page_count(3), 3);
        assert_eq!(pagination.window(3), 1..2);
        assert_eq!(pagination.window(0), 0..0);
    }
}
