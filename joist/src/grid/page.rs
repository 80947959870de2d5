//! Pagination windows.

use std::ops::Range;

/// Records per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// A resolved pagination window over a record sequence.
///
/// Pages are one-based. The view carries the page that was asked for, even
/// when it lies past the end; [`PageView::clamped`] gives the nearest valid
/// page and the index range is already bounded by the record count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageView {
    /// The requested page
    pub current_page: usize,
    /// Total pages, at least one
    pub total_pages: usize,
    /// Total records across all pages
    pub total_records: usize,
    /// Configured page size
    pub page_size: usize,
    /// First record index on this page
    pub start: usize,
    /// One past the last record index on this page
    pub end: usize,
}

impl PageView {
    /// Index range of the records on this page.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the requested page lies past the last page.
    pub fn is_overflow(&self) -> bool {
        self.current_page > self.total_pages
    }

    /// Whether there is no earlier page.
    pub fn is_first(&self) -> bool {
        self.current_page <= 1
    }

    /// Whether there is no later page.
    pub fn is_last(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// The requested page clamped into the valid range.
    pub fn clamped(&self) -> usize {
        self.current_page.clamp(1, self.total_pages)
    }
}

/// Resolve a pagination window.
///
/// A zero page size is treated as one. An empty sequence still has one page.
/// The index range never reaches past the record count, so an overflowing
/// page resolves to an empty range rather than a panic.
pub fn paginate(total_records: usize, page_size: usize, current_page: usize) -> PageView {
    let page_size = page_size.max(1);
    let total_pages = total_records.div_ceil(page_size).max(1);
    let start = current_page
        .saturating_sub(1)
        .saturating_mul(page_size)
        .min(total_records);
    let end = (start + page_size).min(total_records);
    PageView {
        current_page,
        total_pages,
        total_records,
        page_size,
        start,
        end,
    }
}
