//! List utilities: local pagination over an already fetched row set and
//! positional row keys for rows the API sends without an id.
use std::ops::Range;

/// Page/page-size state of a table view.
///
/// Purely a view concern: it slices rows that are already in memory and never
/// triggers a fetch. The current page is always kept within
/// `0..total_pages(total)`; an empty row set has one empty page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 0,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size).max(1)
    }

    pub fn last_page(&self, total: usize) -> usize {
        self.total_pages(total) - 1
    }

    /// Requests past the last page land on the last page.
    pub fn set_page(&mut self, page: usize, total: usize) {
        self.page = page.min(self.last_page(total));
    }

    /// Keeps the current page, clamped to the new last page.
    pub fn set_page_size(&mut self, page_size: usize, total: usize) {
        self.page_size = page_size.max(1);
        self.clamp(total);
    }

    /// Re-applies the bounds after the row set changed (e.g. a re-fetch).
    pub fn clamp(&mut self, total: usize) {
        self.page = self.page.min(self.last_page(total));
    }

    /// Index range of the rows shown on the current page.
    pub fn range(&self, total: usize) -> Range<usize> {
        let page = self.page.min(self.last_page(total));
        let start = (page * self.page_size).min(total);
        let end = (start + self.page_size).min(total);
        start..end
    }

    pub fn slice<'a, T>(&self, rows: &'a [T]) -> &'a [T] {
        &rows[self.range(rows.len())]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}

/// A row paired with its position in the fetched sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Keyed<T> {
    pub key: usize,
    pub row: T,
}

/// Assigns each row its index as a stable key for the current fetch.
pub fn with_positional_keys<T>(rows: Vec<T>) -> Vec<Keyed<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(key, row)| Keyed { key, row })
        .collect()
}
