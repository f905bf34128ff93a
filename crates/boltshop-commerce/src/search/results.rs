//! Listing results and pagination.

use crate::catalog::Product;
use serde::Serialize;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed), clamped into range.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages, at least 1.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info, clamping `page` to `[1, total_pages]`.
    ///
    /// `per_page` of zero is treated as one.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page).max(1);
        let page = page.clamp(1, total_pages);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.per_page
    }

    /// Index range of this page's items within the full result list.
    pub fn range(&self) -> std::ops::Range<usize> {
        let start = self.offset().min(self.total);
        let end = (start + self.per_page).min(self.total);
        start..end
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, crate::search::DEFAULT_PAGE_SIZE, 0)
    }
}

/// One page of the shop listing.
#[derive(Debug, Clone, Serialize)]
pub struct ProductPage<'a> {
    /// Products on this page.
    pub items: Vec<&'a Product>,
    /// Pagination info.
    pub pagination: Pagination,
}

impl<'a> ProductPage<'a> {
    /// Cut one page out of the full filtered list.
    pub fn slice(matches: &[&'a Product], page: usize, per_page: usize) -> Self {
        let pagination = Pagination::new(page, per_page, matches.len());
        Self {
            items: matches[pagination.range()].to_vec(),
            pagination,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
