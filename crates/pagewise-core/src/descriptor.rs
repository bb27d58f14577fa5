//! Pagination descriptor.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Snapshot of pagination state for one page.
///
/// Produced by [`compute_descriptor`](crate::compute_descriptor) and never
/// mutated afterwards; a page change produces a new descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationDescriptor {
    /// Number of items in the collection.
    pub total_items: usize,
    /// Current page (1-based).
    pub current_page: usize,
    /// Items per page.
    pub page_size: usize,
    /// `ceil(total_items / page_size)`.
    pub total_pages: usize,
    /// First page in the visible window.
    pub start_page: usize,
    /// Last page in the visible window (below `start_page` when there are no pages).
    pub end_page: usize,
    /// Index of the first item on the current page.
    pub start_index: usize,
    /// Index of the last item on the current page (inclusive).
    pub end_index: usize,
    /// Visible window, `start_page..=end_page`.
    pub pages: Vec<usize>,
}

impl PaginationDescriptor {
    /// Half-open item range for the current page, clamped to the collection.
    ///
    /// Empty when the collection is empty or the page lies past the end.
    pub fn item_range(&self) -> Range<usize> {
        let start = self.start_index.min(self.total_items);
        if self.total_items == 0 {
            return start..start;
        }
        let end = self
            .end_index
            .saturating_add(1)
            .clamp(start, self.total_items);
        start..end
    }

    /// Number of items on the current page.
    pub fn item_count(&self) -> usize {
        self.item_range().len()
    }

    /// Slice the current page out of `items`.
    ///
    /// `items` should be the collection this descriptor was computed for;
    /// the range is clamped again to its length.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let range = self.item_range();
        let end = range.end.min(items.len());
        let start = range.start.min(end);
        &items[start..end]
    }

    pub fn is_first_page(&self) -> bool {
        self.current_page <= 1
    }

    pub fn is_last_page(&self) -> bool {
        self.current_page >= self.total_pages
    }

    /// Whether there is more than one page to choose from.
    pub fn has_multiple_pages(&self) -> bool {
        self.pages.len() > 1
    }

    /// Lowest page in the window.
    pub fn first_visible(&self) -> Option<usize> {
        self.pages.first().copied()
    }

    /// Highest page in the window.
    pub fn last_visible(&self) -> Option<usize> {
        self.pages.last().copied()
    }

    /// Check whether `page` is inside `1..=total_pages`.
    pub fn contains_page(&self, page: usize) -> bool {
        (1..=self.total_pages).contains(&page)
    }
}
