//! Page window calculator.
//!
//! Window selection, in order:
//!
//! 1. `total <= max_buttons` - every page
//! 2. `current <= leading_threshold` - `1..=max_buttons`
//! 3. `current + trailing_lookahead >= total` - `total - trailing_span..=total`
//! 4. otherwise - `current - centered_before..=current + centered_after`
//!
//! With the default constants this gives windows of 6, 10 and 7 pages.

use crate::config::{DEFAULT_INITIAL_PAGE, DEFAULT_PAGE_SIZE, WindowConfig};
use crate::descriptor::PaginationDescriptor;

/// Compute the descriptor for `current_page` of a collection.
///
/// `None` or zero for `current_page` means page 1; `None` or zero for
/// `page_size` means 10.
pub fn compute_descriptor(
    total_items: usize,
    current_page: Option<usize>,
    page_size: Option<usize>,
    window: &WindowConfig,
) -> PaginationDescriptor {
    let current_page = current_page
        .filter(|&p| p > 0)
        .unwrap_or(DEFAULT_INITIAL_PAGE);
    let page_size = page_size.filter(|&s| s > 0).unwrap_or(DEFAULT_PAGE_SIZE);

    let total_pages = total_items.div_ceil(page_size);
    let (start_page, end_page) = page_window(total_pages, current_page, window);

    let start_index = (current_page - 1).saturating_mul(page_size);
    let end_index = start_index
        .saturating_add(page_size - 1)
        .min(total_items.saturating_sub(1));

    PaginationDescriptor {
        total_items,
        current_page,
        page_size,
        total_pages,
        start_page,
        end_page,
        start_index,
        end_index,
        pages: (start_page..=end_page).collect(),
    }
}

/// Compute a descriptor with the default window constants.
pub fn compute_default(
    total_items: usize,
    current_page: Option<usize>,
    page_size: Option<usize>,
) -> PaginationDescriptor {
    compute_descriptor(total_items, current_page, page_size, &WindowConfig::default())
}

/// Select the visible window `(start_page, end_page)`.
///
/// Returns `(1, 0)` when there are no pages. The start never drops below 1
/// and the end never exceeds `total_pages`.
pub fn page_window(total_pages: usize, current_page: usize, window: &WindowConfig) -> (usize, usize) {
    if total_pages <= window.max_buttons {
        return (1, total_pages);
    }

    if current_page <= window.leading_threshold {
        (1, window.max_buttons)
    } else if current_page.saturating_add(window.trailing_lookahead) >= total_pages {
        // 7..=9 total pages would start below 1 here
        let start = total_pages.saturating_sub(window.trailing_span).max(1);
        (start, total_pages)
    } else {
        let start = current_page.saturating_sub(window.centered_before).max(1);
        let end = current_page
            .saturating_add(window.centered_after)
            .min(total_pages);
        (start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn window(total: usize, current: usize) -> (usize, usize) {
        page_window(total, current, &WindowConfig::default())
    }

    #[test]
    fn test_all_pages_when_few() {
        assert_eq!(window(0, 1), (1, 0));
        assert_eq!(window(1, 1), (1, 1));
        assert_eq!(window(6, 5), (1, 6));
    }

    #[test]
    fn test_leading_window() {
        assert_eq!(window(10, 1), (1, 6));
        assert_eq!(window(50, 3), (1, 6));
    }

    #[test]
    fn test_trailing_window_is_ten_wide() {
        assert_eq!(window(10, 10), (1, 10));
        assert_eq!(window(50, 47), (41, 50));
        assert_eq!(window(50, 50), (41, 50));
    }

    #[test]
    fn test_trailing_window_clamped_to_first_page() {
        assert_eq!(window(7, 4), (1, 7));
        assert_eq!(window(9, 6), (1, 9));
    }

    #[test]
    fn test_centered_window_is_seven_wide() {
        assert_eq!(window(50, 4), (1, 7));
        assert_eq!(window(50, 20), (17, 23));
        assert_eq!(window(50, 46), (43, 49));
    }

    #[test]
    fn test_defaults_for_zero_and_none() {
        let d = compute_default(30, Some(0), Some(0));
        assert_eq!(d.current_page, 1);
        assert_eq!(d.page_size, 10);
        assert_eq!(d, compute_default(30, None, None));
    }

    #[test]
    fn test_custom_window() {
        let config = WindowConfig::builder()
            .max_buttons(4usize)
            .leading_threshold(2usize)
            .centered_before(1usize)
            .centered_after(1usize)
            .build()
            .unwrap();
        let d = compute_descriptor(100, Some(5), Some(10), &config);
        assert_eq!(d.pages, vec![4, 5, 6]);
    }
}
