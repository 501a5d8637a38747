//! Page derivation over the filtered results.
//!
//! Nothing here is stored: the page count and the displayed slice are always
//! recomputed from the filtered results, the 1-based page index and the page
//! size.
//!
//! # Example
//!
//! ```rust
//! use epicurious::app::pagination::compute_page;
//!
//! let items: Vec<u32> = (1..=7).collect();
//!
//! let first = compute_page(&items, 1, 6);
//! assert_eq!(first.items.len(), 6);
//! assert_eq!(first.total_pages, 2);
//!
//! let second = compute_page(&items, 2, 6);
//! assert_eq!(second.items, &[7]);
//!
//! assert!(compute_page(&items, 7, 6).items.is_empty());
//! ```

/// Number of recipes shown per page unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// One page of a result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page<'a, T> {
    /// Items on this page, in result order. Empty for out-of-range indices.
    pub items: &'a [T],
    /// Total number of pages, at least 1.
    pub total_pages: usize,
}

/// Returns `ceil(len / page_size)`, never less than 1.
///
/// A page size of 0 is treated as 1.
#[must_use]
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Clamps a 1-based page index into `[1, total_pages]`.
#[must_use]
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slices out page `page_index` (1-based) of `items`.
///
/// The slice runs from `(page_index - 1) * page_size` inclusive to
/// `page_index * page_size` exclusive, cut short at the end of `items`. An index
/// of 0 or past the last page yields an empty slice.
#[must_use]
pub fn compute_page<T>(items: &[T], page_index: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let total_pages = total_pages(items.len(), page_size);

    let start = page_index
        .checked_sub(1)
        .and_then(|p| p.checked_mul(page_size))
        .unwrap_or(usize::MAX);

    let items = if start >= items.len() {
        &items[..0]
    } else {
        let end = start.saturating_add(page_size).min(items.len());
        &items[start..end]
    };

    Page { items, total_pages }
}
