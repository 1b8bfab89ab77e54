//! Fixed-size, 1-indexed pages over an ordered collection.
//!
//! Keeping the page number inside the valid range is the caller's job;
//! [`paginate`] simply returns an empty slice when asked for a page that does
//! not exist.

/// Returns page `page_number` (1-indexed) of `items`.
///
/// The page covers `[(page_number - 1) * page_size, page_number * page_size)`,
/// truncated to the collection. Page 0, a zero page size, and pages past the
/// end all yield an empty slice.
///
/// # Examples
///
/// ```
/// use workjournal::journal_core::paginate;
///
/// let items: Vec<u32> = (0..45).collect();
/// assert_eq!(paginate(&items, 20, 1), &items[0..20]);
/// assert_eq!(paginate(&items, 20, 3), &items[40..45]);
/// assert!(paginate(&items, 20, 4).is_empty());
/// ```
pub fn paginate<T>(items: &[T], page_size: usize, page_number: usize) -> &[T] {
    if page_size == 0 || page_number == 0 {
        return &[];
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `len` items, i.e. `ceil(len / page_size)`.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// Keeps a requested page inside `1..=max(page_count, 1)`.
pub fn clamp_page(page_number: usize, page_count: usize) -> usize {
    page_number.clamp(1, page_count.max(1))
}
