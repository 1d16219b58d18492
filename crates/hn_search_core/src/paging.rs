//! Pagination arithmetic shared by the view-model.
//!
//! Both helpers degrade instead of failing: bad page numbers or a zero page
//! size give an empty page, and an empty or non-finite button range gives the
//! `[0]` placeholder.

/// Returns the items shown on the 1-based `page_number`.
///
/// The page starts at `(page_number - 1) * page_size` and holds at most
/// `page_size` items. Pages below 1, pages past the end and a zero page size
/// all yield an empty slice.
pub fn page_slice<T>(items: &[T], page_number: i64, page_size: usize) -> &[T] {
    if page_number < 1 || page_size == 0 {
        return &[];
    }
    let Ok(page_index) = usize::try_from(page_number - 1) else {
        return &[];
    };
    let Some(start) = page_index.checked_mul(page_size) else {
        return &[];
    };
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Number of pages needed for `total` items, as `ceil(total / page_size)`.
///
/// A zero page size produces a non-finite value on purpose so that
/// [`page_buttons`] falls back to its placeholder.
pub fn page_count(total: usize, page_size: usize) -> f64 {
    (total as f64 / page_size as f64).ceil()
}

/// Longest range [`page_buttons`] will enumerate. Wider ranges are treated
/// like non-finite ones.
pub const MAX_BUTTON_RANGE: u64 = 1 << 20;

/// Page numbers to render as controls, `start..=end` in ascending order.
///
/// When `end - start <= 0`, either bound is not finite, or the range is wider
/// than [`MAX_BUTTON_RANGE`], the result is the single placeholder `[0]`
/// (not `[start]`).
pub fn page_buttons(start: f64, end: f64) -> Vec<i64> {
    let span = end - start;
    if !start.is_finite() || !end.is_finite() || span <= 0.0 {
        return vec![0];
    }
    let steps = span.floor();
    if steps >= MAX_BUTTON_RANGE as f64 {
        return vec![0];
    }
    (0..=steps as u64)
        .map(|step| (start + step as f64) as i64)
        .collect()
}
