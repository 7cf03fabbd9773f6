//! Scrolling style implementations
//!
//! Each style turns the paginator's current page and range into a window of
//! page numbers. Bounds are always clamped through
//! [`Paginator::pages_in_range`].

use super::types::ScrollingStyle;
use crate::paginator::Paginator;

// ============================================================================
// All
// ============================================================================

/// Every page in the collection
///
/// Useful when every page must be reachable at once, e.g. a drop-down
/// pagination control. The page range is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct All;

impl ScrollingStyle for All {
    fn name(&self) -> &str {
        "All"
    }

    fn pages(&self, paginator: &Paginator, _page_range: Option<i64>) -> Vec<u64> {
        paginator.pages_in_range(1, paginator.count() as i64)
    }
}

// ============================================================================
// Jumping
// ============================================================================

/// Fixed, non-overlapping blocks of `page_range` pages
///
/// The cursor advances to the upper bound of the block, then the window
/// "jumps" to the next block and the cursor starts again at its beginning.
/// With a range of 5, pages 1-5 show `[1..5]`, pages 6-10 show `[6..10]`.
/// Always uses the paginator's own range.
#[derive(Debug, Clone, Copy, Default)]
pub struct Jumping;

impl ScrollingStyle for Jumping {
    fn name(&self) -> &str {
        "Jumping"
    }

    fn pages(&self, paginator: &Paginator, _page_range: Option<i64>) -> Vec<u64> {
        let page_range = paginator.page_range().max(1);
        let page_number = paginator.current_page_number() as i64;

        // Last page of a block maps to the full range, not 0
        let mut delta = page_number % page_range;
        if delta == 0 {
            delta = page_range;
        }

        let offset = page_number - delta;
        paginator.pages_in_range(offset + 1, offset.saturating_add(page_range))
    }
}

// ============================================================================
// Sliding
// ============================================================================

/// Window centred on the current page
///
/// The window keeps a fixed width and slides with the cursor, pinned to the
/// first or last pages near the edges. This is the default style.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sliding;

impl ScrollingStyle for Sliding {
    fn name(&self) -> &str {
        "Sliding"
    }

    fn pages(&self, paginator: &Paginator, page_range: Option<i64>) -> Vec<u64> {
        let page_count = paginator.count() as i64;
        let page_number = paginator.current_page_number() as i64;
        let page_range = page_range
            .unwrap_or_else(|| paginator.page_range())
            .max(1)
            .min(page_count);

        // ceil(range / 2) for a non-negative range
        let mut delta = (page_range + 1) / 2;

        let (lower_bound, upper_bound) = if page_number - delta > page_count - page_range {
            (page_count - page_range + 1, page_count)
        } else {
            if page_number - delta < 0 {
                delta = page_number;
            }
            let offset = page_number - delta;
            (offset + 1, offset + page_range)
        };

        paginator.pages_in_range(lower_bound, upper_bound)
    }
}

// ============================================================================
// Elastic
// ============================================================================

/// Sliding window that grows as the cursor moves away from the edges
///
/// On the first and last pages the window is `page_range` wide; in the middle
/// it widens up to `2 * page_range - 1` pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Elastic;

impl ScrollingStyle for Elastic {
    fn name(&self) -> &str {
        "Elastic"
    }

    fn pages(&self, paginator: &Paginator, _page_range: Option<i64>) -> Vec<u64> {
        let base_range = paginator.page_range().max(1);
        let page_number = paginator.current_page_number() as i64;
        let page_count = paginator.count() as i64;

        let reach = base_range.saturating_add(page_number - 1);
        let mut page_range = base_range.saturating_mul(2) - 1;

        if reach < page_range {
            page_range = reach;
        } else if reach > page_count {
            page_range = base_range.saturating_add(page_count - page_number);
        }

        Sliding.pages(paginator, Some(page_range))
    }
}
