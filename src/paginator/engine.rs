//! Paginator engine
//!
//! Owns the pagination inputs, keeps the page count in step with them and
//! builds [`PageWindow`] descriptors on demand.

use super::types::PageWindow;
use crate::config::PaginatorDefaults;
use crate::error::{Error, Result};
use crate::scrolling::{ScrollingStyle, ScrollingStyleRegistry, ScrollingStyleSelector};
use std::sync::Arc;
use tracing::{debug, warn};

/// Pagination state for one listing
///
/// Setters never fail: out-of-range numbers are clamped when read. The page
/// count is recomputed by every setter it depends on, and descriptors are
/// built fresh on each [`pages`](Self::pages) call, so a descriptor always
/// reflects the latest inputs.
#[derive(Debug, Clone)]
pub struct Paginator {
    defaults: Arc<PaginatorDefaults>,
    registry: Arc<ScrollingStyleRegistry>,
    total_item_count: u64,
    /// 0 means "not set", fall back to the defaults
    item_count_per_page: u64,
    current_page_number: i64,
    page_range: i64,
    page_count: u64,
}

impl Default for Paginator {
    fn default() -> Self {
        Self::new()
    }
}

impl Paginator {
    /// Create a paginator with the built-in defaults and styles
    pub fn new() -> Self {
        Self::from_parts(
            Arc::new(PaginatorDefaults::default()),
            ScrollingStyleRegistry::builtin(),
        )
    }

    /// Create a paginator and apply every non-zero count, in order
    /// total, per-page, current page
    pub fn with_counts(
        total_item_count: i64,
        item_count_per_page: i64,
        current_page: i64,
    ) -> Self {
        let mut paginator = Self::new();
        paginator.apply_counts(total_item_count, item_count_per_page, current_page);
        paginator
    }

    pub(crate) fn from_parts(
        defaults: Arc<PaginatorDefaults>,
        registry: Arc<ScrollingStyleRegistry>,
    ) -> Self {
        let page_range = defaults.page_range;
        let mut paginator = Self {
            defaults,
            registry,
            total_item_count: 0,
            item_count_per_page: 0,
            current_page_number: 1,
            page_range,
            page_count: 0,
        };
        paginator.recalculate_page_count();
        paginator
    }

    pub(crate) fn apply_counts(&mut self, total: i64, per_page: i64, current: i64) {
        if total != 0 {
            self.set_total_item_count(total);
        }
        if per_page != 0 {
            self.set_item_count_per_page(per_page);
        }
        if current != 0 {
            self.set_current_page_number(current);
        }
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Set the total number of items. Negative counts are treated as 0.
    pub fn set_total_item_count(&mut self, count: i64) -> &mut Self {
        self.total_item_count = count.max(0) as u64;
        self.recalculate_page_count();
        self
    }

    /// Total number of items
    pub fn total_item_count(&self) -> u64 {
        self.total_item_count
    }

    /// Set the number of items per page.
    ///
    /// Values below 1 mean "everything on one page" and fall back to the
    /// total item count.
    pub fn set_item_count_per_page(&mut self, count: i64) -> &mut Self {
        self.item_count_per_page = if count < 1 {
            self.total_item_count
        } else {
            count as u64
        };
        self.recalculate_page_count();
        self
    }

    /// Effective number of items per page
    pub fn item_count_per_page(&self) -> u64 {
        if self.item_count_per_page == 0 {
            self.defaults.item_count_per_page.max(1)
        } else {
            self.item_count_per_page
        }
    }

    /// Set the current page number. Stored as given, normalized on read.
    pub fn set_current_page_number(&mut self, page_number: i64) -> &mut Self {
        self.current_page_number = page_number;
        self
    }

    /// Current page number, clamped into the valid page range
    pub fn current_page_number(&self) -> u64 {
        self.normalize_page_number(self.current_page_number)
    }

    /// Set the width of the navigation window
    pub fn set_page_range(&mut self, page_range: i64) -> &mut Self {
        self.page_range = page_range;
        self
    }

    /// Width of the navigation window
    pub fn page_range(&self) -> i64 {
        self.page_range
    }

    /// Defaults this paginator falls back to
    pub fn defaults(&self) -> &PaginatorDefaults {
        &self.defaults
    }

    /// Registry used to resolve style names
    pub fn registry(&self) -> &ScrollingStyleRegistry {
        &self.registry
    }

    // ========================================================================
    // Derived values
    // ========================================================================

    /// Number of pages
    pub fn count(&self) -> u64 {
        self.page_count
    }

    fn recalculate_page_count(&mut self) {
        self.page_count = self.total_item_count.div_ceil(self.item_count_per_page());
    }

    /// Bring a page number into `[1, count()]`.
    ///
    /// With no pages at all only the lower bound applies.
    pub fn normalize_page_number(&self, page_number: i64) -> u64 {
        let page_number = page_number.max(1) as u64;
        let page_count = self.count();

        if page_count > 0 && page_number > page_count {
            page_count
        } else {
            page_number
        }
    }

    /// Bring an item number into `[1, item_count_per_page()]`
    pub fn normalize_item_number(&self, item_number: i64) -> u64 {
        (item_number.max(1) as u64).min(self.item_count_per_page())
    }

    /// Ascending page numbers between two bounds, both normalized first.
    ///
    /// Empty when the normalized lower bound exceeds the upper one.
    pub fn pages_in_range(&self, lower_bound: i64, upper_bound: i64) -> Vec<u64> {
        let lower_bound = self.normalize_page_number(lower_bound);
        let upper_bound = self.normalize_page_number(upper_bound);

        (lower_bound..=upper_bound).collect()
    }

    // ========================================================================
    // Page window
    // ========================================================================

    /// Build the page window descriptor using the given scrolling style
    pub fn pages(&self, selector: impl Into<ScrollingStyleSelector>) -> Result<PageWindow> {
        let style = self.load_scrolling_style(selector.into())?;
        self.pages_with_style(style.as_ref())
    }

    /// Build the page window descriptor using the default scrolling style
    pub fn pages_with_default(&self) -> Result<PageWindow> {
        self.pages(ScrollingStyleSelector::Default)
    }

    /// Build the page window descriptor with a borrowed style
    pub fn pages_with_style(&self, style: &dyn ScrollingStyle) -> Result<PageWindow> {
        let page_count = self.count();
        let current = self.current_page_number();

        let previous = (current > 1).then(|| current - 1);
        let next = (current < page_count).then(|| current + 1);

        let pages_in_range = style.pages(self, None);
        let (Some(&first_page_in_range), Some(&last_page_in_range)) =
            (pages_in_range.iter().min(), pages_in_range.iter().max())
        else {
            warn!(style = style.name(), current, page_count, "Scrolling style produced no pages");
            return Err(Error::invalid_argument(format!(
                "scrolling style '{}' produced an empty page window",
                style.name()
            )));
        };

        debug!(
            style = style.name(),
            current,
            page_count,
            first_page_in_range,
            last_page_in_range,
            "Built page window"
        );

        Ok(PageWindow {
            page_count,
            item_count_per_page: self.item_count_per_page(),
            first: 1,
            current,
            last: page_count,
            previous,
            next,
            pages_in_range,
            first_page_in_range,
            last_page_in_range,
        })
    }

    fn load_scrolling_style(
        &self,
        selector: ScrollingStyleSelector,
    ) -> Result<Arc<dyn ScrollingStyle>> {
        match selector {
            ScrollingStyleSelector::Default => self.registry.resolve(&self.defaults.scrolling_style),
            ScrollingStyleSelector::Named(name) => self.registry.resolve(&name),
            ScrollingStyleSelector::Instance(style) => Ok(style),
        }
    }
}
