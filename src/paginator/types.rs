//! Page window descriptor
//!
//! The snapshot handed to renderers. Its serialized keys are camelCase and
//! `previous`/`next` are left out when there is no such page.

use serde::{Deserialize, Serialize};

/// Everything a navigation control needs to draw itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// Total number of pages
    pub page_count: u64,
    /// Items shown on each page
    pub item_count_per_page: u64,
    /// First page number (always 1)
    pub first: u64,
    /// Normalized current page number
    pub current: u64,
    /// Last page number (equals `page_count`)
    pub last: u64,
    /// Page before the current one, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<u64>,
    /// Page after the current one, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<u64>,
    /// Page numbers inside the navigation window
    pub pages_in_range: Vec<u64>,
    /// Smallest page number in the window
    pub first_page_in_range: u64,
    /// Largest page number in the window
    pub last_page_in_range: u64,
}

impl PageWindow {
    /// Check if a previous page exists
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Check if a next page exists
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Check if `page` is the current page
    pub fn is_current(&self, page: u64) -> bool {
        self.current == page
    }

    /// Check if `page` is shown in the window
    pub fn in_range(&self, page: u64) -> bool {
        self.pages_in_range.contains(&page)
    }
}
