//! Paginator defaults
//!
//! Holds the settings every paginator falls back to when a value was never
//! set explicitly. A `PaginatorDefaults` is built once (in code or loaded from
//! a YAML/JSON file) and handed to a [`PaginatorFactory`](crate::paginator::PaginatorFactory).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Defaults
// ============================================================================

/// Fallback settings shared by all paginators created from one factory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorDefaults {
    /// Scrolling style used when `pages()` is called without a selector
    #[serde(default = "default_scrolling_style")]
    pub scrolling_style: String,

    /// Items per page when none was set on the paginator
    #[serde(default = "default_item_count_per_page")]
    pub item_count_per_page: u64,

    /// Initial width of the navigation window
    #[serde(default = "default_page_range")]
    pub page_range: i64,
}

fn default_scrolling_style() -> String {
    "Sliding".to_string()
}

fn default_item_count_per_page() -> u64 {
    10
}

fn default_page_range() -> i64 {
    5
}

impl Default for PaginatorDefaults {
    fn default() -> Self {
        Self {
            scrolling_style: default_scrolling_style(),
            item_count_per_page: default_item_count_per_page(),
            page_range: default_page_range(),
        }
    }
}

impl PaginatorDefaults {
    /// Set the default scrolling style name
    #[must_use]
    pub fn with_scrolling_style(mut self, name: impl Into<String>) -> Self {
        self.scrolling_style = name.into();
        self
    }

    /// Set the default item count per page
    #[must_use]
    pub fn with_item_count_per_page(mut self, count: u64) -> Self {
        self.item_count_per_page = count;
        self
    }

    /// Set the default page range
    #[must_use]
    pub fn with_page_range(mut self, range: i64) -> Self {
        self.page_range = range;
        self
    }

    /// Check that the defaults can be used to build pages
    pub fn validate(&self) -> Result<()> {
        if self.scrolling_style.trim().is_empty() {
            return Err(Error::invalid_config_value(
                "scrolling_style",
                "must not be empty",
            ));
        }
        if self.item_count_per_page == 0 {
            return Err(Error::invalid_config_value(
                "item_count_per_page",
                "must be at least 1",
            ));
        }
        if self.page_range < 1 {
            return Err(Error::invalid_config_value(
                "page_range",
                format!("must be at least 1, got {}", self.page_range),
            ));
        }
        Ok(())
    }

    /// Parse and validate defaults from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let defaults: Self = serde_yaml::from_str(yaml)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Parse and validate defaults from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let defaults: Self = serde_json::from_str(json)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Load defaults from a file.
    ///
    /// Files ending in `.json` are parsed as JSON, anything else as YAML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read defaults file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&content)
        } else {
            Self::from_yaml_str(&content)
        }
    }
}
