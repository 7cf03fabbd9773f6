//! Paginator factory
//!
//! Bundles validated defaults with a style registry so every paginator for an
//! application is built from the same configuration.

use super::engine::Paginator;
use crate::config::PaginatorDefaults;
use crate::error::{Error, Result};
use crate::scrolling::ScrollingStyleRegistry;
use std::sync::Arc;

/// Creates paginators sharing one set of defaults and styles
#[derive(Debug, Clone)]
pub struct PaginatorFactory {
    defaults: Arc<PaginatorDefaults>,
    registry: Arc<ScrollingStyleRegistry>,
}

impl Default for PaginatorFactory {
    fn default() -> Self {
        Self {
            defaults: Arc::new(PaginatorDefaults::default()),
            registry: ScrollingStyleRegistry::builtin(),
        }
    }
}

impl PaginatorFactory {
    /// Create a factory, checking that the defaults are usable with the registry
    pub fn new(defaults: PaginatorDefaults, registry: Arc<ScrollingStyleRegistry>) -> Result<Self> {
        defaults.validate()?;

        if !registry.contains(&defaults.scrolling_style) {
            return Err(Error::config(format!(
                "default scrolling style '{}' is not registered (available: {})",
                defaults.scrolling_style,
                registry.names().join(", ")
            )));
        }

        Ok(Self {
            defaults: Arc::new(defaults),
            registry,
        })
    }

    /// Create a factory using the built-in styles
    pub fn with_defaults(defaults: PaginatorDefaults) -> Result<Self> {
        Self::new(defaults, ScrollingStyleRegistry::builtin())
    }

    /// Defaults handed to each paginator
    pub fn defaults(&self) -> &PaginatorDefaults {
        &self.defaults
    }

    /// Registry handed to each paginator
    pub fn registry(&self) -> &Arc<ScrollingStyleRegistry> {
        &self.registry
    }

    /// Create an empty paginator
    pub fn paginator(&self) -> Paginator {
        Paginator::from_parts(Arc::clone(&self.defaults), Arc::clone(&self.registry))
    }

    /// Create a paginator and apply every non-zero count, in order
    /// total, per-page, current page
    pub fn create(
        &self,
        total_item_count: i64,
        item_count_per_page: i64,
        current_page: i64,
    ) -> Paginator {
        let mut paginator = self.paginator();
        paginator.apply_counts(total_item_count, item_count_per_page, current_page);
        paginator
    }
}
