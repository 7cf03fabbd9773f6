//! # page-window
//!
//! Pagination math for navigation controls: given a total item count, a page
//! size and a current page, compute the page count, the neighbouring pages and
//! the window of page numbers to show, using a pluggable scrolling style.
//!
//! ## Features
//!
//! - **Clamping, never failing**: out-of-range page and item numbers are
//!   normalized instead of rejected
//! - **Scrolling styles**: All, Jumping, Sliding and Elastic, plus your own
//!   through the [`ScrollingStyle`](scrolling::ScrollingStyle) trait
//! - **Registry**: select styles by name, register custom ones at startup
//! - **Serializable output**: [`PageWindow`](paginator::PageWindow) serializes
//!   to the camelCase key set template engines expect
//!
//! ## Quick Start
//!
//! ```rust
//! use page_window::{Paginator, Result};
//!
//! fn main() -> Result<()> {
//!     let mut paginator = Paginator::with_counts(150, 10, 7);
//!     paginator.set_page_range(5);
//!
//!     let window = paginator.pages("Jumping")?;
//!     assert_eq!(window.pages_in_range, vec![6, 7, 8, 9, 10]);
//!     assert_eq!(window.previous, Some(6));
//!     assert_eq!(window.next, Some(8));
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! PaginatorFactory        PaginatorDefaults + ScrollingStyleRegistry
//!        │ create()
//!        ▼
//! Paginator               count, normalize, pages_in_range, pages
//!        │ ScrollingStyle::pages()
//!        ▼
//! All │ Jumping │ Sliding │ Elastic │ (registered)
//!        │
//!        ▼
//! PageWindow              handed to the renderer
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Paginator defaults and loading
pub mod config;

/// Paginator engine and page window descriptor
pub mod paginator;

/// Scrolling styles and the style registry
pub mod scrolling;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PaginatorDefaults;
pub use error::{Error, Result};
pub use paginator::{PageWindow, Paginator, PaginatorFactory};
pub use scrolling::{ScrollingStyle, ScrollingStyleRegistry, ScrollingStyleSelector};
