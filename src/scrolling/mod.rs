//! Scrolling styles module
//!
//! Supports: All, Jumping, Sliding, Elastic
//!
//! # Overview
//!
//! A scrolling style decides which page numbers show up as quick-navigation
//! links for the current page. Styles are stateless trait objects, selected
//! either directly or by name through a [`ScrollingStyleRegistry`].

mod registry;
mod styles;
mod types;

pub use registry::{ScrollingStyleRegistry, StyleFactory, DEFAULT_NAMESPACE};
pub use styles::{All, Elastic, Jumping, Sliding};
pub use types::{ScrollingStyle, ScrollingStyleSelector};

#[cfg(test)]
mod tests;
