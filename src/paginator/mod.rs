//! Paginator module
//!
//! # Overview
//!
//! A [`Paginator`] turns a total item count, a page size and a current page
//! into a [`PageWindow`]: page count, neighbours and the window of page
//! numbers chosen by a scrolling style. [`PaginatorFactory`] shares one set of
//! defaults and one style registry across many paginators.

mod engine;
mod factory;
mod types;

pub use engine::Paginator;
pub use factory::PaginatorFactory;
pub use types::PageWindow;
