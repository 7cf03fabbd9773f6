//! CLI module
//!
//! Command-line interface for inspecting page windows.
//!
//! # Commands
//!
//! - `window` - Print the page window for a listing
//! - `styles` - List registered scrolling styles
//! - `defaults` - Print the effective defaults

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
