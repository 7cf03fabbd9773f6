//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Page window inspection CLI
#[derive(Parser, Debug)]
#[command(name = "page-window")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Defaults file (YAML, or JSON with a .json extension)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the page window for a listing
    Window {
        /// Total number of items
        #[arg(short, long, allow_negative_numbers = true)]
        total: i64,

        /// Items per page (defaults file value when omitted)
        #[arg(long, allow_negative_numbers = true)]
        per_page: Option<i64>,

        /// Current page number
        #[arg(short, long, default_value = "1", allow_negative_numbers = true)]
        page: i64,

        /// Window width (defaults file value when omitted)
        #[arg(short, long, allow_negative_numbers = true)]
        range: Option<i64>,

        /// Scrolling style name (defaults file value when omitted)
        #[arg(short, long)]
        style: Option<String>,
    },

    /// List registered scrolling styles
    Styles,

    /// Show the effective defaults
    Defaults,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Human-readable output
    Pretty,
}
