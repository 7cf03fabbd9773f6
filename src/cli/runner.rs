//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::PaginatorDefaults;
use crate::error::{Result, ResultExt};
use crate::paginator::{PageWindow, PaginatorFactory};
use crate::scrolling::ScrollingStyleSelector;
use serde::Serialize;
use std::io::{self, Write};
use tracing::info;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, writing to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_to(&mut out)
    }

    /// Run the CLI command, writing to `out`
    pub fn run_to<W: Write>(&self, out: &mut W) -> Result<()> {
        match &self.cli.command {
            Commands::Window {
                total,
                per_page,
                page,
                range,
                style,
            } => self.window(out, *total, *per_page, *page, *range, style.as_deref()),
            Commands::Styles => self.styles(out),
            Commands::Defaults => self.defaults(out),
        }
    }

    /// Build the factory from the defaults file, or the built-in defaults
    fn factory(&self) -> Result<PaginatorFactory> {
        match &self.cli.config {
            Some(path) => {
                let defaults = PaginatorDefaults::load(path).with_context(|| {
                    format!("Failed to load defaults from '{}'", path.display())
                })?;
                info!(path = %path.display(), "Loaded paginator defaults");
                PaginatorFactory::with_defaults(defaults)
            }
            None => Ok(PaginatorFactory::default()),
        }
    }

    fn window<W: Write>(
        &self,
        out: &mut W,
        total: i64,
        per_page: Option<i64>,
        page: i64,
        range: Option<i64>,
        style: Option<&str>,
    ) -> Result<()> {
        let factory = self.factory()?;
        let mut paginator = factory.paginator();

        paginator.set_total_item_count(total);
        if let Some(per_page) = per_page {
            paginator.set_item_count_per_page(per_page);
        }
        paginator.set_current_page_number(page);
        if let Some(range) = range {
            paginator.set_page_range(range);
        }

        let window = paginator.pages(ScrollingStyleSelector::from(style))?;

        if self.cli.format == OutputFormat::Pretty {
            return write_pretty_window(out, &window).context("Failed to write output");
        }
        self.write_structured(out, &window)
    }

    fn styles<W: Write>(&self, out: &mut W) -> Result<()> {
        let factory = self.factory()?;
        let names = factory.registry().names();

        if self.cli.format == OutputFormat::Pretty {
            for name in &names {
                let marker = if *name == factory.defaults().scrolling_style {
                    " (default)"
                } else {
                    ""
                };
                writeln!(out, "{name}{marker}").context("Failed to write output")?;
            }
            return Ok(());
        }
        self.write_structured(out, &names)
    }

    fn defaults<W: Write>(&self, out: &mut W) -> Result<()> {
        let factory = self.factory()?;
        let defaults = factory.defaults();

        if self.cli.format == OutputFormat::Pretty {
            writeln!(
                out,
                "Scrolling style:      {}\nItems per page:       {}\nPage range:           {}",
                defaults.scrolling_style, defaults.item_count_per_page, defaults.page_range
            )
            .context("Failed to write output")?;
            return Ok(());
        }
        self.write_structured(out, defaults)
    }

    fn write_structured<W: Write, T: Serialize>(&self, out: &mut W, value: &T) -> Result<()> {
        match self.cli.format {
            OutputFormat::Yaml => {
                write!(out, "{}", serde_yaml::to_string(value)?).context("Failed to write output")
            }
            OutputFormat::Json | OutputFormat::Pretty => {
                writeln!(out, "{}", serde_json::to_string_pretty(value)?)
                    .context("Failed to write output")
            }
        }
    }
}

fn write_pretty_window<W: Write>(out: &mut W, window: &PageWindow) -> io::Result<()> {
    writeln!(
        out,
        "Page {} of {} ({} items per page)",
        window.current, window.page_count, window.item_count_per_page
    )?;

    let pages: Vec<String> = window
        .pages_in_range
        .iter()
        .map(|&page| {
            if window.is_current(page) {
                format!("[{page}]")
            } else {
                page.to_string()
            }
        })
        .collect();
    writeln!(out, "Window: {}", pages.join(" "))?;

    let previous = window
        .previous
        .map_or_else(|| "-".to_string(), |page| page.to_string());
    let next = window
        .next
        .map_or_else(|| "-".to_string(), |page| page.to_string());
    writeln!(out, "Previous: {previous}  Next: {next}")
}
