// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// We use the "derive" API: the CLI is a plain struct and clap generates the
// parsing code from the attributes on it.
//
// Example:
//   repo-checklist markdown --url https://github.com/linksplatform/Setters \
//       --ext .cs --ignore "Platform.Setters.Tests"
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};

use crate::config::{self, CrawlConfig, IgnoreSet};
use crate::error::CrawlError;

#[derive(Parser, Debug)]
#[command(
    name = "repo-checklist",
    version,
    about = "Crawl a GitHub repository and write a markdown checklist of its files",
    long_about = "repo-checklist walks the tree pages of a GitHub repository, finds every file \
                  with the given extension and writes them as a markdown checklist, grouped \
                  by directory. Handy for tracking which files still need documentation."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a markdown checklist of every matching file
    ///
    /// Example: repo-checklist markdown --url https://github.com/user/repo --ext .rs
    Markdown(MarkdownArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct MarkdownArgs {
    /// Repository (or sub-directory) URL, e.g. https://github.com/user/repo
    #[arg(long)]
    pub url: String,

    /// Extension of the files to list, dot included, e.g. ".rs"
    #[arg(long)]
    pub ext: String,

    /// Space-separated directory patterns to skip, e.g. "vendor tests"
    ///
    /// Each pattern is a regular expression matched anywhere in the
    /// directory path; a matching directory is skipped with everything in it.
    #[arg(long, default_value = "")]
    pub ignore: String,

    /// Directory the checklist file is written to
    #[arg(long, default_value = "results")]
    pub output_dir: PathBuf,

    /// Print the grouped files as JSON instead of writing the checklist
    #[arg(long)]
    pub json: bool,

    /// Maximum number of pages fetched at the same time (0 = no limit)
    #[arg(long, default_value_t = 0)]
    pub max_concurrency: usize,

    /// Pause in milliseconds before each new directory is queued
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Class GitHub puts on listing row links
    #[arg(long, default_value = config::ROW_CLASS)]
    pub row_class: String,
}

impl MarkdownArgs {
    /// Validates the raw arguments and builds the crawl configuration.
    /// Nothing is fetched if this fails.
    pub fn to_config(&self) -> Result<CrawlConfig, CrawlError> {
        let root_url = config::validate_repository_url(&self.url)?;
        let extension = config::validate_extension(&self.ext)?;
        let ignore = IgnoreSet::parse(&self.ignore)?;

        Ok(CrawlConfig::new(root_url, extension)
            .with_ignore(ignore)
            .with_row_class(self.row_class.clone())
            .with_max_concurrency(Some(self.max_concurrency))
            .with_dispatch_delay(Duration::from_millis(self.delay_ms)))
    }
}
