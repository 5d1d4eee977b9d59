// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Set up logging (tracing, filtered with RUST_LOG)
// 2. Parse command-line arguments using clap
// 3. Validate them into a CrawlConfig (nothing is fetched if that fails)
// 4. Crawl the repository tree
// 5. Write the markdown checklist (or print JSON)
// 6. Exit with proper code (0 = success, 2 = error)
//
// The crawl core never exits the process on its own. Every failure comes
// back here as an error value and this file decides what to do with it.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod error;
mod github;
mod report;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, MarkdownArgs};
use config::CrawlConfig;
use crawl::{CrawlResult, PageSource};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    init_logging();

    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            if e
                .downcast_ref::<error::CrawlError>()
                .is_some_and(error::CrawlError::is_input_error)
            {
                eprintln!(
                    "Usage: repo-checklist markdown --url \"https://github.com/<owner>/<repo>\" \
                     --ext \"<extension>\" [--ignore \"<dirs to skip>\"]"
                );
            }
            2
        }
    };

    std::process::exit(exit_code);
}

// Logs go to stderr so --json output on stdout stays clean
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Markdown(args) => handle_markdown(&args).await,
    }
}

// Handles the 'markdown' subcommand
async fn handle_markdown(args: &MarkdownArgs) -> Result<i32> {
    let config = args.to_config().context("invalid arguments")?;

    if !args.json {
        println!("🔍 Crawling repository: {}", config.root_url);
        println!("📄 Looking for *{} files", config.extension);
        if !config.ignore.is_empty() {
            println!("🚫 Skipping directories matching: {}", args.ignore);
        }
    }

    let source: Arc<dyn PageSource> = Arc::new(crawl::HttpSource::new()?);

    if args.json {
        let result = crawl_repository(source, &config).await?;
        println!("{}", report::to_json(&report::group(&result.files))?);
        return Ok(0);
    }

    let checklist = write_checklist(source, &config, &args.output_dir).await?;

    println!(
        "📊 Found {} file(s) in {} director(ies), {} page(s) fetched",
        checklist.files, checklist.directories, checklist.pages_fetched
    );
    println!("✅ Checklist written to {}", checklist.path.display());

    Ok(0)
}

// Summary of a written checklist, for the progress output
#[derive(Debug)]
struct Checklist {
    path: PathBuf,
    files: usize,
    directories: usize,
    pages_fetched: usize,
}

async fn crawl_repository(
    source: Arc<dyn PageSource>,
    config: &CrawlConfig,
) -> Result<CrawlResult> {
    crawl::crawl(source, config)
        .await
        .with_context(|| format!("crawl of {} failed", config.root_url))
}

// Crawls the repository and writes the checklist into `output_dir`.
// The file is only created once the whole crawl has succeeded, so a failed
// run never leaves a partial checklist behind.
async fn write_checklist(
    source: Arc<dyn PageSource>,
    config: &CrawlConfig,
    output_dir: &Path,
) -> Result<Checklist> {
    let result = crawl_repository(source, config).await?;
    let grouped = report::group(&result.files);
    let path = report::write(output_dir, &config.root_url, &grouped)?;

    Ok(Checklist {
        path,
        files: result.files.len(),
        directories: grouped.len(),
        pages_fetched: result.pages_fetched,
    })
}
