// src/crawl/mod.rs
// =============================================================================
// This module walks a GitHub repository tree.
//
// Submodules:
// - page: fetches one listing page and extracts its typed links
// - queue: the engine that fans out one fetch task per directory and
//   knows when the whole tree has been seen
//
// Rust concepts:
// - Traits as seams: PageSource lets tests swap the network for a HashMap
// - Async tasks: every directory is fetched on its own tokio task
// =============================================================================

mod page;
mod queue;

pub use page::{HttpSource, PageSource};
pub use queue::{crawl, CrawlResult};
