// src/github/mod.rs
// =============================================================================
// This module knows how GitHub lays out its tree listing pages.
//
// Submodules:
// - link: the typed links a listing row can be (directory / tracked file)
// - classify: turns one anchor element into a typed link, or nothing
//
// Nothing in here touches the network; see crawl/ for that.
// =============================================================================

mod classify;
mod link;

pub use classify::LinkClassifier;
pub use link::{DirectoryLink, FileLink, TypedLink};
