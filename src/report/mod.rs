// src/report/mod.rs
// =============================================================================
// This module turns a finished crawl into something a person can use.
//
// Submodules:
// - group: files -> directory groups
// - markdown: the checklist file
//
// This file also holds the JSON form printed by --json.
// =============================================================================

mod group;
pub mod markdown;

pub use group::{group, Grouped};
pub use markdown::write;

use anyhow::Result;
use serde::Serialize;

use crate::github::FileLink;

/// One directory and its files, as printed by --json.
#[derive(Debug, Serialize)]
pub struct DirectoryReport<'a> {
    pub directory: &'a str,
    pub href: &'a str,
    pub files: &'a [FileLink],
}

pub fn to_json(grouped: &Grouped) -> Result<String> {
    let report: Vec<DirectoryReport<'_>> = grouped
        .iter()
        .map(|(dir, files)| DirectoryReport {
            directory: &dir.name,
            href: &dir.href,
            files,
        })
        .collect();
    Ok(serde_json::to_string_pretty(&report)?)
}
