// src/report/group.rs
// Partitions crawled files by the directory they live in.

use std::collections::BTreeMap;

use crate::github::{DirectoryLink, FileLink};

/// Directory -> its files, in the order they were found.
///
/// Keyed by directory name (see `DirectoryLink`'s `Ord`), so two runs over
/// the same files give the same groups whatever order the crawl found them in.
pub type Grouped = BTreeMap<DirectoryLink, Vec<FileLink>>;

pub fn group(files: &[FileLink]) -> Grouped {
    let mut grouped = Grouped::new();
    for file in files {
        grouped
            .entry(file.parent.clone())
            .or_default()
            .push(file.clone());
    }
    grouped
}
