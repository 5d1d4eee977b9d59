// src/github/link.rs
// =============================================================================
// The typed links a listing page can yield.
//
// A GitHub tree page has lots of anchors. The ones we care about are rows of
// the file listing, and each of those is either:
// - a directory (something to fetch next), or
// - a tracked file (something to put in the checklist)
//
// Anything else is simply "no link" (None), never an error.
// =============================================================================

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use serde::Serialize;

/// A directory of the repository.
///
/// Used both as the next page to crawl and as the grouping key for files,
/// so equality, ordering and hashing only look at `name`. Two links with
/// the same path but different hrefs are the same directory.
#[derive(Debug, Clone, Serialize)]
pub struct DirectoryLink {
    /// Path inside the repository, e.g. "src/github" ("" for the root)
    pub name: String,
    /// Absolute URL of the directory's listing page
    pub href: String,
}

impl PartialEq for DirectoryLink {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for DirectoryLink {}

impl Hash for DirectoryLink {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for DirectoryLink {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DirectoryLink {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

/// A file whose URL ends with the tracked extension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLink {
    /// File name without the extension
    pub name: String,
    /// Absolute URL of the file's blob page
    pub href: String,
    /// The directory the file sits in, derived from `href`
    #[serde(rename = "directory")]
    pub parent: DirectoryLink,
}

/// One classified listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedLink {
    Directory(DirectoryLink),
    File(FileLink),
}
