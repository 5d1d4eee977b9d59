// src/config.rs
// =============================================================================
// Crawl configuration, built once at the CLI boundary and passed by
// reference into the crawl engine.
//
// What lives here:
// - Input validation for the repository URL and the file extension
// - IgnoreSet: the compiled ignore patterns
// - CrawlConfig: everything one crawl needs to know
//
// There is no config file and no global state; main.rs owns the only
// CrawlConfig of a run.
// =============================================================================

use std::time::Duration;

use regex::Regex;
use url::Url;

use crate::error::CrawlError;

/// The host every repository URL must point at.
pub const SOURCE_HOST: &str = "github.com";

/// The class GitHub puts on the anchor of every directory/file row in a
/// tree listing. This is the site's markup, not ours: if GitHub changes
/// it, override it with --row-class.
pub const ROW_CLASS: &str = "js-navigation-open link-gray-dark";

// Checks that the repository URL is an https URL on the source host.
//
// Example:
//   "https://github.com/linksplatform/Setters" -> Ok(Url)
//   "https://gitlab.com/user/repo"            -> Err(InvalidUrl)
pub fn validate_repository_url(raw: &str) -> Result<Url, CrawlError> {
    let invalid = || CrawlError::InvalidUrl {
        url: raw.to_string(),
    };

    let pattern = Regex::new(&format!(r"^https://{}/.*$", regex::escape(SOURCE_HOST)))
        .map_err(|_| invalid())?;
    if !pattern.is_match(raw) {
        return Err(invalid());
    }

    Url::parse(raw).map_err(|_| invalid())
}

// Checks that the extension is a literal dot-prefixed token (".go", ".md").
// It is used as an anchored suffix, never as a glob.
pub fn validate_extension(raw: &str) -> Result<String, CrawlError> {
    let invalid = || CrawlError::InvalidExtension {
        extension: raw.to_string(),
    };

    let pattern = Regex::new(r"^\.\S*$").map_err(|_| invalid())?;
    if !pattern.is_match(raw) {
        return Err(invalid());
    }

    Ok(raw.to_string())
}

/// Compiled ignore patterns. A directory whose name matches any of them is
/// dropped together with its whole subtree.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet {
    patterns: Vec<Regex>,
}

impl IgnoreSet {
    /// Parses the space-delimited form used on the command line.
    /// Empty fragments are dropped, so "" means "ignore nothing".
    pub fn parse(raw: &str) -> Result<Self, CrawlError> {
        Self::from_patterns(raw.split_whitespace())
    }

    pub fn from_patterns<I, S>(patterns: I) -> Result<Self, CrawlError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for pattern in patterns {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                continue;
            }
            let regex = Regex::new(pattern).map_err(|source| CrawlError::InvalidIgnorePattern {
                pattern: pattern.to_string(),
                source,
            })?;
            compiled.push(regex);
        }
        Ok(Self { patterns: compiled })
    }

    /// True if any pattern is found anywhere in `name`.
    pub fn matches(&self, name: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(name))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

/// Everything one crawl needs.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// The directory the crawl starts from
    pub root_url: Url,
    /// Tracked file extension, dot included
    pub extension: String,
    pub ignore: IgnoreSet,
    /// Exact class an anchor must carry to count as a listing row
    pub row_class: String,
    /// Upper bound on simultaneous fetches; None means one task per
    /// directory with no limit
    pub max_concurrency: Option<usize>,
    /// Pause before each sub-directory dispatch
    pub dispatch_delay: Duration,
}

impl CrawlConfig {
    /// Builds a config with the defaults: GitHub's row class, unbounded
    /// concurrency, no dispatch delay and nothing ignored.
    pub fn new(root_url: Url, extension: impl Into<String>) -> Self {
        Self {
            root_url,
            extension: extension.into(),
            ignore: IgnoreSet::default(),
            row_class: ROW_CLASS.to_string(),
            max_concurrency: None,
            dispatch_delay: Duration::ZERO,
        }
    }

    pub fn with_ignore(mut self, ignore: IgnoreSet) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_row_class(mut self, row_class: impl Into<String>) -> Self {
        self.row_class = row_class.into();
        self
    }

    /// A limit of 0 is treated as "no limit".
    pub fn with_max_concurrency(mut self, limit: Option<usize>) -> Self {
        self.max_concurrency = limit.filter(|n| *n > 0);
        self
    }

    pub fn with_dispatch_delay(mut self, delay: Duration) -> Self {
        self.dispatch_delay = delay;
        self
    }

    /// Scheme, host and port of the root URL. Relative hrefs on every
    /// listing page are resolved against this.
    pub fn origin(&self) -> Url {
        let mut origin = self.root_url.clone();
        origin.set_path("/");
        origin.set_query(None);
        origin.set_fragment(None);
        origin
    }
}
