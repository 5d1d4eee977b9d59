// src/error.rs
// =============================================================================
// Typed errors for the crawl core.
//
// Every one of these aborts the current run. The core never exits the
// process itself; it hands a CrawlError back up to main.rs, which prints it
// and picks the exit code.
// =============================================================================

use thiserror::Error;

/// Everything that can stop a crawl.
#[derive(Debug, Error)]
pub enum CrawlError {
    /// Transport failure or a non-200 status for a listing page
    #[error("failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The HTTP client itself could not be set up
    #[error("could not build HTTP client: {reason}")]
    Client { reason: String },

    /// The page body could not be read as markup
    #[error("failed to parse {url}: {reason}")]
    Parse { url: String, reason: String },

    /// The repository URL does not point at the source host
    #[error("invalid repository URL '{url}': expected https://github.com/<owner>/<repo>")]
    InvalidUrl { url: String },

    /// The extension is not a dot-prefixed token such as ".rs"
    #[error("invalid extension '{extension}': expected something like \".rs\"")]
    InvalidExtension { extension: String },

    /// An ignore pattern is not a valid regular expression
    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidIgnorePattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A fetch task panicked or was cancelled before reporting back
    #[error("crawl task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl CrawlError {
    /// True for the errors raised before any network traffic happens.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CrawlError::InvalidUrl { .. }
                | CrawlError::InvalidExtension { .. }
                | CrawlError::InvalidIgnorePattern { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_names_url() {
        let err = CrawlError::Fetch {
            url: "https://github.com/o/r".to_string(),
            reason: "HTTP 404 Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to fetch https://github.com/o/r: HTTP 404 Not Found"
        );
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_client_error_does_not_pose_as_fetch() {
        let err = CrawlError::Client {
            reason: "no TLS backend".to_string(),
        };
        assert_eq!(err.to_string(), "could not build HTTP client: no TLS backend");
        assert!(!err.is_input_error());
    }

    #[test]
    fn test_input_errors() {
        let err = CrawlError::InvalidExtension {
            extension: "rs".to_string(),
        };
        assert!(err.is_input_error());
    }
}
