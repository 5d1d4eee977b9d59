// src/crawl/page.rs
// =============================================================================
// Fetches one listing page and pulls the typed links out of it.
//
// How it works:
// 1. Fetch the page body through a PageSource (one request, no retries)
// 2. Parse it into a DOM with scraper
// 3. Walk every node in document order (pre-order)
// 4. Hand every <a> element to the LinkClassifier, keep the hits
//
// PageSource is a trait so the crawl engine can be driven by an in-memory
// site in tests and by reqwest in the real binary.
// =============================================================================

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use scraper::{ElementRef, Html};

use crate::error::CrawlError;
use crate::github::{LinkClassifier, TypedLink};

/// Something that can turn a URL into a page body.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, CrawlError>;
}

/// The real page source: plain GET requests over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, CrawlError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(concat!("repo-checklist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CrawlError::Client {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch(&self, url: &str) -> Result<String, CrawlError> {
        let fetch_error = |reason: String| CrawlError::Fetch {
            url: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        // Only a plain 200 counts, a 204 or 206 listing is as useless as a 404
        if response.status() != StatusCode::OK {
            return Err(fetch_error(format!("HTTP {}", response.status())));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        String::from_utf8(body.to_vec()).map_err(|e| CrawlError::Parse {
            url: url.to_string(),
            reason: format!("body is not UTF-8 text: {}", e),
        })
    }
}

// Fetches `url` and returns every typed link on it, in page order.
pub async fn extract(
    source: &dyn PageSource,
    url: &str,
    classifier: &LinkClassifier,
) -> Result<Vec<TypedLink>, CrawlError> {
    let body = source.fetch(url).await?;
    let links = extract_links(&body, classifier);
    tracing::debug!(url, links = links.len(), "extracted listing page");
    Ok(links)
}

// Parses `html` and classifies every anchor element in it.
pub fn extract_links(html: &str, classifier: &LinkClassifier) -> Vec<TypedLink> {
    let document = Html::parse_document(html);

    // descendants() is a pre-order walk, so the result keeps page order
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().name() == "a")
        .filter_map(|anchor| classifier.classify(anchor))
        .collect()
}
