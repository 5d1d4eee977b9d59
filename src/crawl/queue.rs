// src/crawl/queue.rs
// =============================================================================
// The crawl engine: walks a repository tree of unknown shape, one fetch task
// per directory, and collects every tracked file.
//
// How it works:
// 1. pending = 1, spawn a fetch task for the root URL
// 2. Wait for any task to finish (the JoinSet is our completion queue)
// 3. For every directory on that page: pending += 1, spawn a task for it
//    For every file on that page: push it onto the result
// 4. pending -= 1 for the page we just handled
// 5. Stop when pending reaches 0: every dispatched fetch has reported back
//    and nothing new was found
//
// Only this loop touches `pending` and `files`. Fetch tasks never share
// state with it, they just return their links, so no locking is needed.
//
// There is no visited set on purpose: a directory reachable by two paths
// is fetched twice and its files show up twice.
// =============================================================================

use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use super::page::{self, PageSource};
use crate::config::CrawlConfig;
use crate::error::CrawlError;
use crate::github::{FileLink, LinkClassifier, TypedLink};

/// What a finished crawl hands back.
#[derive(Debug, Clone, Default)]
pub struct CrawlResult {
    /// Every tracked file, in no particular order
    pub files: Vec<FileLink>,
    /// Number of fetch tasks dispatched, root included
    pub pages_fetched: usize,
}

type PageOutcome = (String, Result<Vec<TypedLink>, CrawlError>);

// Shared, read-only pieces every fetch task needs
#[derive(Clone)]
struct Fetcher {
    source: Arc<dyn PageSource>,
    classifier: Arc<LinkClassifier>,
    limiter: Option<Arc<Semaphore>>,
}

impl Fetcher {
    fn dispatch(&self, tasks: &mut JoinSet<PageOutcome>, url: String) {
        let fetcher = self.clone();
        tasks.spawn(async move {
            // The permit is held until the page is extracted
            let _permit = match fetcher.limiter {
                Some(limiter) => limiter.acquire_owned().await.ok(),
                None => None,
            };
            let links = page::extract(fetcher.source.as_ref(), &url, &fetcher.classifier).await;
            (url, links)
        });
    }
}

// Crawls the tree below `config.root_url`.
//
// Any failing page aborts the whole crawl: the error is returned and the
// remaining tasks are aborted when the JoinSet is dropped.
pub async fn crawl(
    source: Arc<dyn PageSource>,
    config: &CrawlConfig,
) -> Result<CrawlResult, CrawlError> {
    let fetcher = Fetcher {
        source,
        classifier: Arc::new(LinkClassifier::from_config(config)),
        limiter: config.max_concurrency.map(|n| Arc::new(Semaphore::new(n))),
    };

    tracing::info!(
        root = %config.root_url,
        extension = %config.extension,
        max_concurrency = ?config.max_concurrency,
        ignore_patterns = config.ignore.len(),
        "starting crawl"
    );

    let mut tasks = JoinSet::new();
    let mut result = CrawlResult::default();

    let mut pending: usize = 1;
    fetcher.dispatch(&mut tasks, config.root_url.to_string());
    result.pages_fetched += 1;

    while pending > 0 {
        // pending always equals tasks.len() here, so this never runs dry
        let Some(joined) = tasks.join_next().await else {
            break;
        };

        let (url, outcome) = joined?;
        let links = match outcome {
            Ok(links) => links,
            Err(e) => {
                tracing::warn!(%url, error = %e, "aborting crawl");
                return Err(e);
            }
        };

        for link in links {
            match link {
                TypedLink::Directory(dir) => {
                    pending += 1;
                    if !config.dispatch_delay.is_zero() {
                        tokio::time::sleep(config.dispatch_delay).await;
                    }
                    tracing::debug!(directory = %dir.name, "queueing directory");
                    fetcher.dispatch(&mut tasks, dir.href);
                    result.pages_fetched += 1;
                }
                TypedLink::File(file) => result.files.push(file),
            }
        }

        pending -= 1;
    }

    tracing::info!(
        pages = result.pages_fetched,
        files = result.files.len(),
        "crawl finished"
    );

    Ok(result)
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is a JoinSet?
//    - A collection of spawned tasks you can await in completion order
//    - join_next() hands back whichever task finished first
//    - Dropping the JoinSet aborts every task still running, which is how
//      an error here cancels the rest of the crawl
//
// 2. Why count with `pending` instead of waiting for the queue to be empty?
//    - The tree has no known size, so "empty" can't be decided up front
//    - A page can only add work while it is being handled, and it is
//      handled before its own decrement, so pending hits 0 exactly once
//
// 3. What is the Semaphore for?
//    - Without a limit every directory becomes a request right away
//    - With --max-concurrency N at most N fetches run at the same time,
//      the rest wait for a permit
// -----------------------------------------------------------------------------
