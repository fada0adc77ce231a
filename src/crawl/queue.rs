// src/crawl/queue.rs
// =============================================================================
// Breadth-first crawl of a website.
//
// How it works:
// 1. Start with the seed URL in the queue at depth 0
// 2. Take every queued URL at the current depth (one "layer")
// 3. Fetch the layer, up to `concurrency` pages at a time, in queue order
// 4. For each page: queue new allowed links at depth + 1, extract its words
// 5. Repeat until the queue is empty or the next layer is deeper than max_depth
//
// Dedup and depth:
// - A URL gets its depth the first time it is seen and is queued only then
// - Only the Frontier decides what has been seen, so concurrent fetches can
//   never queue a URL twice or give it two depths
//
// Failures:
// - FailurePolicy::Abort (default): the first failed fetch ends the crawl
// - FailurePolicy::SkipFailed: the URL is recorded in `skipped` and ignored
//
// Rust concepts:
// - HashMap: URL -> depth of first discovery (doubles as the "seen" set)
// - VecDeque: FIFO queue for breadth-first crawling
// - Streams: `buffered(n)` runs n fetches at once but yields in order
// =============================================================================

use std::collections::{HashMap, HashSet, VecDeque};

use futures::stream::{self, StreamExt};

use super::extract_words;
use crate::config::{CrawlConfig, FailurePolicy};
use crate::error::FetchError;
use crate::page::{Fetcher, PageParser};

// Represents a page in the crawl queue
#[derive(Debug, Clone, PartialEq, Eq)]
struct CrawlItem {
    url: String,
    depth: usize, // How many link hops from the seed URL
}

// Owns every "have we seen this URL?" decision for one crawl
#[derive(Debug, Default)]
struct Frontier {
    queue: VecDeque<CrawlItem>,
    depths: HashMap<String, usize>,
}

impl Frontier {
    // The seed is always crawled, whatever the allowed prefixes say
    fn seeded(seed_url: &str) -> Self {
        let mut frontier = Self::default();
        frontier.push(seed_url.to_string(), 0);
        frontier
    }

    fn push(&mut self, url: String, depth: usize) {
        self.depths.insert(url.clone(), depth);
        self.queue.push_back(CrawlItem { url, depth });
    }

    // Queues a link found on a page, unless it was seen before or falls
    // outside the allowed prefixes. Returns whether it was queued.
    fn discover(&mut self, url: String, depth: usize, config: &CrawlConfig) -> bool {
        if self.depths.contains_key(&url) || !config.is_allowed(&url) {
            return false;
        }
        self.push(url, depth);
        true
    }

    // Pops every queued URL that shares the depth of the queue's front.
    //
    // Returns None when the queue is empty, or when the front is already
    // deeper than max_depth. FIFO order means everything behind it is at
    // least as deep, so the rest of the queue is dropped.
    fn next_layer(&mut self, max_depth: usize) -> Option<Vec<CrawlItem>> {
        let depth = self.queue.front()?.depth;
        if depth > max_depth {
            debug_log!("  Stopping: next depth {} exceeds max depth {}", depth, max_depth);
            self.queue.clear();
            return None;
        }

        let mut layer = Vec::new();
        while let Some(item) = self.queue.pop_front() {
            if item.depth != depth {
                self.queue.push_front(item);
                break;
            }
            layer.push(item);
        }
        Some(layer)
    }
}

// Everything a finished crawl knows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlOutcome {
    /// Every visited URL with the words found on it
    pub pages: HashMap<String, HashSet<String>>,
    /// Depth of first discovery for every URL that was ever queued,
    /// including ones past max_depth that were never fetched
    pub depths: HashMap<String, usize>,
    /// Fetch failures that were skipped (only with FailurePolicy::SkipFailed)
    pub skipped: Vec<FetchError>,
}

impl CrawlOutcome {
    pub fn depth_of(&self, url: &str) -> Option<usize> {
        self.depths.get(url).copied()
    }

    pub fn visited(&self, url: &str) -> bool {
        self.pages.contains_key(url)
    }
}

// Breadth-first crawler over a Fetcher and a PageParser
#[derive(Debug, Clone)]
pub struct Crawler<F, P> {
    fetcher: F,
    parser: P,
    config: CrawlConfig,
}

impl<F: Fetcher, P: PageParser> Crawler<F, P> {
    pub fn new(fetcher: F, parser: P, config: CrawlConfig) -> Self {
        Self {
            fetcher,
            parser,
            config,
        }
    }

    pub fn config(&self) -> &CrawlConfig {
        &self.config
    }

    // Crawls from `seed_url`, visiting pages up to `max_depth` hops away
    //
    // Example:
    //   max_depth=0: only the seed page
    //   max_depth=1: the seed page + the allowed pages it links to
    //   max_depth=2: ... + the allowed pages those link to
    pub async fn crawl(&self, seed_url: &str, max_depth: usize) -> Result<CrawlOutcome, FetchError> {
        debug_log!("Crawling from {} (max depth {})", seed_url, max_depth);

        let mut frontier = Frontier::seeded(seed_url);
        let mut pages = HashMap::new();
        let mut skipped = Vec::new();

        while let Some(layer) = frontier.next_layer(max_depth) {
            let mut fetches = stream::iter(layer)
                .map(|item| async move {
                    let result = self.fetcher.fetch(&item.url).await;
                    (item, result)
                })
                .buffered(self.config.concurrency.max(1));

            while let Some((item, result)) = fetches.next().await {
                let raw = match (result, self.config.failure_policy) {
                    (Ok(raw), _) => raw,
                    (Err(e), FailurePolicy::Abort) => return Err(e),
                    (Err(e), FailurePolicy::SkipFailed) => {
                        debug_log!("  Warning: skipping {}: {}", item.url, e);
                        skipped.push(e);
                        continue;
                    }
                };

                debug_log!("  Crawled [depth {}]: {}", item.depth, item.url);

                for link in self.parser.extract_links(&raw, &item.url) {
                    frontier.discover(link, item.depth + 1, &self.config);
                }

                let words = extract_words(&self.parser.extract_text(&raw));
                pages.insert(item.url, words);
            }
        }

        Ok(CrawlOutcome {
            pages,
            depths: frontier.depths,
            skipped,
        })
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. buffered vs buffer_unordered
//    - Both run up to N futures at once
//    - buffer_unordered yields results as they finish
//    - buffered yields them in the order they went in, so links are
//      discovered in the same order a one-at-a-time crawl would find them
//
// 2. Why pop a whole layer at a time?
//    - Every URL at depth d is queued before any URL at depth d+1
//    - So the layer is exactly the set of pages a sequential crawl would
//      fetch next, and they can be fetched together
//
// 3. What happens to in-flight fetches on abort?
//    - `return Err(e)` drops the stream, which drops (cancels) its futures
// -----------------------------------------------------------------------------
