// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from a seed URL
// - Follows only links that start with an allowed prefix
// - Configurable depth limit; each URL is visited at most once
// - Bounded number of concurrent fetches
// - Turns every visited page into a set of words
// =============================================================================

mod queue;
mod words;

// Re-export the crawler and the word splitter
pub use queue::{CrawlOutcome, Crawler};
pub use words::extract_words;
