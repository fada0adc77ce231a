// src/lib.rs
// =============================================================================
// Library root for word-crawler.
//
// The library holds everything that does real work:
// - trie:   a 27-way trie mapping words to values, with wildcard search
// - crawl:  breadth-first crawler that turns a website into URL -> words
// - page:   the fetcher and HTML parser the crawler talks to
// - index:  glues the crawler to the trie (word -> set of URLs)
//
// The binary in src/main.rs only parses arguments and prints results.
// =============================================================================

#[macro_use]
mod log;

pub mod config;
pub mod crawl;
pub mod error;
pub mod index;
pub mod page;
pub mod trie;

pub use config::{CrawlConfig, FailurePolicy};
pub use crawl::{extract_words, CrawlOutcome, Crawler};
pub use error::{FetchError, IndexError, TrieError};
pub use index::{build_index, build_index_with, invert, IndexBuilder, WordIndex};
pub use page::{Fetcher, HtmlParser, HttpFetcher, PageParser};
pub use trie::{normalize_key, slot_of, Trie, WILDCARD};
