// src/index.rs
// =============================================================================
// Builds the word index: crawl a site, then invert URL -> words into
// word -> set of URLs stored in a Trie.
//
// The build is all-or-nothing: if the crawl fails, the caller gets the error
// and no index at all.
// =============================================================================

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::config::CrawlConfig;
use crate::crawl::{CrawlOutcome, Crawler};
use crate::error::IndexError;
use crate::page::{Fetcher, HtmlParser, HttpFetcher, PageParser};
use crate::trie::Trie;

/// Word -> URLs of every page the word appeared on
pub type WordIndex = Trie<BTreeSet<String>>;

// Inverts URL -> words into word -> URLs
//
// A word seen for the first time gets an empty set; every page it appears on
// is then added to that set, so repeats on the same page are harmless.
pub fn invert(pages: &HashMap<String, HashSet<String>>) -> WordIndex {
    let mut index = WordIndex::new();

    for (url, words) in pages {
        for word in words {
            if !index.contains_key(word) {
                index.set(word, BTreeSet::new());
            }
            if let Ok(urls) = index.get_mut(word) {
                urls.insert(url.clone());
            }
        }
    }

    index
}

#[derive(Debug, Clone)]
pub struct IndexBuilder<F, P> {
    crawler: Crawler<F, P>,
}

impl<F: Fetcher, P: PageParser> IndexBuilder<F, P> {
    pub fn new(crawler: Crawler<F, P>) -> Self {
        Self { crawler }
    }

    pub async fn build(&self, seed_url: &str, max_depth: usize) -> Result<WordIndex, IndexError> {
        let (index, _) = self.build_with_outcome(seed_url, max_depth).await?;
        Ok(index)
    }

    // Same as build, but also hands back the crawl details (pages visited,
    // depths, skipped failures) for reporting
    pub async fn build_with_outcome(
        &self,
        seed_url: &str,
        max_depth: usize,
    ) -> Result<(WordIndex, CrawlOutcome), IndexError> {
        let outcome = self.crawler.crawl(seed_url, max_depth).await?;
        let index = invert(&outcome.pages);
        Ok((index, outcome))
    }
}

// Crawls `seed_url` over HTTP, following only links on the seed's own origin
pub async fn build_index(seed_url: &str, max_depth: usize) -> Result<WordIndex, IndexError> {
    let config = CrawlConfig::for_seed(seed_url)?;
    build_index_with(seed_url, max_depth, config).await
}

// Crawls `seed_url` over HTTP with the given settings
pub async fn build_index_with(
    seed_url: &str,
    max_depth: usize,
    config: CrawlConfig,
) -> Result<WordIndex, IndexError> {
    let fetcher = HttpFetcher::new(&config)?;
    let crawler = Crawler::new(fetcher, HtmlParser::new(), config);
    IndexBuilder::new(crawler).build(seed_url, max_depth).await
}
