// src/page/mod.rs
// =============================================================================
// The crawler's view of the outside world.
//
// The crawler never talks to the network or parses HTML itself. It asks two
// collaborators:
// - a Fetcher, which turns a URL into raw page content (and may fail)
// - a PageParser, which pulls outbound links and visible text out of that content
//
// Submodules:
// - http: Fetcher backed by reqwest
// - html: PageParser backed by scraper
//
// Tests swap in their own Fetcher that serves pages from memory.
//
// Rust concepts:
// - Traits: describe what a collaborator can do, not how
// - async-trait: lets a trait method be `async fn`
// - Send + Sync: the crawler may poll several fetches at once
// =============================================================================

mod html;
mod http;
#[cfg(test)]
pub(crate) mod memory;

use async_trait::async_trait;

use crate::error::FetchError;

pub use html::HtmlParser;
pub use http::HttpFetcher;

// Retrieves the raw content of a page
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

// Extracts what the crawler needs from raw page content
pub trait PageParser: Send + Sync {
    /// Absolute URLs of every outbound link, in document order
    fn extract_links(&self, raw: &str, base_url: &str) -> Vec<String>;

    /// The human-visible text of the page
    fn extract_text(&self, raw: &str) -> String;
}

// A shared reference to a fetcher is a fetcher too, so one client can serve
// several crawlers
#[async_trait]
impl<T: Fetcher + ?Sized> Fetcher for &T {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch(url).await
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why traits instead of calling reqwest directly?
//    - The crawl logic (dedup, depth, order) is the interesting part
//    - With a trait, tests can feed it fake pages without a network
//
// 2. What does #[async_trait] do?
//    - It rewrites `async fn` in the trait into a method returning a boxed
//      future, which works on every Rust version and with trait objects
// -----------------------------------------------------------------------------
