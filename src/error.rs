// src/error.rs
// =============================================================================
// Error types for the library.
//
// Three families:
// - TrieError:  lookups and deletes on keys that are not stored
// - FetchError: the fetcher could not retrieve a page
// - IndexError: building the index failed (bad seed or a failed crawl)
//
// A TrieError never changes the trie. A FetchError during a crawl aborts the
// whole crawl (unless best-effort mode is on), so build_index either returns a
// complete index or exactly one IndexError.
//
// Rust concepts:
// - thiserror: derives std::error::Error and Display from the #[error] strings
// - #[from]: lets `?` convert a FetchError into an IndexError automatically
// =============================================================================

use thiserror::Error;

// Errors from Trie operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrieError {
    /// The key has no stored value (or its path was never created)
    #[error("key not found: {0:?}")]
    KeyNotFound(String),
}

// Errors from fetching a page
//
// The split mirrors how reqwest reports failures, so the message a user sees
// says *why* a page could not be crawled, not just that it failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("too many redirects while fetching {url}")]
    TooManyRedirects { url: String },

    #[error("could not connect to {url}: {reason}")]
    Connect { url: String, reason: String },

    #[error("{url} answered HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("could not create HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// The URL the failed request was for, if there was one
    pub fn url(&self) -> Option<&str> {
        match self {
            FetchError::Timeout { url }
            | FetchError::TooManyRedirects { url }
            | FetchError::Connect { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Request { url, .. } => Some(url),
            FetchError::Client(_) => None,
        }
    }
}

// Errors from building an index
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IndexError {
    #[error("invalid seed URL '{url}': {reason}")]
    InvalidSeed { url: String, reason: String },

    #[error("crawl failed: {0}")]
    Crawl(#[from] FetchError),
}
