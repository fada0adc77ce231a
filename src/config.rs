// src/config.rs
// =============================================================================
// Crawl configuration.
//
// Everything the crawler and the HTTP fetcher need to know besides the seed
// URL and the max depth:
// - which URL prefixes the crawl may follow
// - how many pages may be fetched at once
// - what to do when a page cannot be fetched
// - HTTP client settings (timeout, redirect limit, user agent)
//
// Rust concepts:
// - Builder methods: `with_*` take `self` and return it, so calls chain
// - Default trait: sensible values when the caller does not care
// =============================================================================

use std::time::Duration;

use url::Url;

use crate::error::IndexError;

// What the crawler does when the fetcher fails for a URL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the whole crawl and return the error. No partial result.
    #[default]
    Abort,
    /// Record the error, skip the URL and keep crawling.
    SkipFailed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    /// A discovered link is followed only if it starts with one of these
    pub allowed_domains: Vec<String>,
    /// Upper bound on pages fetched at the same time
    pub concurrency: usize,
    pub failure_policy: FailurePolicy,
    pub request_timeout: Duration,
    pub max_redirects: usize,
    pub user_agent: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            allowed_domains: Vec::new(),
            concurrency: 8,
            failure_policy: FailurePolicy::Abort,
            request_timeout: Duration::from_secs(10),
            max_redirects: 5,
            user_agent: concat!("word-crawler/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl CrawlConfig {
    // Builds a config that only follows links on the seed's own origin
    //
    // Example:
    //   "https://example.com/docs/intro" -> allowed prefix "https://example.com/"
    pub fn for_seed(seed_url: &str) -> Result<Self, IndexError> {
        let prefix = origin_prefix(seed_url)?;
        Ok(Self::default().with_allowed_domains(vec![prefix]))
    }

    pub fn with_allowed_domains(mut self, prefixes: Vec<String>) -> Self {
        self.allowed_domains = prefixes;
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = concurrency.max(1);
        self
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    // Plain string-prefix match against the allowed list
    pub fn is_allowed(&self, url: &str) -> bool {
        self.allowed_domains
            .iter()
            .any(|prefix| url.starts_with(prefix.as_str()))
    }
}

// Returns "scheme://host[:port]/" for a URL, or InvalidSeed if it has no host
fn origin_prefix(seed_url: &str) -> Result<String, IndexError> {
    let invalid = |reason: String| IndexError::InvalidSeed {
        url: seed_url.to_string(),
        reason,
    };

    let url = Url::parse(seed_url).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") || url.host().is_none() {
        return Err(invalid("expected an http(s) URL with a host".to_string()));
    }

    Ok(format!("{}/", url.origin().ascii_serialization()))
}
