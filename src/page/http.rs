// src/page/http.rs
// =============================================================================
// Fetches pages over HTTP.
//
// Key functionality:
// - One reqwest Client per fetcher (connection pooling comes for free)
// - GET the page, treat any non-2xx status as a failure
// - Turn reqwest errors into FetchError variants that say what went wrong
//   (timeout, redirect loop, connection failure, bad status, anything else)
//
// Rust concepts:
// - async/await: network I/O without blocking the thread
// - Result<T, E>: every failure becomes a FetchError the crawler can report
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;

use super::Fetcher;
use crate::config::CrawlConfig;
use crate::error::FetchError;

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    // Builds the HTTP client from the crawl settings
    //
    // Uses the configured timeout, redirect limit and user agent
    pub fn new(config: &CrawlConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| categorize_error(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| categorize_error(url, e))
    }
}

// Categorizes the different error types from reqwest
//
// reqwest errors can happen for many reasons:
// - Network timeout
// - Too many redirects
// - DNS resolution or connection failure
// - An error status surfaced by the client itself
fn categorize_error(url: &str, error: reqwest::Error) -> FetchError {
    let url = url.to_string();

    if error.is_timeout() {
        FetchError::Timeout { url }
    } else if error.is_redirect() {
        FetchError::TooManyRedirects { url }
    } else if error.is_connect() {
        FetchError::Connect {
            url,
            reason: error.to_string(),
        }
    } else if let Some(status) = error.status() {
        FetchError::Status {
            url,
            status: status.as_u16(),
        }
    } else {
        FetchError::Request {
            url,
            reason: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn test_client_builds_from_config() {
        let config = CrawlConfig::default().with_request_timeout(Duration::from_secs(2));
        assert!(HttpFetcher::new(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unsupported_scheme_is_a_request_error() {
        let fetcher = HttpFetcher::new(&CrawlConfig::default()).unwrap();
        let err = fetcher.fetch("ftp://example.com/file").await.unwrap_err();
        assert_eq!(err.url(), Some("ftp://example.com/file"));
        assert!(matches!(err, FetchError::Request { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_host_fails() {
        // Port 9 on localhost is "discard"; nothing listens there in CI
        let config = CrawlConfig::default().with_request_timeout(Duration::from_secs(2));
        let fetcher = HttpFetcher::new(&config).unwrap();
        let err = fetcher.fetch("http://127.0.0.1:9/").await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Connect { .. } | FetchError::Timeout { .. } | FetchError::Request { .. }
        ));
    }
}
