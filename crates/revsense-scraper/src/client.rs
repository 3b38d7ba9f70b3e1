//! Single-shot HTML fetcher shared by both extractors.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScrapeError;

pub(crate) const BROWSER_UA: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Header set sent to Amazon review pages.
pub(crate) const AMAZON_HEADERS: &[(&str, &str)] = &[
    ("User-Agent", BROWSER_UA),
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.5"),
    ("Accept-Encoding", "gzip, deflate, br"),
    ("Connection", "keep-alive"),
    ("Upgrade-Insecure-Requests", "1"),
];

/// Header set sent to every other site.
pub(crate) const GENERIC_HEADERS: &[(&str, &str)] = &[
    ("User-Agent", BROWSER_UA),
    (
        "Accept",
        "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8",
    ),
    ("Accept-Language", "en-US,en;q=0.5"),
];

/// HTTP client used to pull review pages.
///
/// Each call issues exactly one GET: no retries, no cookie jar, no
/// authentication. Non-2xx responses are logged and their body is still
/// handed to the extractors, since review markup is often served alongside
/// soft-block status codes.
pub struct ReviewFetcher {
    client: Client,
}

impl ReviewFetcher {
    /// Creates a fetcher whose requests time out after `timeout_secs`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Client`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { client })
    }

    /// Fetches `url` with the given header set and returns the decoded body.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::Http`] on connection failure or timeout.
    /// - [`ScrapeError::Body`] if the body cannot be read or decoded.
    pub(crate) async fn fetch_page(
        &self,
        url: &str,
        headers: &[(&str, &str)],
    ) -> Result<String, ScrapeError> {
        let mut request = self.client.get(url);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request.send().await.map_err(|source| ScrapeError::Http {
            url: url.to_owned(),
            source,
        })?;

        let status = response.status();
        tracing::debug!(url, status = status.as_u16(), "fetched review page");
        if !status.is_success() {
            tracing::warn!(
                url,
                status = status.as_u16(),
                "non-success status; parsing body anyway"
            );
        }

        response.text().await.map_err(|source| ScrapeError::Body {
            url: url.to_owned(),
            source,
        })
    }
}
