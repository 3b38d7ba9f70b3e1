//! Routes a URL to the extractor for its site.

use crate::client::ReviewFetcher;
use crate::error::ScrapeError;

/// Default cap on reviews taken per selector.
pub const DEFAULT_MAX_REVIEWS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiteKind {
    Amazon,
    Generic,
}

/// Chooses the extractor for `url` from its host name.
///
/// Hosts containing `amazon` (any case) go to the Amazon extractor; every
/// other host goes to the generic one.
///
/// # Errors
///
/// Returns [`ScrapeError::InvalidUrl`] if `url` does not parse or has no host.
pub fn route(url: &str) -> Result<SiteKind, ScrapeError> {
    let parsed = reqwest::Url::parse(url.trim()).map_err(|e| ScrapeError::InvalidUrl {
        url: url.to_owned(),
        reason: e.to_string(),
    })?;
    let host = parsed.host_str().ok_or_else(|| ScrapeError::InvalidUrl {
        url: url.to_owned(),
        reason: "URL has no host".to_string(),
    })?;

    if host.to_lowercase().contains("amazon") {
        Ok(SiteKind::Amazon)
    } else {
        Ok(SiteKind::Generic)
    }
}

impl ReviewFetcher {
    /// Scrapes reviews from `url` with the extractor chosen by [`route`].
    ///
    /// There is no fallback between extractors.
    ///
    /// # Errors
    ///
    /// Returns whatever [`ScrapeError`] routing or the chosen extractor produced.
    pub async fn extract(&self, url: &str, max_reviews: usize) -> Result<Vec<String>, ScrapeError> {
        let url = url.trim();
        match route(url)? {
            SiteKind::Amazon => self.extract_amazon(url, max_reviews).await,
            SiteKind::Generic => self.extract_generic(url, max_reviews).await,
        }
    }
}

/// Degrades an extraction result to a plain list, logging the failure reason.
#[must_use]
pub fn reviews_or_empty(url: &str, result: Result<Vec<String>, ScrapeError>) -> Vec<String> {
    match result {
        Ok(reviews) => reviews,
        Err(e) => {
            tracing::warn!(url, error = %e, "review extraction failed");
            Vec::new()
        }
    }
}
