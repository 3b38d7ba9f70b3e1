//! URL-driven request flows: single-product analysis and head-to-head comparison.

use revsense_core::{ComparisonResult, SentimentSummary};
use revsense_scraper::{reviews_or_empty, ReviewFetcher};

use crate::analyzer::SentimentAnalyzer;
use crate::error::SentimentError;

/// Limits applied by the comparison flow.
#[derive(Debug, Clone, Copy)]
pub struct CompareSettings {
    pub max_reviews: usize,
    /// Each side must yield at least this many reviews.
    pub min_reviews: usize,
}

impl Default for CompareSettings {
    fn default() -> Self {
        Self {
            max_reviews: revsense_scraper::DEFAULT_MAX_REVIEWS,
            min_reviews: 3,
        }
    }
}

/// Scrapes one product page and summarizes its reviews.
///
/// Extraction failures are logged and treated as "no reviews", so the result
/// is `None` whenever nothing could be scraped or classified.
pub async fn analyze_url(
    fetcher: &ReviewFetcher,
    analyzer: &SentimentAnalyzer,
    url: &str,
    max_reviews: usize,
) -> Option<SentimentSummary> {
    let reviews = reviews_or_empty(url, fetcher.extract(url, max_reviews).await);
    tracing::info!(url, count = reviews.len(), "reviews collected");
    analyzer.analyze(&reviews)
}

/// Scrapes two product pages and decides which has the better reviews.
///
/// Both pages are fetched concurrently; results stay paired with their URL
/// (`product1` is always `url1`).
///
/// # Errors
///
/// - [`SentimentError::MissingUrl`] if either URL is blank.
/// - [`SentimentError::InsufficientReviews`] if a side yields fewer than
///   `settings.min_reviews` reviews; product 1 is checked first.
/// - [`SentimentError::Unclassified`] if no review on a side gets a label.
pub async fn compare_urls(
    fetcher: &ReviewFetcher,
    analyzer: &SentimentAnalyzer,
    url1: &str,
    url2: &str,
    settings: CompareSettings,
) -> Result<ComparisonResult, SentimentError> {
    let (url1, url2) = (url1.trim(), url2.trim());
    if url1.is_empty() || url2.is_empty() {
        return Err(SentimentError::MissingUrl);
    }

    tracing::info!(url1, url2, "scraping both products");
    let (first, second) = tokio::join!(
        fetcher.extract(url1, settings.max_reviews),
        fetcher.extract(url2, settings.max_reviews),
    );
    let reviews1 = reviews_or_empty(url1, first);
    let reviews2 = reviews_or_empty(url2, second);

    for (product, reviews) in [(1u8, &reviews1), (2u8, &reviews2)] {
        if reviews.len() < settings.min_reviews {
            tracing::warn!(
                product,
                found = reviews.len(),
                minimum = settings.min_reviews,
                "not enough reviews to compare"
            );
            return Err(SentimentError::InsufficientReviews {
                product,
                found: reviews.len(),
                minimum: settings.min_reviews,
            });
        }
    }

    let summary1 = analyzer
        .analyze(&reviews1)
        .ok_or(SentimentError::Unclassified { product: 1 })?;
    let summary2 = analyzer
        .analyze(&reviews2)
        .ok_or(SentimentError::Unclassified { product: 2 })?;

    let result = ComparisonResult::new(summary1, summary2);
    tracing::info!(
        winner = ?result.winner,
        product1_positive = result.product1.positive_percentage,
        product2_positive = result.product2.positive_percentage,
        "comparison complete"
    );
    Ok(result)
}
