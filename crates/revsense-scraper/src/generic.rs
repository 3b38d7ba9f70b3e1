//! Heuristic review extraction for arbitrary sites.

use scraper::Html;

use crate::client::{ReviewFetcher, GENERIC_HEADERS};
use crate::error::ScrapeError;
use crate::rules::{char_len, visible_text, AttrMatch, SelectorRule};

const BLOCK_TAGS: &[&str] = &["p", "div", "span"];

/// Kept text must be strictly longer than this.
const MIN_CHARS: usize = 20;
/// Kept text must be strictly shorter than this.
const MAX_CHARS: usize = 500;
/// Stop trying further rules once this many reviews are collected.
const STOP_AT: usize = 10;

const GENERIC_RULES: &[SelectorRule] = &[
    SelectorRule::new(BLOCK_TAGS, "class", AttrMatch::ContainsIgnoreCase("review")),
    SelectorRule::new(BLOCK_TAGS, "class", AttrMatch::ContainsIgnoreCase("comment")),
    SelectorRule::new(BLOCK_TAGS, "class", AttrMatch::ContainsIgnoreCase("feedback")),
    SelectorRule::new(BLOCK_TAGS, "itemprop", AttrMatch::Exact("reviewBody")),
    SelectorRule::new(BLOCK_TAGS, "itemprop", AttrMatch::Exact("description")),
    SelectorRule::new(BLOCK_TAGS, "data-hook", AttrMatch::ContainsIgnoreCase("review")),
];

/// Extracts review-like text blocks from an arbitrary HTML page.
///
/// Each rule contributes up to `max_reviews` matches whose text is between
/// 20 and 500 characters (exclusive) and not already collected. Rules are
/// tried in order until 10 reviews are collected. The result is truncated to
/// `max_reviews`.
#[must_use]
pub fn parse_generic_reviews(html: &str, max_reviews: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut reviews: Vec<String> = Vec::new();

    for rule in GENERIC_RULES {
        let elements = rule.select(&document);
        tracing::debug!(selector = %rule, found = elements.len(), "generic selector evaluated");
        for element in elements.iter().take(max_reviews) {
            let text = visible_text(element);
            let len = char_len(&text);
            if len > MIN_CHARS && len < MAX_CHARS && !reviews.contains(&text) {
                reviews.push(text);
            }
        }
        if reviews.len() >= STOP_AT {
            break;
        }
    }

    reviews.truncate(max_reviews);
    reviews
}

impl ReviewFetcher {
    /// Scrapes review-like text from any page using class/attribute heuristics.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::Http`] / [`ScrapeError::Body`] when the page cannot be fetched.
    /// - [`ScrapeError::NoReviewsFound`] when no rule produced usable text.
    pub async fn extract_generic(
        &self,
        url: &str,
        max_reviews: usize,
    ) -> Result<Vec<String>, ScrapeError> {
        let body = self.fetch_page(url, GENERIC_HEADERS).await?;
        let reviews = parse_generic_reviews(&body, max_reviews);
        tracing::info!(url, count = reviews.len(), "generic reviews scraped");

        if reviews.is_empty() {
            return Err(ScrapeError::NoReviewsFound {
                url: url.to_owned(),
            });
        }
        Ok(reviews)
    }
}
