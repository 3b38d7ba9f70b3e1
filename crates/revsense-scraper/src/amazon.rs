//! Amazon review extraction.
//!
//! Product pages are rewritten to the canonical `product-reviews/{ASIN}` page
//! before fetching. Review bodies are taken from the first body selector that
//! yields anything; review titles are appended afterwards from their own
//! selector list.

use std::sync::LazyLock;

use regex::Regex;
use scraper::Html;

use crate::client::{ReviewFetcher, AMAZON_HEADERS};
use crate::error::ScrapeError;
use crate::rules::{char_len, visible_text, AttrMatch, SelectorRule};

/// Bodies must be strictly longer than this many characters.
const MIN_BODY_CHARS: usize = 15;
/// Titles must be strictly longer than this many characters.
const MIN_TITLE_CHARS: usize = 5;
/// Title collection stops once the combined list reaches this size.
const TITLE_STOP_AT: usize = 10;
const READ_MORE: &str = "Read more";

const BODY_RULES: &[SelectorRule] = &[
    SelectorRule::new(&["span"], "data-hook", AttrMatch::Exact("review-body")),
    SelectorRule::new(&["div"], "data-hook", AttrMatch::Exact("review-body")),
    SelectorRule::new(&["div"], "class", AttrMatch::HasClass("review-text-content")),
    SelectorRule::new(
        &["div"],
        "class",
        AttrMatch::Exact("a-expander-content reviewText review-text-content"),
    ),
    SelectorRule::new(&["span"], "class", AttrMatch::HasClass("review-text-content")),
];

const TITLE_RULES: &[SelectorRule] = &[
    SelectorRule::new(&["a"], "data-hook", AttrMatch::Exact("review-title")),
    SelectorRule::new(&["span"], "data-hook", AttrMatch::Exact("review-title")),
    SelectorRule::new(&["div"], "data-hook", AttrMatch::Exact("review-title")),
];

static ASIN_DP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/dp/([A-Z0-9]{10})").expect("valid ASIN regex"));
static ASIN_PRODUCT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/product/([A-Z0-9]{10})").expect("valid ASIN regex"));
static STAR_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d+\.\d+\s+out of \d+ stars\s*").expect("valid star prefix regex")
});

/// Canonical review-page URL for an Amazon product URL.
///
/// Looks for a 10-character ASIN after `/dp/`, then after `/product/`.
/// The domain is `amazon.com` when the input URL mentions it and
/// `amazon.in` otherwise. Returns `None` when no ASIN is present.
#[must_use]
pub fn reviews_url_for(url: &str) -> Option<String> {
    let asin = ASIN_DP_RE
        .captures(url)
        .or_else(|| ASIN_PRODUCT_RE.captures(url))
        .and_then(|cap| cap.get(1))?
        .as_str();
    let domain = if url.contains("amazon.com") {
        "amazon.com"
    } else {
        "amazon.in"
    };
    Some(format!("https://www.{domain}/product-reviews/{asin}"))
}

/// Extracts review bodies followed by review titles from an Amazon page.
///
/// Bodies come from the first body rule that produces at least one kept
/// review. Titles are then tried rule by rule, skipping duplicates, until the
/// combined list holds 10 entries or the rules run out.
#[must_use]
pub fn parse_amazon_reviews(html: &str, max_reviews: usize) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut reviews: Vec<String> = Vec::new();

    for rule in BODY_RULES {
        let elements = rule.select(&document);
        if elements.is_empty() {
            continue;
        }
        tracing::debug!(selector = %rule, found = elements.len(), "amazon body selector matched");
        for element in elements.iter().take(max_reviews) {
            let text = visible_text(element).replace(READ_MORE, "");
            let text = text.trim();
            if char_len(text) > MIN_BODY_CHARS {
                reviews.push(text.to_owned());
            }
        }
        if !reviews.is_empty() {
            break;
        }
    }

    for rule in TITLE_RULES {
        let elements = rule.select(&document);
        if elements.is_empty() {
            continue;
        }
        tracing::debug!(selector = %rule, found = elements.len(), "amazon title selector matched");
        for element in elements.iter().take(max_reviews) {
            let raw = visible_text(element);
            let title = STAR_PREFIX_RE.replace(&raw, "");
            let duplicate = reviews.iter().any(|r| r.as_str() == title.as_ref());
            if char_len(&title) > MIN_TITLE_CHARS && !duplicate {
                reviews.push(title.into_owned());
            }
        }
        if reviews.len() >= TITLE_STOP_AT {
            break;
        }
    }

    reviews
}

impl ReviewFetcher {
    /// Scrapes review text from an Amazon product or review page.
    ///
    /// # Errors
    ///
    /// - [`ScrapeError::Http`] / [`ScrapeError::Body`] when the page cannot be fetched.
    /// - [`ScrapeError::NoReviewsFound`] when no selector produced usable text.
    pub async fn extract_amazon(
        &self,
        url: &str,
        max_reviews: usize,
    ) -> Result<Vec<String>, ScrapeError> {
        let target = match reviews_url_for(url) {
            Some(reviews_url) => {
                tracing::info!(url, reviews_url = %reviews_url, "rewrote Amazon URL to reviews page");
                reviews_url
            }
            None => url.to_owned(),
        };

        let body = self.fetch_page(&target, AMAZON_HEADERS).await?;
        let reviews = parse_amazon_reviews(&body, max_reviews);
        tracing::info!(url = %target, count = reviews.len(), "amazon reviews scraped");

        if reviews.is_empty() {
            return Err(ScrapeError::NoReviewsFound { url: target });
        }
        Ok(reviews)
    }
}

#[cfg(test)]
#[path = "amazon_test.rs"]
mod tests;
