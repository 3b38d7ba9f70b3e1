//! Best-effort review scraping for product pages.
//!
//! Routes a URL to either the Amazon extractor or the generic heuristic
//! extractor, fetches the page once, and pulls out review-like text blocks
//! using ordered selector rules with early stop.

pub mod amazon;
pub mod client;
pub mod dispatch;
pub mod error;
pub mod generic;

mod rules;

pub use amazon::{parse_amazon_reviews, reviews_url_for};
pub use client::ReviewFetcher;
pub use dispatch::{reviews_or_empty, route, SiteKind, DEFAULT_MAX_REVIEWS};
pub use error::ScrapeError;
pub use generic::parse_generic_reviews;
