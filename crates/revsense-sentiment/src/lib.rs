//! Review sentiment analysis for revsense.
//!
//! Normalizes raw review text into stemmed tokens, classifies each review
//! with a pretrained TF-IDF + logistic regression model, and reduces the
//! labels into per-product summaries that can be compared head to head.

pub mod analyzer;
pub mod error;
pub mod input;
pub mod model;
pub mod normalize;
pub mod pipeline;

mod stopwords;

pub use analyzer::SentimentAnalyzer;
pub use error::SentimentError;
pub use input::{load_review_titles, read_review_titles, REVIEW_COLUMN};
pub use model::{
    BinaryClassifier, LogisticRegression, SentimentModel, SparseVector, TextVectorizer,
    TfidfVectorizer,
};
pub use normalize::normalize;
pub use pipeline::{analyze_url, compare_urls, CompareSettings};
