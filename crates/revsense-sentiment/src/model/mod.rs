//! Pretrained sentiment model artifacts.
//!
//! The model is a fitted TF-IDF vectorizer plus a fitted binary classifier,
//! both loaded once from JSON files and shared read-only for the lifetime of
//! the process.

mod logistic;
mod tfidf;

use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::SentimentError;

pub use logistic::LogisticRegression;
pub use tfidf::TfidfVectorizer;

/// Sparse row: `(column, value)` pairs sorted by column.
pub type SparseVector = Vec<(usize, f64)>;

pub const VECTORIZER_FILE: &str = "tfidf.json";
pub const CLASSIFIER_FILE: &str = "clf.json";

/// Maps normalized documents to feature rows.
pub trait TextVectorizer: Send + Sync {
    fn transform(&self, documents: &[String]) -> Vec<SparseVector>;

    /// Width of the rows produced by [`TextVectorizer::transform`].
    fn n_features(&self) -> usize;
}

/// Assigns one raw class per feature row.
pub trait BinaryClassifier: Send + Sync {
    fn predict(&self, rows: &[SparseVector]) -> Vec<i64>;

    /// Number of input features the classifier expects, when known.
    fn n_features(&self) -> Option<usize> {
        None
    }
}

/// Immutable vectorizer + classifier pair.
pub struct SentimentModel {
    vectorizer: Box<dyn TextVectorizer>,
    classifier: Box<dyn BinaryClassifier>,
}

impl SentimentModel {
    /// Pairs a vectorizer with a classifier.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::ModelShape`] if the classifier declares a
    /// feature count different from the vectorizer's.
    pub fn new(
        vectorizer: impl TextVectorizer + 'static,
        classifier: impl BinaryClassifier + 'static,
    ) -> Result<Self, SentimentError> {
        if let Some(expected) = classifier.n_features() {
            if expected != vectorizer.n_features() {
                return Err(SentimentError::ModelShape(format!(
                    "classifier expects {expected} features but vectorizer produces {}",
                    vectorizer.n_features()
                )));
            }
        }
        Ok(Self {
            vectorizer: Box::new(vectorizer),
            classifier: Box::new(classifier),
        })
    }

    /// Loads `tfidf.json` and `clf.json` from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::ModelIo`] or [`SentimentError::ModelJson`]
    /// when a file is missing or malformed, and [`SentimentError::ModelShape`]
    /// when the two artifacts do not fit together.
    pub fn load(dir: &Path) -> Result<Self, SentimentError> {
        let vectorizer: TfidfVectorizer = read_artifact(&dir.join(VECTORIZER_FILE))?;
        vectorizer.validate()?;
        let classifier: LogisticRegression = read_artifact(&dir.join(CLASSIFIER_FILE))?;

        tracing::info!(
            dir = %dir.display(),
            features = vectorizer.n_features(),
            "sentiment model loaded"
        );
        Self::new(vectorizer, classifier)
    }

    /// Raw classes for a batch of normalized documents.
    ///
    /// Never returns more classes than there are documents. Surplus rows or
    /// classes from a misbehaving collaborator are logged and dropped; a short
    /// result leaves the trailing documents unclassified.
    #[must_use]
    pub fn predict(&self, documents: &[String]) -> Vec<i64> {
        let mut rows = self.vectorizer.transform(documents);
        if rows.len() != documents.len() {
            tracing::warn!(
                documents = documents.len(),
                rows = rows.len(),
                "vectorizer row count does not match batch size"
            );
            rows.truncate(documents.len());
        }

        let mut classes = self.classifier.predict(&rows);
        if classes.len() != rows.len() {
            tracing::warn!(
                rows = rows.len(),
                classes = classes.len(),
                "classifier output count does not match row count"
            );
            classes.truncate(rows.len());
        }
        classes
    }
}

impl std::fmt::Debug for SentimentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentModel")
            .field("n_features", &self.vectorizer.n_features())
            .finish_non_exhaustive()
    }
}

fn read_artifact<T: DeserializeOwned>(path: &Path) -> Result<T, SentimentError> {
    let content = std::fs::read_to_string(path).map_err(|e| SentimentError::ModelIo {
        path: path.display().to_string(),
        source: e,
    })?;
    serde_json::from_str(&content).map_err(|e| SentimentError::ModelJson {
        path: path.display().to_string(),
        source: e,
    })
}
