//! Review aggregation: normalize, classify, and summarize.

use std::sync::Arc;

use revsense_core::{SentimentLabel, SentimentSummary};

use crate::model::SentimentModel;
use crate::normalize::normalize;

/// Classifies batches of reviews against a shared, read-only model.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    model: Arc<SentimentModel>,
}

impl SentimentAnalyzer {
    #[must_use]
    pub fn new(model: Arc<SentimentModel>) -> Self {
        Self { model }
    }

    /// One label per review; `None` where the classifier returned a class
    /// other than `0` or `1`.
    #[must_use]
    pub fn classify(&self, reviews: &[String]) -> Vec<Option<SentimentLabel>> {
        let normalized: Vec<String> = reviews.iter().map(|r| normalize(r)).collect();
        self.model
            .predict(&normalized)
            .into_iter()
            .map(SentimentLabel::from_class)
            .collect()
    }

    /// Summarizes the sentiment of `reviews`.
    ///
    /// Returns `None` when `reviews` is empty or no review received a
    /// recognized label.
    #[must_use]
    pub fn analyze(&self, reviews: &[String]) -> Option<SentimentSummary> {
        if reviews.is_empty() {
            return None;
        }

        let labels: Vec<SentimentLabel> = self.classify(reviews).into_iter().flatten().collect();
        let unrecognized = reviews.len().saturating_sub(labels.len());
        if unrecognized > 0 {
            tracing::warn!(
                reviews = reviews.len(),
                unrecognized,
                "classifier returned unrecognized classes"
            );
        }

        let summary = SentimentSummary::from_labels(&labels)?;
        tracing::debug!(
            total = summary.total,
            positive = summary.positive,
            negative = summary.negative,
            "reviews analyzed"
        );
        Some(summary)
    }
}

#[cfg(test)]
mod tests {
    use revsense_core::OverallSentiment;

    use super::*;
    use crate::model::{BinaryClassifier, SparseVector, TextVectorizer};

    /// Emits one column per document: 0 if it contains "good", 1 if "bad", 2 otherwise.
    struct KeywordVectorizer;

    impl TextVectorizer for KeywordVectorizer {
        fn transform(&self, documents: &[String]) -> Vec<SparseVector> {
            documents
                .iter()
                .map(|d| {
                    let column = if d.contains("good") {
                        0
                    } else if d.contains("bad") {
                        1
                    } else {
                        2
                    };
                    vec![(column, 1.0)]
                })
                .collect()
        }

        fn n_features(&self) -> usize {
            3
        }
    }

    /// Maps column 0 to class 1, column 1 to class 0, anything else to class 9.
    struct ColumnClassifier;

    impl BinaryClassifier for ColumnClassifier {
        fn predict(&self, rows: &[SparseVector]) -> Vec<i64> {
            rows.iter()
                .map(|row| match row.first().map(|(c, _)| *c) {
                    Some(0) => 1,
                    Some(1) => 0,
                    _ => 9,
                })
                .collect()
        }
    }

    fn analyzer() -> SentimentAnalyzer {
        let model = SentimentModel::new(KeywordVectorizer, ColumnClassifier).unwrap();
        SentimentAnalyzer::new(Arc::new(model))
    }

    fn reviews(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn empty_input_returns_none() {
        assert!(analyzer().analyze(&[]).is_none());
    }

    #[test]
    fn counts_cover_every_review() {
        let input = reviews(&["Good value", "Bad fit", "Really GOOD", "good again"]);
        let summary = analyzer().analyze(&input).unwrap();
        assert_eq!(summary.positive, 3);
        assert_eq!(summary.negative, 1);
        assert_eq!(summary.positive + summary.negative, summary.total);
        assert_eq!(summary.total, input.len());
        assert_eq!(summary.sentiment, OverallSentiment::Positive);
        assert!((summary.positive_percentage - 75.0).abs() < 1e-9);
    }

    #[test]
    fn reviews_are_normalized_before_classification() {
        let labels = analyzer().classify(&reviews(&["<b>GOOD</b>!!", "so BAD :("]));
        assert_eq!(
            labels,
            vec![Some(SentimentLabel::Positive), Some(SentimentLabel::Negative)]
        );
    }

    #[test]
    fn unrecognized_classes_are_excluded_from_total() {
        let input = reviews(&["good", "bad", "neither"]);
        let summary = analyzer().analyze(&input).unwrap();
        assert_eq!(summary.total, 2);
        assert_eq!(summary.sentiment, OverallSentiment::Neutral);
    }

    /// Returns a positive class for every row plus one extra.
    struct OverReturningClassifier;

    impl BinaryClassifier for OverReturningClassifier {
        fn predict(&self, rows: &[SparseVector]) -> Vec<i64> {
            vec![1; rows.len() + 1]
        }
    }

    #[test]
    fn surplus_classifier_output_never_exceeds_input() {
        let model = SentimentModel::new(KeywordVectorizer, OverReturningClassifier).unwrap();
        let analyzer = SentimentAnalyzer::new(Arc::new(model));
        let summary = analyzer.analyze(&reviews(&["x"])).unwrap();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.positive, 1);
        assert_eq!(summary.positive + summary.negative, summary.total);
    }

    #[test]
    fn all_unrecognized_returns_none() {
        assert!(analyzer().analyze(&reviews(&["meh", "fine"])).is_none());
    }
}
