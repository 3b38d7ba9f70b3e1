//! Sentiment labels and the per-product summary built from them.

use serde::{Deserialize, Serialize};

/// Binary label produced by the classifier for one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl SentimentLabel {
    /// Maps a raw classifier class to a label: `1` is positive, `0` is negative.
    ///
    /// Any other class is unrecognized and yields `None`.
    #[must_use]
    pub fn from_class(class: i64) -> Option<Self> {
        match class {
            1 => Some(Self::Positive),
            0 => Some(Self::Negative),
            _ => None,
        }
    }
}

/// Majority verdict over a set of labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OverallSentiment {
    Positive,
    Negative,
    Neutral,
}

impl std::fmt::Display for OverallSentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallSentiment::Positive => write!(f, "POSITIVE"),
            OverallSentiment::Negative => write!(f, "NEGATIVE"),
            OverallSentiment::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Aggregate sentiment for one product.
///
/// `positive + negative == total`, and the two percentages sum to exactly
/// `100.0` because the negative share is derived from the rounded positive one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentSummary {
    pub sentiment: OverallSentiment,
    pub positive: usize,
    pub negative: usize,
    pub total: usize,
    pub positive_percentage: f64,
    pub negative_percentage: f64,
}

impl SentimentSummary {
    /// Builds a summary from label counts. Returns `None` when both are zero.
    #[must_use]
    pub fn from_counts(positive: usize, negative: usize) -> Option<Self> {
        let total = positive + negative;
        if total == 0 {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let raw_positive = (positive as f64 / total as f64) * 100.0;
        let positive_percentage = round_one_decimal(raw_positive);
        let negative_percentage = round_one_decimal(100.0 - positive_percentage);

        let sentiment = match positive.cmp(&negative) {
            std::cmp::Ordering::Greater => OverallSentiment::Positive,
            std::cmp::Ordering::Less => OverallSentiment::Negative,
            std::cmp::Ordering::Equal => OverallSentiment::Neutral,
        };

        Some(Self {
            sentiment,
            positive,
            negative,
            total,
            positive_percentage,
            negative_percentage,
        })
    }

    /// Builds a summary from a list of labels. Returns `None` for an empty list.
    #[must_use]
    pub fn from_labels(labels: &[SentimentLabel]) -> Option<Self> {
        let positive = labels
            .iter()
            .filter(|l| **l == SentimentLabel::Positive)
            .count();
        Self::from_counts(positive, labels.len() - positive)
    }
}

/// Rounds half-to-even at one decimal place.
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}
