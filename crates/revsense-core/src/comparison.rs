//! Head-to-head comparison of two product summaries.

use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentSummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Winner {
    Product1,
    Product2,
    Tie,
}

impl Winner {
    /// One-line verdict shown to the user.
    #[must_use]
    pub fn headline(self) -> &'static str {
        match self {
            Winner::Product1 => "Product 1 has better reviews!",
            Winner::Product2 => "Product 2 has better reviews!",
            Winner::Tie => "Both products have similar reviews!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonResult {
    pub product1: SentimentSummary,
    pub product2: SentimentSummary,
    pub winner: Winner,
}

impl ComparisonResult {
    #[must_use]
    pub fn new(product1: SentimentSummary, product2: SentimentSummary) -> Self {
        let winner = compare(&product1, &product2);
        Self {
            product1,
            product2,
            winner,
        }
    }
}

/// Picks the product with the strictly higher positive percentage.
#[must_use]
pub fn compare(first: &SentimentSummary, second: &SentimentSummary) -> Winner {
    if first.positive_percentage > second.positive_percentage {
        Winner::Product1
    } else if second.positive_percentage > first.positive_percentage {
        Winner::Product2
    } else {
        Winner::Tie
    }
}
