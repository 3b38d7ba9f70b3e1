//! Plain-text rendering of analysis results.

use std::fmt::Write;

use revsense_core::{ComparisonResult, OverallSentiment, SentimentSummary};

/// Majority verdict and raw counts for the spreadsheet flow.
///
/// An empty or unclassifiable sheet reads as an even split of zero.
pub(crate) fn render_file_verdict(summary: Option<&SentimentSummary>) -> String {
    let (sentiment, positive, negative) = summary.map_or((OverallSentiment::Neutral, 0, 0), |s| {
        (s.sentiment, s.positive, s.negative)
    });

    let headline = match sentiment {
        OverallSentiment::Positive => "Overall Sentiment: POSITIVE",
        OverallSentiment::Negative => "Overall Sentiment: NEGATIVE",
        OverallSentiment::Neutral => "Both sentiments are equal.",
    };
    format!("{headline}\nPositive: {positive}\nNegative: {negative}\n")
}

pub(crate) fn render_summary(label: &str, summary: &SentimentSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{label}: {}", summary.sentiment);
    let _ = writeln!(
        out,
        "  positive: {} ({:.1}%)",
        summary.positive, summary.positive_percentage
    );
    let _ = writeln!(
        out,
        "  negative: {} ({:.1}%)",
        summary.negative, summary.negative_percentage
    );
    let _ = writeln!(out, "  total:    {}", summary.total);
    out
}

pub(crate) fn render_comparison(url1: &str, url2: &str, result: &ComparisonResult) -> String {
    let mut out = String::new();
    out.push_str(&render_summary(&format!("Product 1 <{url1}>"), &result.product1));
    out.push_str(&render_summary(&format!("Product 2 <{url2}>"), &result.product2));
    out.push_str(result.winner.headline());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_verdict_reports_majority_and_counts() {
        let summary = SentimentSummary::from_counts(7, 3).unwrap();
        assert_eq!(
            render_file_verdict(Some(&summary)),
            "Overall Sentiment: POSITIVE\nPositive: 7\nNegative: 3\n"
        );
    }

    #[test]
    fn file_verdict_for_tie() {
        let summary = SentimentSummary::from_counts(2, 2).unwrap();
        assert!(render_file_verdict(Some(&summary)).starts_with("Both sentiments are equal."));
    }

    #[test]
    fn file_verdict_for_empty_sheet() {
        assert_eq!(
            render_file_verdict(None),
            "Both sentiments are equal.\nPositive: 0\nNegative: 0\n"
        );
    }

    #[test]
    fn summary_shows_one_decimal_percentages() {
        let summary = SentimentSummary::from_counts(1, 2).unwrap();
        let text = render_summary("Product", &summary);
        assert!(text.contains("positive: 1 (33.3%)"), "got: {text}");
        assert!(text.contains("negative: 2 (66.7%)"), "got: {text}");
    }

    #[test]
    fn comparison_ends_with_winner_headline() {
        let result = ComparisonResult::new(
            SentimentSummary::from_counts(1, 1).unwrap(),
            SentimentSummary::from_counts(3, 1).unwrap(),
        );
        let text = render_comparison("https://a.example", "https://b.example", &result);
        assert!(text.contains("Product 1 <https://a.example>: NEUTRAL"), "got: {text}");
        assert!(text.ends_with("Product 2 has better reviews!\n"), "got: {text}");
    }
}
