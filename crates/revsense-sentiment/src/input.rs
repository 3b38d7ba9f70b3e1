//! Spreadsheet input: one review per row of a named CSV column.

use std::io::Read;
use std::path::Path;

use crate::error::SentimentError;

/// Column read by default from uploaded review sheets.
pub const REVIEW_COLUMN: &str = "review_title";

/// Reads every value of `column` from the CSV file at `path`.
///
/// # Errors
///
/// Returns [`SentimentError::Csv`] if the file cannot be opened or parsed and
/// [`SentimentError::MissingColumn`] if the header row lacks `column`.
pub fn load_review_titles(path: &Path, column: &str) -> Result<Vec<String>, SentimentError> {
    let file = std::fs::File::open(path).map_err(csv::Error::from)?;
    read_review_titles(file, column)
}

/// Reads every value of `column` from CSV data with a header row.
///
/// Empty cells, and cells missing from rows shorter than the header, are
/// returned as empty strings.
///
/// # Errors
///
/// Same as [`load_review_titles`].
pub fn read_review_titles<R: Read>(reader: R, column: &str) -> Result<Vec<String>, SentimentError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let index = headers
        .iter()
        .position(|h| h.trim() == column)
        .ok_or_else(|| SentimentError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })?;

    let mut titles = Vec::new();
    for record in csv_reader.records() {
        let record = record?;
        titles.push(record.get(index).unwrap_or_default().to_string());
    }

    tracing::debug!(column, rows = titles.len(), "review titles loaded");
    Ok(titles)
}
