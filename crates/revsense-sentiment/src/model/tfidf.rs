use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use super::{SparseVector, TextVectorizer};
use crate::error::SentimentError;

/// Tokens of two or more word characters.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid token regex"));

/// Fitted TF-IDF vectorizer.
///
/// Rows are raw term counts weighted by `idf` (or `1 + ln(count)` when
/// `sublinear_tf` is set) and scaled to unit L2 norm.
#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default)]
    sublinear_tf: bool,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

impl TfidfVectorizer {
    /// Builds a vectorizer from already-fitted parts.
    ///
    /// # Errors
    ///
    /// Returns [`SentimentError::ModelShape`] if the parts are inconsistent.
    pub fn new(
        vocabulary: HashMap<String, usize>,
        idf: Vec<f64>,
        ngram_range: (usize, usize),
        sublinear_tf: bool,
    ) -> Result<Self, SentimentError> {
        let vectorizer = Self {
            vocabulary,
            idf,
            ngram_range,
            sublinear_tf,
        };
        vectorizer.validate()?;
        Ok(vectorizer)
    }

    pub(crate) fn validate(&self) -> Result<(), SentimentError> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(SentimentError::ModelShape(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }
        if let Some((term, column)) = self
            .vocabulary
            .iter()
            .find(|(_, column)| **column >= self.idf.len())
        {
            return Err(SentimentError::ModelShape(format!(
                "term \"{term}\" maps to column {column} but idf has {} entries",
                self.idf.len()
            )));
        }
        Ok(())
    }

    /// Terms of one document: word tokens followed by their n-grams.
    fn analyze(&self, document: &str) -> Vec<String> {
        let lowered = document.to_lowercase();
        let tokens: Vec<&str> = TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()).collect();
        let (min_n, max_n) = self.ngram_range;

        let mut terms = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            terms.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        terms
    }

    fn transform_one(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.analyze(document) {
            if let Some(&column) = self.vocabulary.get(&term) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut row: SparseVector = counts
            .into_iter()
            .map(|(column, count)| {
                let tf = if self.sublinear_tf {
                    1.0 + count.ln()
                } else {
                    count
                };
                (column, tf * self.idf[column])
            })
            .collect();
        row.sort_unstable_by_key(|(column, _)| *column);

        let norm = row.iter().map(|(_, v)| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, v) in &mut row {
                *v /= norm;
            }
        }
        row
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn transform(&self, documents: &[String]) -> Vec<SparseVector> {
        documents.iter().map(|d| self.transform_one(d)).collect()
    }

    fn n_features(&self) -> usize {
        self.idf.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer(terms: &[&str], idf: Vec<f64>, ngram_range: (usize, usize)) -> TfidfVectorizer {
        let vocabulary = terms
            .iter()
            .enumerate()
            .map(|(i, t)| ((*t).to_string(), i))
            .collect();
        TfidfVectorizer::new(vocabulary, idf, ngram_range, false).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn single_term_row_has_unit_weight() {
        let v = vectorizer(&["great", "bad"], vec![1.5, 2.0], (1, 1));
        let rows = v.transform(&["great".to_string()]);
        assert_eq!(rows[0].len(), 1);
        assert_eq!(rows[0][0].0, 0);
        assert!(approx(rows[0][0].1, 1.0));
    }

    #[test]
    fn rows_are_l2_normalized() {
        let v = vectorizer(&["great", "bad"], vec![1.0, 1.0], (1, 1));
        let row = &v.transform(&["great bad".to_string()])[0];
        let norm: f64 = row.iter().map(|(_, x)| x * x).sum();
        assert!(approx(norm, 1.0));
        assert!(approx(row[0].1, row[1].1));
    }

    #[test]
    fn repeated_terms_and_idf_scale_weights() {
        let v = vectorizer(&["great", "bad"], vec![1.0, 2.0], (1, 1));
        let row = &v.transform(&["great great bad".to_string()])[0];
        // counts (2, 1) weighted by idf (1, 2) -> (2, 2) -> equal after normalization
        assert!(approx(row[0].1, row[1].1));
    }

    #[test]
    fn sublinear_tf_dampens_counts() {
        let vocabulary = [("great".to_string(), 0), ("bad".to_string(), 1)]
            .into_iter()
            .collect();
        let v = TfidfVectorizer::new(vocabulary, vec![1.0, 1.0], (1, 1), true).unwrap();
        let row = &v.transform(&["great great bad".to_string()])[0];
        let ratio = row[0].1 / row[1].1;
        assert!(approx(ratio, 1.0 + 2.0_f64.ln()));
    }

    #[test]
    fn bigrams_are_counted_when_in_range() {
        let v = vectorizer(&["not", "good", "not good"], vec![1.0, 1.0, 1.0], (1, 2));
        let row = &v.transform(&["not good".to_string()])[0];
        let columns: Vec<usize> = row.iter().map(|(c, _)| *c).collect();
        assert_eq!(columns, vec![0, 1, 2]);
    }

    #[test]
    fn single_character_tokens_are_ignored() {
        let v = vectorizer(&["a", "ok"], vec![1.0, 1.0], (1, 1));
        let row = &v.transform(&["a ok".to_string()])[0];
        assert_eq!(row.len(), 1);
        assert_eq!(row[0].0, 1);
    }

    #[test]
    fn punctuation_glued_to_words_is_split_off() {
        let v = vectorizer(&["great"], vec![1.0], (1, 1));
        let row = &v.transform(&["great:)".to_string()])[0];
        assert_eq!(row.len(), 1);
    }

    #[test]
    fn unknown_document_gives_empty_row() {
        let v = vectorizer(&["great"], vec![1.0], (1, 2));
        assert!(v.transform(&["meh".to_string()])[0].is_empty());
        assert!(v.transform(&[String::new()])[0].is_empty());
    }

    #[test]
    fn out_of_range_column_is_rejected() {
        let vocabulary = [("great".to_string(), 3)].into_iter().collect();
        let err = TfidfVectorizer::new(vocabulary, vec![1.0], (1, 1), false).unwrap_err();
        assert!(matches!(err, SentimentError::ModelShape(_)), "got: {err:?}");
    }

    #[test]
    fn zero_ngram_range_is_rejected() {
        let err = TfidfVectorizer::new(HashMap::new(), vec![], (0, 1), false).unwrap_err();
        assert!(matches!(err, SentimentError::ModelShape(_)), "got: {err:?}");
    }
}
