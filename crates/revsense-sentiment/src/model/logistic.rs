use serde::Deserialize;

use super::{BinaryClassifier, SparseVector};

/// Fitted binary logistic regression.
///
/// Predicts `classes[1]` when `coef · x + intercept > 0`, else `classes[0]`.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegression {
    coef: Vec<f64>,
    intercept: f64,
    #[serde(default = "default_classes")]
    classes: [i64; 2],
}

fn default_classes() -> [i64; 2] {
    [0, 1]
}

impl LogisticRegression {
    #[must_use]
    pub fn new(coef: Vec<f64>, intercept: f64) -> Self {
        Self {
            coef,
            intercept,
            classes: default_classes(),
        }
    }

    /// Signed distance from the decision boundary.
    #[must_use]
    pub fn decision_function(&self, row: &[(usize, f64)]) -> f64 {
        row.iter()
            .map(|(column, value)| self.coef.get(*column).copied().unwrap_or(0.0) * value)
            .sum::<f64>()
            + self.intercept
    }
}

impl BinaryClassifier for LogisticRegression {
    fn predict(&self, rows: &[SparseVector]) -> Vec<i64> {
        rows.iter()
            .map(|row| {
                if self.decision_function(row) > 0.0 {
                    self.classes[1]
                } else {
                    self.classes[0]
                }
            })
            .collect()
    }

    fn n_features(&self) -> Option<usize> {
        Some(self.coef.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_decision_predicts_second_class() {
        let clf = LogisticRegression::new(vec![1.0, -1.0], 0.0);
        assert_eq!(clf.predict(&[vec![(0, 0.8)], vec![(1, 0.8)]]), vec![1, 0]);
    }

    #[test]
    fn empty_row_falls_back_to_intercept() {
        let positive = LogisticRegression::new(vec![1.0], 0.25);
        let negative = LogisticRegression::new(vec![1.0], -0.25);
        assert_eq!(positive.predict(&[vec![]]), vec![1]);
        assert_eq!(negative.predict(&[vec![]]), vec![0]);
    }

    #[test]
    fn zero_decision_is_negative() {
        let clf = LogisticRegression::new(vec![1.0], 0.0);
        assert_eq!(clf.predict(&[vec![]]), vec![0]);
    }

    #[test]
    fn decision_function_sums_weighted_features() {
        let clf = LogisticRegression::new(vec![2.0, 3.0], 1.0);
        let d = clf.decision_function(&[(0, 0.5), (1, 1.0)]);
        assert!((d - 5.0).abs() < 1e-12);
    }

    #[test]
    fn classes_can_be_overridden_by_artifact() {
        let clf: LogisticRegression =
            serde_json::from_str(r#"{"coef": [1.0], "intercept": 0.0, "classes": [-1, 7]}"#)
                .unwrap();
        assert_eq!(clf.predict(&[vec![(0, 1.0)], vec![]]), vec![7, -1]);
    }
}
