//! Evaluation Metrics and Report

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Class names in label order
pub const CLASS_NAMES: [&str; 2] = ["baseline", "seizure"];

/// Precision/recall/F1 for one class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    /// TP / (TP + FP); 0 when the class was never predicted
    pub precision: f64,
    /// TP / (TP + FN); 0 when the class has no actual rows
    pub recall: f64,
    /// Harmonic mean of precision and recall; 0 when both are 0
    pub f1_score: f64,
    /// Number of actual test rows of this class
    pub support: usize,
}

/// Evaluation results for one train/test run.
///
/// Immutable once created; serializable as the structured record the
/// downstream reporting layer consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationReport {
    /// Fraction of test rows predicted correctly
    pub accuracy: f64,
    /// Counts indexed [actual][predicted], class order [baseline, seizure]
    pub confusion_matrix: [[usize; 2]; 2],
    /// Per-class metrics keyed by class name
    pub per_class: BTreeMap<String, ClassMetrics>,
    /// Number of training rows
    pub n_train: usize,
    /// Number of test rows
    pub n_test: usize,
    /// Feature vector width
    pub n_features: usize,
    /// Actual test labels, in test-partition order
    pub y_test: Vec<u8>,
    /// Predicted test labels, aligned with `y_test`
    pub y_pred: Vec<u8>,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

impl ClassificationReport {
    /// Build a report from aligned actual/predicted test labels
    pub fn from_predictions(
        actual: &[u8],
        predicted: &[u8],
        n_train: usize,
        n_features: usize,
    ) -> Self {
        debug_assert_eq!(actual.len(), predicted.len());

        let mut confusion_matrix = [[0usize; 2]; 2];
        for (&truth, &guess) in actual.iter().zip(predicted.iter()) {
            confusion_matrix[truth as usize][guess as usize] += 1;
        }

        let n_test = actual.len();
        let correct = confusion_matrix[0][0] + confusion_matrix[1][1];
        let accuracy = ratio(correct, n_test);

        let mut per_class = BTreeMap::new();
        for class in 0..2usize {
            let tp = confusion_matrix[class][class];
            let fp = confusion_matrix[1 - class][class];
            let fn_ = confusion_matrix[class][1 - class];

            let precision = ratio(tp, tp + fp);
            let recall = ratio(tp, tp + fn_);
            let f1_score = if precision + recall > 0.0 {
                2.0 * precision * recall / (precision + recall)
            } else {
                0.0
            };

            per_class.insert(
                CLASS_NAMES[class].to_string(),
                ClassMetrics {
                    precision,
                    recall,
                    f1_score,
                    support: tp + fn_,
                },
            );
        }

        Self {
            accuracy,
            confusion_matrix,
            per_class,
            n_train,
            n_test,
            n_features,
            y_test: actual.to_vec(),
            y_pred: predicted.to_vec(),
        }
    }

    /// Metrics for one class by its 0/1 label
    pub fn class_metrics(&self, label: u8) -> &ClassMetrics {
        &self.per_class[CLASS_NAMES[label as usize]]
    }
}
