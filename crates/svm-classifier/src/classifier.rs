//! Evaluation Orchestration

use crate::config::ClassifierConfig;
use crate::error::InvalidInputError;
use crate::metrics::ClassificationReport;
use crate::scaler::StandardScaler;
use crate::split::stratified_split;
use crate::svm::SvmClassifier;
use signal_features::{FeatureVector, FEATURE_DIMENSION};
use tracing::{debug, info};

/// Outcome of one evaluation run: the metrics report plus the fitted
/// transform and model, returned so callers can reuse them for later
/// inference.
#[derive(Debug, Clone)]
pub struct Evaluation {
    /// Metrics over the held-out test partition
    pub report: ClassificationReport,
    /// Standardization fitted on the train partition only
    pub scaler: StandardScaler,
    /// Trained RBF SVM
    pub model: SvmClassifier,
}

/// Binary classifier over per-segment feature vectors.
///
/// One `evaluate` call performs the full protocol: stratified split,
/// train-only standardization, SVM fit, held-out prediction, report.
pub struct SegmentClassifier {
    config: ClassifierConfig,
}

impl SegmentClassifier {
    /// Create a classifier with the given configuration
    pub fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Active configuration
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Split, normalize, fit, predict, and report.
    ///
    /// Fails with `InvalidInputError` on mismatched row/label counts, a
    /// class with fewer than 2 members, a non-binary label, or a test
    /// fraction outside (0, 1). Identical inputs and configuration
    /// always produce an identical partition and report.
    pub fn evaluate(
        &self,
        features: &[FeatureVector],
        labels: &[u8],
    ) -> Result<Evaluation, InvalidInputError> {
        if features.len() != labels.len() {
            return Err(InvalidInputError::RowLabelMismatch {
                rows: features.len(),
                labels: labels.len(),
            });
        }

        let split = stratified_split(labels, self.config.test_fraction, self.config.seed)?;
        info!(
            "Evaluating {} segments: {} train / {} test",
            features.len(),
            split.n_train(),
            split.n_test()
        );

        let gather = |indices: &[usize]| -> (Vec<FeatureVector>, Vec<u8>) {
            let rows = indices.iter().map(|&i| features[i]).collect();
            let row_labels = indices.iter().map(|&i| labels[i]).collect();
            (rows, row_labels)
        };
        let (train_rows, train_labels) = gather(&split.train_indices);
        let (test_rows, test_labels) = gather(&split.test_indices);

        let scaler = StandardScaler::fit(&train_rows);
        let train_scaled = scaler.transform_batch(&train_rows);
        let test_scaled = scaler.transform_batch(&test_rows);

        let model = SvmClassifier::fit(&train_scaled, &train_labels, self.config.c);
        debug!(
            "Fitted SVM with {} support vectors, gamma {:.6}",
            model.n_support_vectors(),
            model.gamma()
        );

        let predicted = model.predict_batch(&test_scaled);
        let report = ClassificationReport::from_predictions(
            &test_labels,
            &predicted,
            split.n_train(),
            FEATURE_DIMENSION,
        );
        info!(
            "Test accuracy {:.4} over {} rows",
            report.accuracy, report.n_test
        );

        Ok(Evaluation {
            report,
            scaler,
            model,
        })
    }
}

impl Default for SegmentClassifier {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}
