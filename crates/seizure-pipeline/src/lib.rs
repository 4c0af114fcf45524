//! EEG Seizure Detection Pipeline
//!
//! Composes feature extraction and classification over a loader-supplied
//! batch of labeled recordings: builds the feature matrix and label
//! vector, runs the stratified SVM evaluation, and reduces per-class
//! feature aggregates for the reporting layer.

mod aggregates;
mod batch;

pub use aggregates::{class_profiles, ClassProfile};
pub use batch::RecordingBatch;

use serde::{Deserialize, Serialize};
use signal_features::{extract_batch, FeatureVector};
use svm_classifier::{
    ClassifierConfig, InvalidInputError, SegmentClassifier, StandardScaler, SvmClassifier,
};
use thiserror::Error;
use tracing::info;

/// Pipeline failures
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A recording group with no segments
    #[error("recording group '{0}' contains no segments")]
    EmptyGroup(&'static str),

    /// A segment whose length breaks the equal-length contract
    #[error("segment {index} in group '{group}' has {len} samples, expected {expected}")]
    RaggedSegment {
        group: &'static str,
        index: usize,
        len: usize,
        expected: usize,
    },

    /// Sampling rate that is zero, negative, or NaN
    #[error("sampling rate must be positive, got {0}")]
    NonPositiveSamplingRate(f64),

    /// Invalid classifier input
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),
}

/// Immutable configuration for one pipeline run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Evaluation settings forwarded to the classifier
    pub classifier: ClassifierConfig,
}

/// Everything one run produces: the derived matrix, the evaluation
/// outcome, and the per-class aggregates for plotting.
#[derive(Debug, Clone)]
pub struct PipelineRun {
    /// Feature matrix, one row per segment
    pub features: Vec<FeatureVector>,
    /// Labels paired 1:1 with `features` rows
    pub labels: Vec<u8>,
    /// Metrics over the held-out test partition
    pub report: svm_classifier::ClassificationReport,
    /// Standardization fitted on the train partition
    pub scaler: StandardScaler,
    /// Trained RBF SVM
    pub model: SvmClassifier,
    /// Per-class feature aggregates, ordered [baseline, seizure]
    pub profiles: [ClassProfile; 2],
}

/// Extract features for every segment of the batch.
///
/// Seizure rows come first with label 1, then baseline rows with
/// label 0; row i of the returned matrix always pairs with label i.
/// Extraction runs in parallel but preserves segment order.
pub fn build_feature_matrix(batch: &RecordingBatch) -> (Vec<FeatureVector>, Vec<u8>) {
    let mut features = extract_batch(&batch.seizure, batch.sampling_rate);
    features.extend(extract_batch(&batch.baseline, batch.sampling_rate));

    let mut labels = vec![1u8; batch.seizure.len()];
    labels.extend(std::iter::repeat(0u8).take(batch.baseline.len()));

    (features, labels)
}

/// Run the full pipeline over one recording batch
pub fn run(batch: &RecordingBatch, config: &PipelineConfig) -> Result<PipelineRun, PipelineError> {
    batch.validate()?;
    info!(
        "Processing {} seizure and {} baseline segments at {} Hz",
        batch.seizure.len(),
        batch.baseline.len(),
        batch.sampling_rate
    );

    let (features, labels) = build_feature_matrix(batch);
    let profiles = class_profiles(&features, &labels);

    let evaluation = SegmentClassifier::new(config.classifier).evaluate(&features, &labels)?;

    Ok(PipelineRun {
        features,
        labels,
        report: evaluation.report,
        scaler: evaluation.scaler,
        model: evaluation.model,
        profiles,
    })
}
