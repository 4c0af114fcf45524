//! EEG Segment Classification
//!
//! Splits labeled feature vectors into stratified train/test partitions,
//! fits a standardization transform and a soft-margin RBF SVM on the
//! train partition, and evaluates predictions on the held-out rows.

mod classifier;
mod config;
mod error;
mod metrics;
mod scaler;
mod split;
mod svm;

pub use classifier::{Evaluation, SegmentClassifier};
pub use config::ClassifierConfig;
pub use error::InvalidInputError;
pub use metrics::{ClassMetrics, ClassificationReport, CLASS_NAMES};
pub use scaler::StandardScaler;
pub use split::{stratified_split, TrainTestSplit};
pub use svm::SvmClassifier;
