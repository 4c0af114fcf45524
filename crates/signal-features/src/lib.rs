//! EEG Feature Extraction
//!
//! Converts fixed-length EEG segments into 7-dimensional feature vectors
//! (mean, variance, and mean power spectral density in the five standard
//! EEG frequency bands).

mod bands;
mod features;
mod statistics;
mod welch;

pub use bands::FrequencyBand;
pub use features::{extract_batch, FeatureExtractor, FeatureVector, FEATURE_DIMENSION};
pub use statistics::SampleStats;
pub use welch::{PowerSpectrum, WelchEstimator};
