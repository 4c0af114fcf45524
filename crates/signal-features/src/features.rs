//! Feature Vector Assembly

use crate::bands::FrequencyBand;
use crate::statistics::SampleStats;
use crate::welch::WelchEstimator;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Number of features per segment: mean, variance, and one band power
/// for each of the five EEG bands
pub const FEATURE_DIMENSION: usize = 7;

/// Feature vector describing one EEG segment.
///
/// Order is fixed and consumed positionally downstream:
/// `[mean, variance, psd_delta, psd_theta, psd_alpha, psd_beta, psd_gamma]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Raw feature values in fixed order
    pub values: [f64; FEATURE_DIMENSION],
}

impl FeatureVector {
    /// Display names for each feature position
    pub const NAMES: [&'static str; FEATURE_DIMENSION] = [
        "mean",
        "variance",
        "psd_delta",
        "psd_theta",
        "psd_alpha",
        "psd_beta",
        "psd_gamma",
    ];

    /// Segment mean
    pub fn mean(&self) -> f64 {
        self.values[0]
    }

    /// Segment population variance
    pub fn variance(&self) -> f64 {
        self.values[1]
    }

    /// Mean band power for one of the five EEG bands
    pub fn band_power(&self, band: FrequencyBand) -> f64 {
        let offset = FrequencyBand::ALL
            .iter()
            .position(|b| *b == band)
            .unwrap_or(0);
        self.values[2 + offset]
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self {
            values: [0.0; FEATURE_DIMENSION],
        }
    }
}

/// Feature extractor that maps raw segments to feature vectors
pub struct FeatureExtractor {
    /// Welch PSD estimator
    welch: WelchEstimator,
    /// Sample rate (Hz)
    sample_rate: f64,
}

impl FeatureExtractor {
    /// Create a new feature extractor for signals sampled at `sample_rate` Hz
    pub fn new(sample_rate: f64) -> Self {
        Self {
            welch: WelchEstimator::new(),
            sample_rate,
        }
    }

    /// Configured sample rate (Hz)
    pub fn sample_rate(&self) -> f64 {
        self.sample_rate
    }

    /// Extract the 7 features from one segment.
    ///
    /// Deterministic and side-effect free. Segments shorter than 2
    /// samples produce zero variance and zero band powers; an empty
    /// segment produces an all-zero vector.
    pub fn extract(&mut self, segment: &[f64]) -> FeatureVector {
        if segment.is_empty() {
            return FeatureVector::default();
        }

        let stats = SampleStats::compute(segment);
        let spectrum = self.welch.estimate(segment, self.sample_rate);

        let mut values = [0.0; FEATURE_DIMENSION];
        values[0] = stats.mean;
        values[1] = stats.variance;
        for (offset, band) in FrequencyBand::ALL.iter().enumerate() {
            values[2 + offset] = spectrum.mean_band_power(*band);
        }

        FeatureVector { values }
    }
}

/// Extract features from every segment in parallel.
///
/// Extraction is independent per segment; results come back in the
/// input order, so row i of the output pairs with segment i.
pub fn extract_batch(segments: &[Vec<f64>], sample_rate: f64) -> Vec<FeatureVector> {
    debug!(
        "Extracting features from {} segments at {} Hz",
        segments.len(),
        sample_rate
    );

    segments
        .par_iter()
        .map_init(
            || FeatureExtractor::new(sample_rate),
            |extractor, segment| extractor.extract(segment),
        )
        .collect()
}
