//! Per-Feature Standardization

use serde::{Deserialize, Serialize};
use signal_features::{FeatureVector, FEATURE_DIMENSION};

/// Column-wise standardization transform (subtract mean, divide by
/// standard deviation), fitted on train rows only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandardScaler {
    /// Per-column mean of the fit rows
    means: [f64; FEATURE_DIMENSION],
    /// Per-column scale divisor; 1.0 where the fit column had zero variance
    scales: [f64; FEATURE_DIMENSION],
}

impl StandardScaler {
    /// Fit the transform to a set of rows.
    ///
    /// Uses population standard deviation. A column with zero variance
    /// gets a scale of 1.0 so the transform stays total.
    pub fn fit(rows: &[FeatureVector]) -> Self {
        let n = rows.len().max(1) as f64;

        let mut means = [0.0; FEATURE_DIMENSION];
        for row in rows {
            for (mean, value) in means.iter_mut().zip(row.values.iter()) {
                *mean += value;
            }
        }
        for mean in &mut means {
            *mean /= n;
        }

        let mut scales = [0.0; FEATURE_DIMENSION];
        for row in rows {
            for (scale, (value, mean)) in
                scales.iter_mut().zip(row.values.iter().zip(means.iter()))
            {
                let d = value - mean;
                *scale += d * d;
            }
        }
        for scale in &mut scales {
            let std_dev = (*scale / n).sqrt();
            *scale = if std_dev > 0.0 { std_dev } else { 1.0 };
        }

        Self { means, scales }
    }

    /// Standardize one row
    pub fn transform(&self, row: &FeatureVector) -> [f64; FEATURE_DIMENSION] {
        let mut out = [0.0; FEATURE_DIMENSION];
        for i in 0..FEATURE_DIMENSION {
            out[i] = (row.values[i] - self.means[i]) / self.scales[i];
        }
        out
    }

    /// Standardize a set of rows
    pub fn transform_batch(&self, rows: &[FeatureVector]) -> Vec<[f64; FEATURE_DIMENSION]> {
        rows.iter().map(|row| self.transform(row)).collect()
    }

    /// Fitted per-column means
    pub fn means(&self) -> &[f64; FEATURE_DIMENSION] {
        &self.means
    }

    /// Fitted per-column scale divisors
    pub fn scales(&self) -> &[f64; FEATURE_DIMENSION] {
        &self.scales
    }
}
