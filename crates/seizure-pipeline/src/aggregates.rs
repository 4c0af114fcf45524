//! Per-Class Feature Aggregates

use serde::{Deserialize, Serialize};
use signal_features::{FeatureVector, FEATURE_DIMENSION};
use svm_classifier::CLASS_NAMES;

/// Mean and standard deviation of every feature within one class,
/// consumed by the external plotting layer for comparison charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassProfile {
    /// Class name ("baseline" or "seizure")
    pub class_name: String,
    /// Number of segments in the class
    pub count: usize,
    /// Per-feature mean, in feature-vector order
    pub feature_means: [f64; FEATURE_DIMENSION],
    /// Per-feature population standard deviation
    pub feature_std_devs: [f64; FEATURE_DIMENSION],
}

/// Aggregate the feature matrix separately per label value, ordered
/// [baseline, seizure].
pub fn class_profiles(features: &[FeatureVector], labels: &[u8]) -> [ClassProfile; 2] {
    [0u8, 1u8].map(|class| {
        let rows: Vec<&FeatureVector> = features
            .iter()
            .zip(labels.iter())
            .filter(|(_, &label)| label == class)
            .map(|(row, _)| row)
            .collect();
        let count = rows.len();
        let n = count.max(1) as f64;

        let mut feature_means = [0.0; FEATURE_DIMENSION];
        for row in &rows {
            for (mean, value) in feature_means.iter_mut().zip(row.values.iter()) {
                *mean += value;
            }
        }
        for mean in &mut feature_means {
            *mean /= n;
        }

        let mut feature_std_devs = [0.0; FEATURE_DIMENSION];
        for row in &rows {
            for (acc, (value, mean)) in feature_std_devs
                .iter_mut()
                .zip(row.values.iter().zip(feature_means.iter()))
            {
                let d = value - mean;
                *acc += d * d;
            }
        }
        for acc in &mut feature_std_devs {
            *acc = (*acc / n).sqrt();
        }

        ClassProfile {
            class_name: CLASS_NAMES[class as usize].to_string(),
            count,
            feature_means,
            feature_std_devs,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_split_by_label() {
        let features = vec![
            FeatureVector {
                values: [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            },
            FeatureVector {
                values: [3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            },
            FeatureVector {
                values: [10.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            },
        ];
        let labels = vec![0, 0, 1];

        let [baseline, seizure] = class_profiles(&features, &labels);

        assert_eq!(baseline.class_name, "baseline");
        assert_eq!(baseline.count, 2);
        assert!((baseline.feature_means[0] - 2.0).abs() < 1e-12);
        assert!((baseline.feature_std_devs[0] - 1.0).abs() < 1e-12);

        assert_eq!(seizure.class_name, "seizure");
        assert_eq!(seizure.count, 1);
        assert!((seizure.feature_means[0] - 10.0).abs() < 1e-12);
        assert_eq!(seizure.feature_std_devs[0], 0.0);
    }
}
