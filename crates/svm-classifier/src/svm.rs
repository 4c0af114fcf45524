//! Soft-Margin RBF Support Vector Machine

use signal_features::FEATURE_DIMENSION;
use tracing::debug;

/// KKT violation tolerance for the optimizer
const TOLERANCE: f64 = 1e-3;
/// Minimum meaningful multiplier change
const ALPHA_EPSILON: f64 = 1e-8;
/// Consecutive full passes without progress before stopping
const MAX_STALLED_PASSES: usize = 3;
/// Hard cap on optimization epochs
const MAX_EPOCHS: usize = 200;

/// Binary SVM with a Gaussian (RBF) kernel, trained by sequential
/// minimal optimization.
///
/// Labels are mapped to ±1 internally; `predict` returns the 0/1 class
/// by thresholding the decision function at zero. Training is fully
/// deterministic: candidate pairs are scanned in index order and the
/// partner multiplier is chosen by a deterministic argmax.
#[derive(Debug, Clone)]
pub struct SvmClassifier {
    support_vectors: Vec<[f64; FEATURE_DIMENSION]>,
    /// Multiplier times signed label, per support vector
    weights: Vec<f64>,
    bias: f64,
    gamma: f64,
}

fn squared_distance(a: &[f64; FEATURE_DIMENSION], b: &[f64; FEATURE_DIMENSION]) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

fn rbf_kernel(gamma: f64, a: &[f64; FEATURE_DIMENSION], b: &[f64; FEATURE_DIMENSION]) -> f64 {
    (-gamma * squared_distance(a, b)).exp()
}

/// Data-driven kernel bandwidth: 1 / (n_features * var(X)) over every
/// entry of the training matrix, falling back to 1.0 when the matrix
/// has zero variance.
fn gamma_scale(rows: &[[f64; FEATURE_DIMENSION]]) -> f64 {
    let count = (rows.len() * FEATURE_DIMENSION) as f64;
    let mean: f64 = rows.iter().flatten().sum::<f64>() / count;
    let variance: f64 = rows
        .iter()
        .flatten()
        .map(|v| (v - mean) * (v - mean))
        .sum::<f64>()
        / count;

    if variance > 0.0 {
        1.0 / (FEATURE_DIMENSION as f64 * variance)
    } else {
        1.0
    }
}

impl SvmClassifier {
    /// Train on labeled rows with regularization strength `c`.
    ///
    /// Callers guarantee validated input: at least one row per class and
    /// labels restricted to {0, 1}.
    pub fn fit(rows: &[[f64; FEATURE_DIMENSION]], labels: &[u8], c: f64) -> Self {
        let n = rows.len();
        let y: Vec<f64> = labels
            .iter()
            .map(|&label| if label == 1 { 1.0 } else { -1.0 })
            .collect();
        let gamma = gamma_scale(rows);

        // Precomputed kernel matrix; train sets are small batches
        let kernel: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| rbf_kernel(gamma, &rows[i], &rows[j])).collect())
            .collect();

        let mut alpha = vec![0.0f64; n];
        let mut bias = 0.0f64;

        let decision = |alpha: &[f64], bias: f64, i: usize| -> f64 {
            let mut sum = bias;
            for j in 0..n {
                if alpha[j] > 0.0 {
                    sum += alpha[j] * y[j] * kernel[i][j];
                }
            }
            sum
        };

        let mut stalled = 0usize;
        let mut epochs = 0usize;
        while stalled < MAX_STALLED_PASSES && epochs < MAX_EPOCHS {
            epochs += 1;
            let mut changed = 0usize;

            for i in 0..n {
                let error_i = decision(&alpha, bias, i) - y[i];
                let violates = (y[i] * error_i < -TOLERANCE && alpha[i] < c)
                    || (y[i] * error_i > TOLERANCE && alpha[i] > 0.0);
                if !violates {
                    continue;
                }

                // Second-choice heuristic: the partner with the largest
                // error gap, resolved deterministically by index order.
                let mut j = usize::MAX;
                let mut best_gap = -1.0;
                let mut error_j = 0.0;
                for candidate in 0..n {
                    if candidate == i {
                        continue;
                    }
                    let error = decision(&alpha, bias, candidate) - y[candidate];
                    let gap = (error_i - error).abs();
                    if gap > best_gap {
                        best_gap = gap;
                        j = candidate;
                        error_j = error;
                    }
                }
                if j == usize::MAX {
                    continue;
                }

                let (alpha_i_old, alpha_j_old) = (alpha[i], alpha[j]);
                let (low, high) = if (y[i] - y[j]).abs() > f64::EPSILON {
                    let diff = alpha_j_old - alpha_i_old;
                    (diff.max(0.0), (c + diff).min(c))
                } else {
                    let total = alpha_i_old + alpha_j_old;
                    ((total - c).max(0.0), total.min(c))
                };
                if high - low < ALPHA_EPSILON {
                    continue;
                }

                let eta = 2.0 * kernel[i][j] - kernel[i][i] - kernel[j][j];
                if eta >= 0.0 {
                    continue;
                }

                let mut alpha_j_new = alpha_j_old - y[j] * (error_i - error_j) / eta;
                alpha_j_new = alpha_j_new.clamp(low, high);
                if (alpha_j_new - alpha_j_old).abs() < ALPHA_EPSILON {
                    continue;
                }
                let alpha_i_new = alpha_i_old + y[i] * y[j] * (alpha_j_old - alpha_j_new);

                let bias_i = bias
                    - error_i
                    - y[i] * (alpha_i_new - alpha_i_old) * kernel[i][i]
                    - y[j] * (alpha_j_new - alpha_j_old) * kernel[i][j];
                let bias_j = bias
                    - error_j
                    - y[i] * (alpha_i_new - alpha_i_old) * kernel[i][j]
                    - y[j] * (alpha_j_new - alpha_j_old) * kernel[j][j];
                bias = if alpha_i_new > 0.0 && alpha_i_new < c {
                    bias_i
                } else if alpha_j_new > 0.0 && alpha_j_new < c {
                    bias_j
                } else {
                    (bias_i + bias_j) / 2.0
                };

                alpha[i] = alpha_i_new;
                alpha[j] = alpha_j_new;
                changed += 1;
            }

            if changed == 0 {
                stalled += 1;
            } else {
                stalled = 0;
            }
        }

        let mut support_vectors = Vec::new();
        let mut weights = Vec::new();
        for i in 0..n {
            if alpha[i] > ALPHA_EPSILON {
                support_vectors.push(rows[i]);
                weights.push(alpha[i] * y[i]);
            }
        }

        debug!(
            "SMO converged after {} epochs: {} support vectors of {} rows",
            epochs,
            support_vectors.len(),
            n
        );

        Self {
            support_vectors,
            weights,
            bias,
            gamma,
        }
    }

    /// Signed distance-like score; positive means seizure
    pub fn decision_function(&self, row: &[f64; FEATURE_DIMENSION]) -> f64 {
        let mut sum = self.bias;
        for (vector, weight) in self.support_vectors.iter().zip(self.weights.iter()) {
            sum += weight * rbf_kernel(self.gamma, vector, row);
        }
        sum
    }

    /// Predict the 0/1 class label for one row
    pub fn predict(&self, row: &[f64; FEATURE_DIMENSION]) -> u8 {
        if self.decision_function(row) > 0.0 {
            1
        } else {
            0
        }
    }

    /// Predict labels for a set of rows
    pub fn predict_batch(&self, rows: &[[f64; FEATURE_DIMENSION]]) -> Vec<u8> {
        rows.iter().map(|row| self.predict(row)).collect()
    }

    /// Number of retained support vectors
    pub fn n_support_vectors(&self) -> usize {
        self.support_vectors.len()
    }

    /// Fitted kernel bandwidth
    pub fn gamma(&self) -> f64 {
        self.gamma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two well-separated clusters along every feature axis
    fn clustered_rows() -> (Vec<[f64; FEATURE_DIMENSION]>, Vec<u8>) {
        let mut rows = Vec::new();
        let mut labels = Vec::new();
        for k in 0..10 {
            let jitter = (k as f64) * 0.01;
            rows.push([-1.0 - jitter; FEATURE_DIMENSION]);
            labels.push(0);
            rows.push([1.0 + jitter; FEATURE_DIMENSION]);
            labels.push(1);
        }
        (rows, labels)
    }

    #[test]
    fn test_separable_clusters_are_learned() {
        let (rows, labels) = clustered_rows();
        let model = SvmClassifier::fit(&rows, &labels, 1.0);

        for (row, &label) in rows.iter().zip(labels.iter()) {
            assert_eq!(model.predict(row), label);
        }
        assert_eq!(model.predict(&[-0.9; FEATURE_DIMENSION]), 0);
        assert_eq!(model.predict(&[0.9; FEATURE_DIMENSION]), 1);
    }

    #[test]
    fn test_fit_is_deterministic() {
        let (rows, labels) = clustered_rows();
        let a = SvmClassifier::fit(&rows, &labels, 1.0);
        let b = SvmClassifier::fit(&rows, &labels, 1.0);

        assert_eq!(a.n_support_vectors(), b.n_support_vectors());
        assert_eq!(a.bias, b.bias);
        for row in &rows {
            assert_eq!(a.decision_function(row), b.decision_function(row));
        }
    }

    #[test]
    fn test_gamma_scale_matches_definition() {
        let rows = vec![[0.0; FEATURE_DIMENSION], [2.0; FEATURE_DIMENSION]];
        // Entries are half 0.0 and half 2.0: mean 1, variance 1
        assert!((gamma_scale(&rows) - 1.0 / FEATURE_DIMENSION as f64).abs() < 1e-12);
    }

    #[test]
    fn test_gamma_scale_zero_variance_fallback() {
        let rows = vec![[3.0; FEATURE_DIMENSION]; 4];
        assert_eq!(gamma_scale(&rows), 1.0);
    }

    #[test]
    fn test_support_vectors_bounded_by_rows() {
        let (rows, labels) = clustered_rows();
        let model = SvmClassifier::fit(&rows, &labels, 1.0);
        assert!(model.n_support_vectors() >= 2);
        assert!(model.n_support_vectors() <= rows.len());
    }
}
