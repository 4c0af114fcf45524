//! Classifier Configuration

use serde::{Deserialize, Serialize};

/// Fixed evaluation configuration.
///
/// A single immutable value covers every tunable the evaluation uses,
/// so repeated runs over the same data are reproducible.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Fraction of rows held out for testing, in (0, 1)
    pub test_fraction: f64,
    /// Seed for the stratified split shuffle
    pub seed: u64,
    /// Soft-margin regularization strength
    pub c: f64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            test_fraction: 0.2,
            seed: 42,
            c: 1.0,
        }
    }
}
