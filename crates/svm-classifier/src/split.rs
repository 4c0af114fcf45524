//! Stratified Train/Test Splitting

use crate::error::InvalidInputError;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Disjoint index partition of a labeled row set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainTestSplit {
    /// Row indices assigned to the train partition
    pub train_indices: Vec<usize>,
    /// Row indices assigned to the test partition
    pub test_indices: Vec<usize>,
}

impl TrainTestSplit {
    /// Number of train rows
    pub fn n_train(&self) -> usize {
        self.train_indices.len()
    }

    /// Number of test rows
    pub fn n_test(&self) -> usize {
        self.test_indices.len()
    }
}

/// Partition row indices into train and test sets, preserving the
/// class balance of `labels` in both partitions.
///
/// The shuffle is driven by a seeded RNG, so identical inputs always
/// produce the identical partition in the identical order. Each class
/// contributes `round(test_fraction * n_class)` test rows, clamped so
/// that both partitions keep at least one row of every class.
pub fn stratified_split(
    labels: &[u8],
    test_fraction: f64,
    seed: u64,
) -> Result<TrainTestSplit, InvalidInputError> {
    if !(test_fraction > 0.0 && test_fraction < 1.0) {
        return Err(InvalidInputError::TestFractionOutOfRange(test_fraction));
    }

    let mut class_indices: [Vec<usize>; 2] = [Vec::new(), Vec::new()];
    for (index, &label) in labels.iter().enumerate() {
        if label > 1 {
            return Err(InvalidInputError::UnknownLabel { index, label });
        }
        class_indices[label as usize].push(index);
    }
    for (label, indices) in class_indices.iter().enumerate() {
        if indices.len() < 2 {
            return Err(InvalidInputError::ClassTooSmall {
                label: label as u8,
                count: indices.len(),
            });
        }
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut train_indices = Vec::new();
    let mut test_indices = Vec::new();

    for indices in &mut class_indices {
        indices.shuffle(&mut rng);

        let n = indices.len();
        let n_test = ((test_fraction * n as f64).round() as usize).clamp(1, n - 1);

        test_indices.extend_from_slice(&indices[..n_test]);
        train_indices.extend_from_slice(&indices[n_test..]);
    }

    Ok(TrainTestSplit {
        train_indices,
        test_indices,
    })
}
