//! Classification Input Errors

use thiserror::Error;

/// Malformed or inconsistent classifier input.
///
/// These abort the evaluation immediately; degenerate numeric cases
/// (empty frequency band, zero train-column variance) are handled with
/// defined fallback values instead and never surface here.
#[derive(Debug, Clone, Error)]
pub enum InvalidInputError {
    /// Feature matrix and label vector disagree on row count
    #[error("feature matrix has {rows} rows but label vector has {labels} entries")]
    RowLabelMismatch { rows: usize, labels: usize },

    /// A label outside the binary {0, 1} alphabet
    #[error("label {label} at row {index} is not a binary class label")]
    UnknownLabel { index: usize, label: u8 },

    /// A class too small to appear in both partitions
    #[error("class {label} has {count} member(s); stratified splitting needs at least 2 per class")]
    ClassTooSmall { label: u8, count: usize },

    /// Test fraction outside the open interval (0, 1)
    #[error("test fraction must lie in (0, 1), got {0}")]
    TestFractionOutOfRange(f64),
}
