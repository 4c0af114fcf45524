//! Recording Batch Input Contract

use crate::PipelineError;

/// Labeled raw segments as delivered by the recording loader: two
/// groups of equal-length amplitude sequences plus one sampling rate.
///
/// The sampling rate always comes from the loader; nothing downstream
/// assumes a fixed rate.
#[derive(Debug, Clone)]
pub struct RecordingBatch {
    /// Baseline (interictal) segments, one row per event
    pub baseline: Vec<Vec<f64>>,
    /// Seizure (ictal) segments, one row per event
    pub seizure: Vec<Vec<f64>>,
    /// Samples per second, shared by every segment
    pub sampling_rate: f64,
}

impl RecordingBatch {
    /// Total number of segments across both groups
    pub fn n_segments(&self) -> usize {
        self.baseline.len() + self.seizure.len()
    }

    /// Check the loader contract: positive sampling rate, both groups
    /// non-empty, and every segment the same non-zero length.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !(self.sampling_rate > 0.0) {
            return Err(PipelineError::NonPositiveSamplingRate(self.sampling_rate));
        }
        if self.seizure.is_empty() {
            return Err(PipelineError::EmptyGroup("seizure"));
        }
        if self.baseline.is_empty() {
            return Err(PipelineError::EmptyGroup("baseline"));
        }

        let expected = self.seizure[0].len();
        if expected == 0 {
            return Err(PipelineError::RaggedSegment {
                group: "seizure",
                index: 0,
                len: 0,
                expected: 1,
            });
        }
        for (group, segments) in [("seizure", &self.seizure), ("baseline", &self.baseline)] {
            for (index, segment) in segments.iter().enumerate() {
                if segment.len() != expected {
                    return Err(PipelineError::RaggedSegment {
                        group,
                        index,
                        len: segment.len(),
                        expected,
                    });
                }
            }
        }
        Ok(())
    }
}
