//! EEG Frequency Band Definitions

use serde::{Deserialize, Serialize};

/// Standard EEG frequency bands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyBand {
    /// Delta band (0.5-4 Hz)
    Delta,
    /// Theta band (4-8 Hz)
    Theta,
    /// Alpha band (8-13 Hz)
    Alpha,
    /// Beta band (13-30 Hz)
    Beta,
    /// Gamma band (30-100 Hz)
    Gamma,
}

impl FrequencyBand {
    /// All bands, in feature-vector order
    pub const ALL: [FrequencyBand; 5] = [
        FrequencyBand::Delta,
        FrequencyBand::Theta,
        FrequencyBand::Alpha,
        FrequencyBand::Beta,
        FrequencyBand::Gamma,
    ];

    /// Band limits in Hz, both ends inclusive
    pub fn range_hz(&self) -> (f64, f64) {
        match self {
            FrequencyBand::Delta => (0.5, 4.0),
            FrequencyBand::Theta => (4.0, 8.0),
            FrequencyBand::Alpha => (8.0, 13.0),
            FrequencyBand::Beta => (13.0, 30.0),
            FrequencyBand::Gamma => (30.0, 100.0),
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            FrequencyBand::Delta => "delta",
            FrequencyBand::Theta => "theta",
            FrequencyBand::Alpha => "alpha",
            FrequencyBand::Beta => "beta",
            FrequencyBand::Gamma => "gamma",
        }
    }

    /// Whether a frequency falls inside this band
    pub fn contains(&self, freq_hz: f64) -> bool {
        let (min_hz, max_hz) = self.range_hz();
        freq_hz >= min_hz && freq_hz <= max_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_edges_are_inclusive() {
        assert!(FrequencyBand::Delta.contains(0.5));
        assert!(FrequencyBand::Delta.contains(4.0));
        assert!(!FrequencyBand::Delta.contains(4.001));
        assert!(FrequencyBand::Gamma.contains(100.0));
        assert!(!FrequencyBand::Gamma.contains(100.1));
    }

    #[test]
    fn test_bands_cover_ascending_ranges() {
        let mut last_min = f64::NEG_INFINITY;
        for band in FrequencyBand::ALL {
            let (min_hz, max_hz) = band.range_hz();
            assert!(min_hz < max_hz);
            assert!(min_hz > last_min);
            last_min = min_hz;
        }
    }
}
