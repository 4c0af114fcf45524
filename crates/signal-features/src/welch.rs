//! Welch Power Spectral Density Estimation

use crate::bands::FrequencyBand;
use rustfft::{num_complex::Complex, FftPlanner};

/// Maximum FFT window length used by the estimator
const MAX_WINDOW_LEN: usize = 256;

/// One-sided power spectral density estimate
#[derive(Debug, Clone)]
pub struct PowerSpectrum {
    /// Frequency bin centers (Hz), ascending from 0 to Nyquist
    pub freqs: Vec<f64>,
    /// PSD value per bin (power / Hz), non-negative
    pub psd: Vec<f64>,
}

impl PowerSpectrum {
    /// Mean PSD over the bins falling inside a frequency band.
    ///
    /// Returns 0.0 when no bin lies in the band (band above Nyquist or
    /// empty after bin rounding); this is a defined value, not an error.
    pub fn mean_band_power(&self, band: FrequencyBand) -> f64 {
        let mut sum = 0.0;
        let mut count = 0usize;
        for (&freq, &power) in self.freqs.iter().zip(self.psd.iter()) {
            if band.contains(freq) {
                sum += power;
                count += 1;
            }
        }
        if count > 0 {
            sum / count as f64
        } else {
            0.0
        }
    }
}

/// Periodic Hann window of length `n`
fn hann_window(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 0.5 * (1.0 - (2.0 * std::f64::consts::PI * i as f64 / n as f64).cos()))
        .collect()
}

/// Welch averaged-periodogram PSD estimator.
///
/// Splits the signal into half-overlapping Hann-windowed segments of at
/// most 256 samples, removes the mean of each segment, and averages the
/// one-sided density-scaled periodograms.
pub struct WelchEstimator {
    /// FFT planner for efficient computation
    planner: FftPlanner<f64>,
}

impl WelchEstimator {
    /// Create a new estimator
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    /// Estimate the one-sided PSD of `signal` sampled at `sample_rate` Hz.
    ///
    /// Signals shorter than 2 samples yield a degenerate single-bin
    /// spectrum of 0.0 at 0 Hz rather than an error.
    pub fn estimate(&mut self, signal: &[f64], sample_rate: f64) -> PowerSpectrum {
        let n = signal.len();
        if n < 2 {
            return PowerSpectrum {
                freqs: vec![0.0],
                psd: vec![0.0],
            };
        }

        let window_len = n.min(MAX_WINDOW_LEN);
        let overlap = window_len / 2;
        let step = window_len - overlap;
        let window = hann_window(window_len);
        let window_power: f64 = window.iter().map(|w| w * w).sum();
        let scale = 1.0 / (sample_rate * window_power);

        let fft = self.planner.plan_fft_forward(window_len);
        let n_freqs = window_len / 2 + 1;
        let nyquist_bin_even = window_len % 2 == 0;

        let mut accumulated = vec![0.0; n_freqs];
        let mut n_segments = 0usize;
        let mut start = 0;
        while start + window_len <= n {
            let segment = &signal[start..start + window_len];
            let segment_mean = segment.iter().sum::<f64>() / window_len as f64;

            let mut buffer: Vec<Complex<f64>> = segment
                .iter()
                .zip(window.iter())
                .map(|(&s, &w)| Complex::new((s - segment_mean) * w, 0.0))
                .collect();
            fft.process(&mut buffer);

            for (i, value) in buffer[..n_freqs].iter().enumerate() {
                let mut power = value.norm_sqr() * scale;
                // One-sided spectrum: interior bins carry the energy of
                // both positive and negative frequencies.
                let is_nyquist = nyquist_bin_even && i == n_freqs - 1;
                if i != 0 && !is_nyquist {
                    power *= 2.0;
                }
                accumulated[i] += power;
            }

            n_segments += 1;
            start += step;
        }

        for power in &mut accumulated {
            *power /= n_segments as f64;
        }

        let freq_step = sample_rate / window_len as f64;
        let freqs = (0..n_freqs).map(|i| i as f64 * freq_step).collect();

        PowerSpectrum {
            freqs,
            psd: accumulated,
        }
    }
}

impl Default for WelchEstimator {
    fn default() -> Self {
        Self::new()
    }
}
