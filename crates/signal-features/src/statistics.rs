//! Time-Domain Statistics

/// Mean and population variance of a sample sequence
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleStats {
    /// Arithmetic mean
    pub mean: f64,
    /// Population variance (divide by N)
    pub variance: f64,
}

impl SampleStats {
    /// Compute statistics from a slice of values
    pub fn compute(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len() as f64;
        let mean = values.iter().sum::<f64>() / n;

        let mut m2 = 0.0;
        for &v in values {
            let d = v - mean;
            m2 += d * d;
        }

        Self {
            mean,
            variance: m2 / n,
        }
    }

    /// Population standard deviation
    pub fn std_dev(&self) -> f64 {
        self.variance.sqrt()
    }
}
