//! Streaming means that fold samples in one at a time.
//!
//! Each new sample moves the current mean toward itself by `1/n`, where `n`
//! counts the samples seen so far. After `n` samples the result is the
//! arithmetic mean of all of them, without keeping any of them around.

use ndarray::{Array2, ArrayView2, Zip};
use thiserror::Error;

/// A sample whose shape differs from the samples already averaged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("expected a {expected:?} array, got {found:?}")]
pub struct ShapeMismatch {
    pub expected: (usize, usize),
    pub found: (usize, usize),
}

/// Per-element streaming mean of equally shaped 2D arrays.
#[derive(Debug, Clone, Default)]
pub struct StreamingMean {
    mean: Option<Array2<f64>>,
    count: usize,
}

impl StreamingMean {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sample into the mean.
    ///
    /// The first sample fixes the shape; later samples must match it.
    pub fn push(&mut self, sample: ArrayView2<f64>) -> Result<(), ShapeMismatch> {
        match self.mean.as_mut() {
            None => {
                self.mean = Some(sample.to_owned());
            }
            Some(mean) => {
                if mean.dim() != sample.dim() {
                    return Err(ShapeMismatch {
                        expected: mean.dim(),
                        found: sample.dim(),
                    });
                }
                let weight = 1.0 / (self.count + 1) as f64;
                Zip::from(mean)
                    .and(&sample)
                    .for_each(|m, &s| *m += (s - *m) * weight);
            }
        }
        self.count += 1;
        Ok(())
    }

    /// Number of samples folded in so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Shape fixed by the first sample, if any
    pub fn dim(&self) -> Option<(usize, usize)> {
        self.mean.as_ref().map(|m| m.dim())
    }

    pub fn mean(&self) -> Option<&Array2<f64>> {
        self.mean.as_ref()
    }

    pub fn into_mean(self) -> Option<Array2<f64>> {
        self.mean
    }
}

/// Streaming mean and standard deviation of scalar samples.
///
/// Tracks the mean of the values and the mean of their squares, so the
/// variance is `E[x²] - E[x]²`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunningStats {
    mean: f64,
    mean_sq: f64,
    count: usize,
}

impl RunningStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let weight = 1.0 / self.count as f64;
        self.mean += (value - self.mean) * weight;
        self.mean_sq += (value * value - self.mean_sq) * weight;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation. Clamped at zero against rounding.
    pub fn std_dev(&self) -> f64 {
        (self.mean_sq - self.mean * self.mean).max(0.0).sqrt()
    }
}
