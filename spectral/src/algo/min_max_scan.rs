//! MinMaxScan - minimum and maximum of floating point data in a single pass.
//!
//! Used to find the range of an accumulated spectrum before it is rescaled.
//! NaN values are skipped while scanning but remembered, so a spectrum that
//! picked up a NaN is reported instead of being silently normalized.

use num_traits::float::Float;
use std::fmt;
use thiserror::Error;

/// Error types for MinMaxScan operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MinMaxError {
    #[error("NaN value encountered at index {0}")]
    NaNEncountered(usize),
    #[error("No data provided (empty input)")]
    NoData,
}

/// Running minimum and maximum of a sequence of floats
#[derive(Debug, Clone)]
pub struct MinMaxScan<T: Float> {
    range: Option<(T, T)>,
    nan_index: Option<usize>,
}

impl<T: Float + fmt::Debug> MinMaxScan<T> {
    /// Scan a slice of values.
    ///
    /// # Example
    /// ```
    /// use spectral::algo::MinMaxScan;
    ///
    /// let scan = MinMaxScan::<f64>::new(&[1.0, 5.0, 3.0, 2.0]);
    /// assert_eq!(scan.min_max().unwrap(), (1.0, 5.0));
    /// ```
    pub fn new(data: &[T]) -> Self {
        Self::scan(data.iter().copied())
    }

    /// Scan any iterator of values, e.g. `array.iter().copied()` for an
    /// ndarray that is not in standard layout.
    pub fn scan<I: IntoIterator<Item = T>>(values: I) -> Self {
        let mut range: Option<(T, T)> = None;
        let mut nan_index = None;

        for (index, value) in values.into_iter().enumerate() {
            if value.is_nan() {
                nan_index.get_or_insert(index);
                continue;
            }

            range = Some(match range {
                None => (value, value),
                Some((min, max)) => (min.min(value), max.max(value)),
            });
        }

        Self { range, nan_index }
    }

    /// Smallest non-NaN value, or an error if the input held a NaN or nothing
    pub fn min(&self) -> Result<T, MinMaxError> {
        self.min_max().map(|(min, _)| min)
    }

    /// Largest non-NaN value, or an error if the input held a NaN or nothing
    pub fn max(&self) -> Result<T, MinMaxError> {
        self.min_max().map(|(_, max)| max)
    }

    /// Both bounds as `(min, max)`
    pub fn min_max(&self) -> Result<(T, T), MinMaxError> {
        if let Some(index) = self.nan_index {
            return Err(MinMaxError::NaNEncountered(index));
        }
        self.range.ok_or(MinMaxError::NoData)
    }

    /// True when every scanned value was identical (and there was at least one)
    pub fn is_flat(&self) -> bool {
        matches!(self.min_max(), Ok((min, max)) if min == max)
    }

    pub fn has_nan(&self) -> bool {
        self.nan_index.is_some()
    }
}
