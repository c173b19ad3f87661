//! Averaged DFT magnitude spectrum of an image sequence.
//!
//! Each input is converted to unit-range grayscale, transformed with a 2D
//! DFT, reduced to its magnitude with the DC term removed, and shifted so the
//! zero frequency is centered. The spectra are combined with a streaming
//! mean, then the mean is min-max normalized and written as an 8-bit
//! grayscale image.
//!
//! For a set of blue-noise point images this yields the expected power
//! spectrum of the point process: a dark disc around the center surrounded by
//! a bright ring.

use crate::algo::{MinMaxError, MinMaxScan, StreamingMean};
use crate::image_proc::{
    load_unit_image, magnitude_spectrum, min_max_normalize, numbered_path, save_u8_image,
    unit_to_u8, ImageIoError,
};
use ndarray::{Array2, ArrayView2};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Extension of the numbered input files
pub const INPUT_EXTENSION: &str = "png";

#[derive(Error, Debug)]
pub enum SpectrumError {
    #[error(transparent)]
    Io(#[from] ImageIoError),
    #[error(
        "{} is {}x{} but earlier inputs are {}x{}",
        .path.display(), .found.1, .found.0, .expected.1, .expected.0
    )]
    ShapeMismatch {
        path: PathBuf,
        expected: (usize, usize),
        found: (usize, usize),
    },
    #[error("no input images to average")]
    NoInputs,
    #[error("averaged spectrum cannot be normalized")]
    Normalize(#[from] MinMaxError),
}

/// Accumulates centered magnitude spectra of equally sized images.
#[derive(Debug, Default)]
pub struct SpectrumAverager {
    mean: StreamingMean,
}

impl SpectrumAverager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of images folded in so far
    pub fn count(&self) -> usize {
        self.mean.count()
    }

    /// Fold in one unit-range image.
    ///
    /// `source` only labels the error if the image's shape differs from the
    /// images already added.
    pub fn add_image(
        &mut self,
        image: &ArrayView2<f64>,
        source: &Path,
    ) -> Result<(), SpectrumError> {
        let spectrum = magnitude_spectrum(image);
        self.mean
            .push(spectrum.view())
            .map_err(|mismatch| SpectrumError::ShapeMismatch {
                path: source.to_path_buf(),
                expected: mismatch.expected,
                found: mismatch.found,
            })
    }

    /// Load an image file and fold it in.
    pub fn add_file(&mut self, path: &Path) -> Result<(), SpectrumError> {
        let image = load_unit_image(path)?;
        let (height, width) = image.dim();
        debug!("Loaded {} ({}x{})", path.display(), width, height);
        self.add_image(&image.view(), path)
    }

    /// Averaged spectrum before normalization
    pub fn mean(&self) -> Option<&Array2<f64>> {
        self.mean.mean()
    }

    /// Averaged spectrum rescaled to `[0.0, 1.0]`.
    ///
    /// A spectrum with no variation (e.g. from uniform images) is returned
    /// as is rather than divided by a zero range.
    pub fn normalized(&self) -> Result<Array2<f64>, SpectrumError> {
        let mean = self.mean.mean().ok_or(SpectrumError::NoInputs)?;
        let (min, max) = MinMaxScan::scan(mean.iter().copied()).min_max()?;
        if min == max {
            warn!("Averaged spectrum is flat ({min}); skipping normalization");
        } else {
            info!("Averaged spectrum range: [{min:.6}, {max:.6}]");
        }
        Ok(min_max_normalize(mean)?)
    }

    /// Normalized spectrum quantised to 8 bits
    pub fn finish(&self) -> Result<Array2<u8>, SpectrumError> {
        Ok(unit_to_u8(&self.normalized()?))
    }
}

/// One averaging run over `<base_name>0.png .. <base_name>{file_count-1}.png`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DftAverageJob {
    pub base_name: String,
    pub file_count: usize,
    pub output: PathBuf,
}

impl DftAverageJob {
    pub fn new(base_name: impl Into<String>, file_count: usize, output: impl Into<PathBuf>) -> Self {
        Self {
            base_name: base_name.into(),
            file_count,
            output: output.into(),
        }
    }

    /// Input files in processing order
    pub fn input_paths(&self) -> impl Iterator<Item = PathBuf> + '_ {
        (0..self.file_count).map(|i| numbered_path(&self.base_name, i, INPUT_EXTENSION))
    }

    /// Average every input and return the 8-bit result without writing it.
    pub fn compute(&self) -> Result<Array2<u8>, SpectrumError> {
        if self.file_count == 0 {
            return Err(SpectrumError::NoInputs);
        }

        let mut averager = SpectrumAverager::new();
        for path in self.input_paths() {
            averager.add_file(&path)?;
        }
        averager.finish()
    }

    /// Average every input and write the result to `output`.
    ///
    /// Nothing is written unless all inputs were read and averaged.
    pub fn run(&self) -> Result<Array2<u8>, SpectrumError> {
        info!(
            "Averaging {} spectra from {}*.{}",
            self.file_count, self.base_name, INPUT_EXTENSION
        );
        let result = self.compute()?;
        save_u8_image(&result, &self.output)?;
        let (height, width) = result.dim();
        info!("Wrote {}x{} spectrum to {}", width, height, self.output.display());
        Ok(result)
    }
}
