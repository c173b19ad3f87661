//! Test helpers for the spectral workspace
//!
//! Builds small synthetic images and writes them to disk in the layouts the
//! spectral tools expect, so integration tests can run the tools end to end.

use image::{GrayImage, Luma};
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Error type for fixture writing
#[derive(thiserror::Error, Debug)]
pub enum FixtureError {
    #[error("failed to write fixture {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

/// Every pixel set to `value`
pub fn uniform(height: usize, width: usize, value: u8) -> Array2<u8> {
    Array2::from_elem((height, width), value)
}

/// Horizontal ramp from 0 at the left edge to 255 at the right edge
pub fn horizontal_gradient(height: usize, width: usize) -> Array2<u8> {
    let span = width.saturating_sub(1).max(1) as f64;
    Array2::from_shape_fn((height, width), |(_, x)| {
        (x as f64 / span * 255.0).round() as u8
    })
}

/// Alternating 0/255 squares of `cell` pixels, starting black at the origin
pub fn checkerboard(height: usize, width: usize, cell: usize) -> Array2<u8> {
    let cell = cell.max(1);
    Array2::from_shape_fn((height, width), |(y, x)| {
        if (y / cell + x / cell) % 2 == 0 {
            0
        } else {
            255
        }
    })
}

/// Write one 8-bit grayscale fixture.
pub fn write_gray<P: AsRef<Path>>(pixels: &Array2<u8>, path: P) -> Result<PathBuf, FixtureError> {
    let path = path.as_ref().to_path_buf();
    let (height, width) = pixels.dim();
    let img = GrayImage::from_fn(width as u32, height as u32, |x, y| {
        Luma([pixels[[y as usize, x as usize]]])
    });
    img.save(&path).map_err(|source| FixtureError::Write {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}

/// Write `frames` as `<dir>/<prefix>0.png`, `<dir>/<prefix>1.png`, ...
///
/// # Returns
/// The base name to hand to the spectrum averager (`<dir>/<prefix>`)
pub fn write_numbered_sequence(
    dir: &Path,
    prefix: &str,
    frames: &[Array2<u8>],
) -> Result<String, FixtureError> {
    for (i, frame) in frames.iter().enumerate() {
        write_gray(frame, dir.join(format!("{prefix}{i}.png")))?;
    }
    Ok(dir.join(prefix).to_string_lossy().into_owned())
}

/// Read an image back as an 8-bit `(height, width)` array.
///
/// # Panics
/// If the file cannot be opened; meant for assertions in tests.
pub fn read_gray<P: AsRef<Path>>(path: P) -> Array2<u8> {
    let path = path.as_ref();
    let img = image::open(path)
        .unwrap_or_else(|e| panic!("failed to open {}: {e}", path.display()))
        .into_luma8();
    let (width, height) = img.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        img.get_pixel(x as u32, y as u32)[0]
    })
}
