//! Raster file I/O.
//!
//! File formats are chosen by the `image` crate from the path extension.
//! Every error names the file it concerns, so a failed batch run points
//! straight at the offending input.

use super::image::{array2_to_gray_image, gray_image_to_array2, u8_to_unit};
use image::{DynamicImage, ImageError};
use ndarray::Array2;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImageIoError {
    #[error("image file not found: {}", .path.display())]
    NotFound { path: PathBuf },
    #[error("failed to read image {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
    #[error("failed to write image {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: ImageError,
    },
}

/// Open an image file in whatever pixel layout it was stored with.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, ImageIoError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ImageIoError::NotFound {
            path: path.to_path_buf(),
        });
    }
    image::open(path).map_err(|source| ImageIoError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Load an image as 8-bit luminance scaled into `[0.0, 1.0]`.
///
/// Color and 16-bit images are reduced to 8-bit luminance first.
pub fn load_unit_image<P: AsRef<Path>>(path: P) -> Result<Array2<f64>, ImageIoError> {
    let gray = load_image(path)?.into_luma8();
    Ok(u8_to_unit(&gray_image_to_array2(&gray)))
}

/// Save an 8-bit grayscale array (`(height, width)` layout).
pub fn save_u8_image<P: AsRef<Path>>(image: &Array2<u8>, path: P) -> Result<(), ImageIoError> {
    let path = path.as_ref();
    array2_to_gray_image(image)
        .save(path)
        .map_err(|source| ImageIoError::Write {
            path: path.to_path_buf(),
            source,
        })
}

pub fn save_image<P: AsRef<Path>>(image: &DynamicImage, path: P) -> Result<(), ImageIoError> {
    let path = path.as_ref();
    image.save(path).map_err(|source| ImageIoError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Path of the `index`-th file in a numbered sequence: `<base><index>.<extension>`.
///
/// `base` is a plain prefix, so `out/MBC_` gives `out/MBC_0.png`, `out/MBC_1.png`, ...
pub fn numbered_path(base: &str, index: usize, extension: &str) -> PathBuf {
    PathBuf::from(format!("{base}{index}.{extension}"))
}
