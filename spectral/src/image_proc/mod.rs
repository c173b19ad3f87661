//! Image processing primitives for spectrum visualisation.
//!
//! # Module Organization
//!
//! - **fft**: 2D Fourier transform, magnitude, DC removal and quadrant shift
//! - **normalize**: min-max rescaling and 8-bit quantisation
//! - **image**: conversions between `image` buffers and `ndarray` arrays
//! - **io**: loading and saving raster files with path-carrying errors
//!
//! Arrays use matrix indexing `[row, col] = [y, x]` with `(height, width)`
//! dimensions throughout.

pub mod fft;
pub mod image;
pub mod io;
pub mod normalize;

pub use self::image::{array2_to_gray_image, gray_image_to_array2, rasterize_points, u8_to_unit};
pub use fft::{elementwise_magnitude, fourier_transform_2d, magnitude_spectrum, shift_quadrants, zero_dc};
pub use io::{load_image, load_unit_image, numbered_path, save_image, save_u8_image, ImageIoError};
pub use normalize::{min_max_normalize, unit_to_u8};
