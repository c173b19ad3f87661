//! Conversions between `image` crate buffers and `ndarray` arrays.
//!
//! # Coordinate System Conversions
//!
//! - **ndarray**: matrix indexing `[row, col] = [y, x]` with `(height, width)` dimensions
//! - **image crate**: graphics indexing `(x, y)` with `(width, height)` dimensions

use crate::algo::SamplePoint;
use image::{GrayImage, Luma};
use ndarray::Array2;

/// Value of an empty pixel in a rasterized point set
pub const POINT_BACKGROUND: u8 = 255;
/// Value of a pixel holding at least one point
pub const POINT_FOREGROUND: u8 = 0;

/// Convert an 8-bit grayscale image to an `Array2<u8>` of shape `(height, width)`.
pub fn gray_image_to_array2(img: &GrayImage) -> Array2<u8> {
    let (width, height) = img.dimensions();
    Array2::from_shape_fn((height as usize, width as usize), |(y, x)| {
        img.get_pixel(x as u32, y as u32)[0]
    })
}

/// Convert an `Array2<u8>` to a grayscale image for saving.
///
/// Array index `[row, col]` maps to image pixel `(col, row)`.
pub fn array2_to_gray_image(arr: &Array2<u8>) -> GrayImage {
    let (height, width) = arr.dim();
    GrayImage::from_fn(width as u32, height as u32, |x, y| {
        Luma([arr[[y as usize, x as usize]]])
    })
}

/// Scale 8-bit samples into `[0.0, 1.0]`.
pub fn u8_to_unit(arr: &Array2<u8>) -> Array2<f64> {
    arr.mapv(|v| f64::from(v) / 255.0)
}

/// Draw points from the unit square onto a `size × size` image.
///
/// The background is white and every occupied pixel is black. Coordinates
/// are truncated to pixel indices and clamped to the last row/column.
pub fn rasterize_points(points: &[SamplePoint], size: usize) -> Array2<u8> {
    let mut pixels = Array2::from_elem((size, size), POINT_BACKGROUND);
    if size == 0 {
        return pixels;
    }

    let last = size - 1;
    for point in points {
        let px = ((point[0] * size as f32) as usize).min(last);
        let py = ((point[1] * size as f32) as usize).min(last);
        pixels[[py, px]] = POINT_FOREGROUND;
    }

    pixels
}
