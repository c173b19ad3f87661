//! Two-dimensional discrete Fourier transform helpers.
//!
//! The transform is unnormalized, so the zero-frequency term of an image is
//! the sum of its samples. Shifting follows the usual visualisation
//! convention: after [`shift_quadrants`] the zero frequency sits at
//! `[height / 2, width / 2]`.

use ndarray::{Array2, ArrayView2};
use rustfft::{num_complex::Complex64, FftPlanner};

/// Forward 2D DFT of a real-valued array.
///
/// Computed separably: a 1D FFT along every row, then along every column.
pub fn fourier_transform_2d(image: &ArrayView2<f64>) -> Array2<Complex64> {
    let (height, width) = image.dim();
    let mut spectrum = Array2::from_shape_fn((height, width), |(y, x)| {
        Complex64::new(image[[y, x]], 0.0)
    });

    if height == 0 || width == 0 {
        return spectrum;
    }

    let mut planner = FftPlanner::<f64>::new();

    let row_fft = planner.plan_fft_forward(width);
    let mut buffer = Vec::with_capacity(width.max(height));
    for mut row in spectrum.rows_mut() {
        buffer.clear();
        buffer.extend(row.iter().copied());
        row_fft.process(&mut buffer);
        for (dst, src) in row.iter_mut().zip(&buffer) {
            *dst = *src;
        }
    }

    let column_fft = planner.plan_fft_forward(height);
    for mut column in spectrum.columns_mut() {
        buffer.clear();
        buffer.extend(column.iter().copied());
        column_fft.process(&mut buffer);
        for (dst, src) in column.iter_mut().zip(&buffer) {
            *dst = *src;
        }
    }

    spectrum
}

/// Absolute value of every complex sample
pub fn elementwise_magnitude(spectrum: &Array2<Complex64>) -> Array2<f64> {
    spectrum.mapv(|c| c.norm())
}

/// Clear the zero-frequency (DC) term, which only encodes mean brightness.
pub fn zero_dc(magnitude: &mut Array2<f64>) {
    if let Some(dc) = magnitude.get_mut([0, 0]) {
        *dc = 0.0;
    }
}

/// Swap quadrants so index `[0, 0]` moves to `[height / 2, width / 2]`.
///
/// For odd sizes the extra row/column ends up before the center, matching
/// the common `fftshift` ordering: `[0, 1, 2, 3, 4]` becomes `[3, 4, 0, 1, 2]`.
pub fn shift_quadrants<T: Clone>(array: &ArrayView2<T>) -> Array2<T> {
    let (height, width) = array.dim();
    let (dy, dx) = (height - height / 2, width - width / 2);
    Array2::from_shape_fn((height, width), |(y, x)| {
        array[[(y + dy) % height, (x + dx) % width]].clone()
    })
}

/// Centered magnitude spectrum of an image with the DC term removed.
pub fn magnitude_spectrum(image: &ArrayView2<f64>) -> Array2<f64> {
    let mut magnitude = elementwise_magnitude(&fourier_transform_2d(image));
    zero_dc(&mut magnitude);
    shift_quadrants(&magnitude.view())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use ndarray::array;
    use std::f64::consts::PI;

    #[test]
    fn test_constant_image_energy_is_all_dc() {
        let image = Array2::from_elem((4, 6), 0.5);
        let spectrum = fourier_transform_2d(&image.view());

        assert_eq!(spectrum.dim(), (4, 6));
        assert_relative_eq!(spectrum[[0, 0]].re, 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(spectrum[[0, 0]].im, 0.0, epsilon = 1e-12);

        for ((y, x), value) in spectrum.indexed_iter() {
            if (y, x) != (0, 0) {
                assert_abs_diff_eq!(value.norm(), 0.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_single_impulse_has_flat_magnitude() {
        let mut image = Array2::zeros((5, 4));
        image[[2, 3]] = 1.0;

        let magnitude = elementwise_magnitude(&fourier_transform_2d(&image.view()));
        for value in magnitude.iter() {
            assert_relative_eq!(*value, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_horizontal_cosine_peaks() {
        let (height, width, k) = (4, 8, 2);
        let image = Array2::from_shape_fn((height, width), |(_, x)| {
            (2.0 * PI * (k * x) as f64 / width as f64).cos()
        });

        let magnitude = elementwise_magnitude(&fourier_transform_2d(&image.view()));
        let peak = (height * width) as f64 / 2.0;

        assert_relative_eq!(magnitude[[0, k]], peak, epsilon = 1e-9);
        assert_relative_eq!(magnitude[[0, width - k]], peak, epsilon = 1e-9);
        assert_abs_diff_eq!(magnitude[[1, k]], 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(magnitude[[0, 0]], 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_dc() {
        let mut magnitude = array![[9.0, 1.0], [2.0, 3.0]];
        zero_dc(&mut magnitude);
        assert_eq!(magnitude, array![[0.0, 1.0], [2.0, 3.0]]);

        let mut empty = Array2::<f64>::zeros((0, 0));
        zero_dc(&mut empty);
    }

    #[test]
    fn test_shift_quadrants_odd_length_ordering() {
        let row = array![[0, 1, 2, 3, 4]];
        assert_eq!(shift_quadrants(&row.view()), array![[3, 4, 0, 1, 2]]);
    }

    #[test]
    fn test_shift_quadrants_even_swaps_quadrants() {
        let a = array![[1, 1, 2, 2], [1, 1, 2, 2], [3, 3, 4, 4], [3, 3, 4, 4]];
        let expected = array![[4, 4, 3, 3], [4, 4, 3, 3], [2, 2, 1, 1], [2, 2, 1, 1]];
        assert_eq!(shift_quadrants(&a.view()), expected);
    }

    #[test]
    fn test_shift_moves_origin_to_center() {
        for (h, w) in [(4, 4), (5, 3), (1, 7), (6, 9)] {
            let mut a = Array2::zeros((h, w));
            a[[0, 0]] = 1u8;
            let shifted = shift_quadrants(&a.view());
            assert_eq!(shifted[[h / 2, w / 2]], 1, "size {h}x{w}");
            assert_eq!(shifted.iter().filter(|&&v| v == 1).count(), 1);
        }
    }

    #[test]
    fn test_magnitude_spectrum_of_constant_is_zero() {
        let image = Array2::from_elem((8, 8), 0.75);
        let spectrum = magnitude_spectrum(&image.view());

        assert_eq!(spectrum.dim(), (8, 8));
        for value in spectrum.iter() {
            assert_abs_diff_eq!(*value, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_transform_handles_non_standard_layout() {
        let image = Array2::from_shape_fn((3, 5), |(y, x)| (y * 5 + x) as f64);
        let transposed = image.t().to_owned();
        let transposed_view = image.t();

        let a = fourier_transform_2d(&transposed.view());
        let b = fourier_transform_2d(&transposed_view);
        for (x, y) in a.iter().zip(b.iter()) {
            assert_abs_diff_eq!((x - y).norm(), 0.0, epsilon = 1e-12);
        }
    }
}
