//! Range normalization and 8-bit quantisation of floating point images.

use crate::algo::{MinMaxError, MinMaxScan};
use ndarray::Array2;

/// Linearly rescale values so the minimum maps to 0.0 and the maximum to 1.0.
///
/// An array whose values are all equal has no range to stretch and is
/// returned unchanged. Fails if the array is empty or holds a NaN.
///
/// # Examples
/// ```
/// use ndarray::array;
/// use spectral::image_proc::min_max_normalize;
///
/// let data = array![[2.0, 4.0], [6.0, 10.0]];
/// let normalized = min_max_normalize(&data).unwrap();
/// assert_eq!(normalized, array![[0.0, 0.25], [0.5, 1.0]]);
/// ```
pub fn min_max_normalize(data: &Array2<f64>) -> Result<Array2<f64>, MinMaxError> {
    let (min, max) = MinMaxScan::scan(data.iter().copied()).min_max()?;

    if min == max {
        return Ok(data.clone());
    }

    let range = max - min;
    Ok(data.mapv(|v| (v - min) / range))
}

/// Quantise unit-range values to 8 bits.
///
/// `output = trunc(v × 255)`, saturating: values above 1.0 clamp to 255,
/// negative values and NaN become 0.
pub fn unit_to_u8(data: &Array2<f64>) -> Array2<u8> {
    data.mapv(|v| (v * 255.0) as u8)
}
