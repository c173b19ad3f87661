//! Side-by-side composition of images into a single row.
//!
//! Images are laid out left to right, top aligned, with a fixed gap between
//! neighbours. The canvas is as wide as all images plus the gaps and as tall
//! as the tallest image; everything not covered by an image keeps the
//! background value.

use crate::image_proc::{load_image, save_image, ImageIoError};
use image::{ColorType, DynamicImage, GenericImage, ImageBuffer, Luma, LumaA, Pixel, Rgb, Rgba};
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info};

/// Gap between neighbouring images in the reference layout
pub const DEFAULT_PADDING: u32 = 15;
/// Background value written to every color channel of the canvas.
///
/// Multi-channel canvases get this gray level in each color channel with an
/// opaque alpha, where a packed-integer fill would give `(64, 0, 0)` and a
/// transparent alpha instead.
pub const BACKGROUND_LEVEL: u8 = 64;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error(transparent)]
    Io(#[from] ImageIoError),
    #[error("no images to compose")]
    NoImages,
    #[error("image {index} has color type {found:?}, expected {expected:?} like the first image")]
    ColorTypeMismatch {
        index: usize,
        expected: ColorType,
        found: ColorType,
    },
    #[error("color type {0:?} is not supported for composition")]
    UnsupportedColorType(ColorType),
    #[error("composite width overflows u32")]
    CanvasTooLarge,
    #[error("failed to paste image {index}")]
    Paste {
        index: usize,
        #[source]
        source: image::ImageError,
    },
}

/// Inputs, output and spacing of one row composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowLayout {
    pub input_paths: Vec<PathBuf>,
    pub output_path: PathBuf,
    pub padding: u32,
}

impl Default for RowLayout {
    /// Mitchell's and Euler's averaged spectra side by side.
    fn default() -> Self {
        Self {
            input_paths: vec![PathBuf::from("out/_MBC.png"), PathBuf::from("out/_EBC.png")],
            output_path: PathBuf::from("BC.png"),
            padding: DEFAULT_PADDING,
        }
    }
}

/// Canvas size and horizontal paste offsets for a row of images.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowPlacement {
    pub width: u32,
    pub height: u32,
    pub x_offsets: Vec<u32>,
}

/// Lay out images with the given `(width, height)` dimensions in a row.
///
/// # Examples
/// ```
/// use spectral::plan_row;
///
/// let placement = plan_row(&[(100, 50), (80, 60)], 15).unwrap();
/// assert_eq!((placement.width, placement.height), (195, 60));
/// assert_eq!(placement.x_offsets, vec![0, 115]);
/// ```
pub fn plan_row(dimensions: &[(u32, u32)], padding: u32) -> Result<RowPlacement, ComposeError> {
    if dimensions.is_empty() {
        return Err(ComposeError::NoImages);
    }

    let mut x_offsets = Vec::with_capacity(dimensions.len());
    let mut x = 0u32;
    let mut height = 0u32;
    for (i, &(w, h)) in dimensions.iter().enumerate() {
        x_offsets.push(x);
        x = x.checked_add(w).ok_or(ComposeError::CanvasTooLarge)?;
        if i + 1 < dimensions.len() {
            x = x.checked_add(padding).ok_or(ComposeError::CanvasTooLarge)?;
        }
        height = height.max(h);
    }

    Ok(RowPlacement {
        width: x,
        height,
        x_offsets,
    })
}

/// Compose images into one row on a canvas with the first image's color type.
///
/// Every image must share that color type. Pasting replaces canvas pixels;
/// alpha is copied, not blended.
pub fn compose_row(images: &[DynamicImage], padding: u32) -> Result<DynamicImage, ComposeError> {
    let first = images.first().ok_or(ComposeError::NoImages)?;
    let color = first.color();
    for (index, image) in images.iter().enumerate() {
        if image.color() != color {
            return Err(ComposeError::ColorTypeMismatch {
                index,
                expected: color,
                found: image.color(),
            });
        }
    }

    let dimensions: Vec<(u32, u32)> = images.iter().map(|img| (img.width(), img.height())).collect();
    let placement = plan_row(&dimensions, padding)?;
    debug!(
        "Canvas {}x{} ({:?}), offsets {:?}",
        placement.width, placement.height, color, placement.x_offsets
    );

    let level16 = u16::from(BACKGROUND_LEVEL);
    let composite = match color {
        ColorType::L8 => DynamicImage::ImageLuma8(paste_row(
            images,
            &placement,
            DynamicImage::as_luma8,
            Luma([BACKGROUND_LEVEL]),
        )?),
        ColorType::La8 => DynamicImage::ImageLumaA8(paste_row(
            images,
            &placement,
            DynamicImage::as_luma_alpha8,
            LumaA([BACKGROUND_LEVEL, u8::MAX]),
        )?),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(paste_row(
            images,
            &placement,
            DynamicImage::as_rgb8,
            Rgb([BACKGROUND_LEVEL; 3]),
        )?),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(paste_row(
            images,
            &placement,
            DynamicImage::as_rgba8,
            Rgba([BACKGROUND_LEVEL, BACKGROUND_LEVEL, BACKGROUND_LEVEL, u8::MAX]),
        )?),
        ColorType::L16 => DynamicImage::ImageLuma16(paste_row(
            images,
            &placement,
            DynamicImage::as_luma16,
            Luma([level16]),
        )?),
        ColorType::La16 => DynamicImage::ImageLumaA16(paste_row(
            images,
            &placement,
            DynamicImage::as_luma_alpha16,
            LumaA([level16, u16::MAX]),
        )?),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(paste_row(
            images,
            &placement,
            DynamicImage::as_rgb16,
            Rgb([level16; 3]),
        )?),
        ColorType::Rgba16 => DynamicImage::ImageRgba16(paste_row(
            images,
            &placement,
            DynamicImage::as_rgba16,
            Rgba([level16, level16, level16, u16::MAX]),
        )?),
        other => return Err(ComposeError::UnsupportedColorType(other)),
    };

    Ok(composite)
}

type Buffer<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Paste typed buffers onto a background-filled canvas at the planned offsets.
fn paste_row<P>(
    images: &[DynamicImage],
    placement: &RowPlacement,
    typed: fn(&DynamicImage) -> Option<&Buffer<P>>,
    background: P,
) -> Result<Buffer<P>, ComposeError>
where
    P: Pixel + 'static,
{
    let mut canvas = ImageBuffer::from_pixel(placement.width, placement.height, background);

    for (index, (image, &x)) in images.iter().zip(&placement.x_offsets).enumerate() {
        let found = image.color();
        let buffer = typed(image).ok_or(ComposeError::ColorTypeMismatch {
            index,
            expected: images[0].color(),
            found,
        })?;
        canvas
            .copy_from(buffer, x, 0)
            .map_err(|source| ComposeError::Paste { index, source })?;
    }

    Ok(canvas)
}

/// Load every input of `layout`, compose them and write the result.
pub fn compose_files(layout: &RowLayout) -> Result<DynamicImage, ComposeError> {
    let images = layout
        .input_paths
        .iter()
        .map(|path| -> Result<DynamicImage, ComposeError> {
            let image = load_image(path)?;
            debug!(
                "Loaded {} ({}x{}, {:?})",
                path.display(),
                image.width(),
                image.height(),
                image.color()
            );
            Ok(image)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let composite = compose_row(&images, layout.padding)?;
    save_image(&composite, &layout.output_path)?;
    info!(
        "Composed {} images into {}x{} {}",
        images.len(),
        composite.width(),
        composite.height(),
        layout.output_path.display()
    );

    Ok(composite)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, RgbImage};

    fn gray(width: u32, height: u32, value: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([value])))
    }

    #[test]
    fn test_plan_row_reference_layout() {
        let placement = plan_row(&[(100, 50), (80, 60)], 15).unwrap();
        assert_eq!(
            placement,
            RowPlacement {
                width: 195,
                height: 60,
                x_offsets: vec![0, 115],
            }
        );
    }

    #[test]
    fn test_plan_row_offsets_advance_by_width_and_padding() {
        let dims = [(10, 5), (20, 7), (30, 3), (1, 1)];
        let placement = plan_row(&dims, 4).unwrap();

        assert_eq!(placement.width, 61 + 3 * 4);
        assert_eq!(placement.height, 7);
        for i in 0..dims.len() - 1 {
            assert_eq!(placement.x_offsets[i + 1], placement.x_offsets[i] + dims[i].0 + 4);
        }
    }

    #[test]
    fn test_plan_row_single_image_has_no_padding() {
        let placement = plan_row(&[(32, 16)], 15).unwrap();
        assert_eq!((placement.width, placement.height), (32, 16));
    }

    #[test]
    fn test_plan_row_empty_and_overflow() {
        assert!(matches!(plan_row(&[], 15), Err(ComposeError::NoImages)));
        assert!(matches!(
            plan_row(&[(u32::MAX, 1), (1, 1)], 0),
            Err(ComposeError::CanvasTooLarge)
        ));
    }

    #[test]
    fn test_compose_gray_pastes_and_fills() {
        let images = [gray(100, 50, 200), gray(80, 60, 10)];
        let composite = compose_row(&images, 15).unwrap();
        let out = composite.as_luma8().unwrap();

        assert_eq!(out.dimensions(), (195, 60));
        assert_eq!(out.get_pixel(0, 0)[0], 200);
        assert_eq!(out.get_pixel(99, 49)[0], 200);
        // Below the shorter first image
        assert_eq!(out.get_pixel(50, 55)[0], BACKGROUND_LEVEL);
        // Padding gap
        assert_eq!(out.get_pixel(100, 0)[0], BACKGROUND_LEVEL);
        assert_eq!(out.get_pixel(114, 30)[0], BACKGROUND_LEVEL);
        // Second image starts exactly at w0 + padding
        assert_eq!(out.get_pixel(115, 0)[0], 10);
        assert_eq!(out.get_pixel(194, 59)[0], 10);
    }

    #[test]
    fn test_compose_rgb_background() {
        let red = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 2, Rgb([255, 0, 0])));
        let blue = DynamicImage::ImageRgb8(RgbImage::from_pixel(4, 4, Rgb([0, 0, 255])));

        let composite = compose_row(&[red, blue], 2).unwrap();
        let out = composite.as_rgb8().unwrap();

        assert_eq!(out.dimensions(), (10, 4));
        assert_eq!(out.get_pixel(0, 3), &Rgb([64, 64, 64]));
        assert_eq!(out.get_pixel(5, 0), &Rgb([64, 64, 64]));
        assert_eq!(out.get_pixel(3, 1), &Rgb([255, 0, 0]));
        assert_eq!(out.get_pixel(6, 3), &Rgb([0, 0, 255]));
    }

    #[test]
    fn test_compose_luma_alpha_background_is_opaque() {
        let a = DynamicImage::ImageLumaA8(ImageBuffer::from_pixel(2, 1, LumaA([10, 0])));
        let b = DynamicImage::ImageLumaA8(ImageBuffer::from_pixel(2, 3, LumaA([20, 128])));

        let composite = compose_row(&[a, b], 1).unwrap();
        let out = composite.as_luma_alpha8().unwrap();

        assert_eq!(out.dimensions(), (5, 3));
        assert_eq!(out.get_pixel(0, 2), &LumaA([BACKGROUND_LEVEL, u8::MAX]));
        assert_eq!(out.get_pixel(2, 0), &LumaA([BACKGROUND_LEVEL, u8::MAX]));
        // Pasted pixels keep their own alpha
        assert_eq!(out.get_pixel(0, 0), &LumaA([10, 0]));
        assert_eq!(out.get_pixel(4, 2), &LumaA([20, 128]));
    }

    #[test]
    fn test_compose_rejects_mixed_color_types() {
        let rgb = DynamicImage::ImageRgb8(RgbImage::new(2, 2));
        let err = compose_row(&[gray(2, 2, 0), rgb], 1).unwrap_err();

        match err {
            ComposeError::ColorTypeMismatch {
                index,
                expected,
                found,
            } => {
                assert_eq!(index, 1);
                assert_eq!(expected, ColorType::L8);
                assert_eq!(found, ColorType::Rgb8);
            }
            other => panic!("expected ColorTypeMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_compose_empty() {
        assert!(matches!(compose_row(&[], 15), Err(ComposeError::NoImages)));
    }

    #[test]
    fn test_default_layout() {
        let layout = RowLayout::default();
        assert_eq!(
            layout.input_paths,
            vec![PathBuf::from("out/_MBC.png"), PathBuf::from("out/_EBC.png")]
        );
        assert_eq!(layout.output_path, PathBuf::from("BC.png"));
        assert_eq!(layout.padding, 15);
    }
}
