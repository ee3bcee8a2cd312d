//! Image resizing for the stylization pipeline.
//!
//! Two resizes happen here: the style image is always brought to the fixed
//! edge the network was trained against, and the content image may be
//! pre-scaled to a user-chosen long side before transfer. Both run through
//! `fast_image_resize` on interleaved RGB buffers.

use fast_image_resize::images::Image;
use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer};
use image::RgbImage;
use tracing::{info, warn};

use crate::error::{Error, Result};

/// Square edge the style image is resized to before transfer. The network
/// was trained with style inputs at this size and degrades away from it.
pub const STYLE_EDGE: u32 = 259;

/// Compute target dimensions preserving aspect ratio, fitting the long side
/// to `target_size`. Upscaling requests are refused and the original
/// dimensions are kept.
pub fn calculate_resize_dimensions(
    original_cols: usize,
    original_rows: usize,
    target_size: usize,
) -> (usize, usize) {
    let long_side = original_cols.max(original_rows);
    if target_size >= long_side {
        if target_size > long_side {
            warn!(
                "Requested size {} exceeds image long side {}; keeping original dimensions",
                target_size, long_side
            );
        }
        return (original_cols, original_rows);
    }

    let scale = target_size as f64 / long_side as f64;
    let new_cols = ((original_cols as f64 * scale).round() as usize).max(1);
    let new_rows = ((original_rows as f64 * scale).round() as usize).max(1);
    (new_cols, new_rows)
}

fn resize_rgb(
    data: &[u8],
    src_cols: u32,
    src_rows: u32,
    dst_cols: u32,
    dst_rows: u32,
    filter: FilterType,
) -> Result<Vec<u8>> {
    let src = Image::from_vec_u8(src_cols, src_rows, data.to_vec(), PixelType::U8x3)
        .map_err(|e| Error::Resize(e.to_string()))?;
    let mut dst = Image::new(dst_cols, dst_rows, PixelType::U8x3);

    let mut resizer = Resizer::new();
    let options = ResizeOptions::new().resize_alg(ResizeAlg::Convolution(filter));
    resizer
        .resize(&src, &mut dst, &options)
        .map_err(|e| Error::Resize(e.to_string()))?;

    Ok(dst.into_vec())
}

/// Resize the style image to the fixed `STYLE_EDGE` x `STYLE_EDGE` square
/// with bilinear filtering. Aspect ratio is intentionally not preserved.
/// A style image already at the target size is returned as-is.
pub fn resize_style(style: &RgbImage) -> Result<RgbImage> {
    let (cols, rows) = style.dimensions();
    if (cols, rows) == (STYLE_EDGE, STYLE_EDGE) {
        return Ok(style.clone());
    }

    let data = resize_rgb(
        style.as_raw(),
        cols,
        rows,
        STYLE_EDGE,
        STYLE_EDGE,
        FilterType::Bilinear,
    )?;
    RgbImage::from_raw(STYLE_EDGE, STYLE_EDGE, data)
        .ok_or_else(|| Error::Resize("resized style buffer has unexpected length".to_string()))
}

/// Optionally downscale the content image so its long side matches
/// `target_size`, preserving aspect ratio. `None` keeps the original size.
pub fn resize_content(content: &RgbImage, target_size: Option<usize>) -> Result<RgbImage> {
    let Some(size) = target_size else {
        return Ok(content.clone());
    };
    if size == 0 {
        return Err(Error::ZeroSize { size });
    }

    let (cols, rows) = content.dimensions();
    let (new_cols, new_rows) = calculate_resize_dimensions(cols as usize, rows as usize, size);
    if (new_cols, new_rows) == (cols as usize, rows as usize) {
        return Ok(content.clone());
    }

    info!(
        "Resizing content image {}x{} -> {}x{}",
        cols, rows, new_cols, new_rows
    );
    let data = resize_rgb(
        content.as_raw(),
        cols,
        rows,
        new_cols as u32,
        new_rows as u32,
        FilterType::Lanczos3,
    )?;
    RgbImage::from_raw(new_cols as u32, new_rows as u32, data)
        .ok_or_else(|| Error::Resize("resized content buffer has unexpected length".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn dimensions_preserve_aspect_ratio() {
        assert_eq!(calculate_resize_dimensions(4000, 2000, 1000), (1000, 500));
        assert_eq!(calculate_resize_dimensions(2000, 4000, 1000), (500, 1000));
        assert_eq!(calculate_resize_dimensions(3000, 3000, 600), (600, 600));
    }

    #[test]
    fn upscale_requests_keep_original_dimensions() {
        assert_eq!(calculate_resize_dimensions(800, 600, 2048), (800, 600));
        assert_eq!(calculate_resize_dimensions(800, 600, 800), (800, 600));
    }

    #[test]
    fn extreme_aspect_ratio_never_collapses_to_zero() {
        let (cols, rows) = calculate_resize_dimensions(10_000, 10, 100);
        assert_eq!(cols, 100);
        assert!(rows >= 1);
    }

    #[test]
    fn style_is_always_square_at_fixed_edge() {
        for (w, h) in [(100, 100), (1024, 768), (259, 400), (10, 2000)] {
            let img = RgbImage::from_pixel(w, h, Rgb([10, 200, 30]));
            let resized = resize_style(&img).unwrap();
            assert_eq!(resized.dimensions(), (STYLE_EDGE, STYLE_EDGE));
        }
    }

    #[test]
    fn style_at_target_size_is_untouched() {
        let img = RgbImage::from_fn(STYLE_EDGE, STYLE_EDGE, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 7])
        });
        let resized = resize_style(&img).unwrap();
        assert_eq!(resized.as_raw(), img.as_raw());
    }

    #[test]
    fn content_resize_is_optional() {
        let img = RgbImage::from_pixel(640, 480, Rgb([1, 2, 3]));
        let same = resize_content(&img, None).unwrap();
        assert_eq!(same.dimensions(), (640, 480));

        let smaller = resize_content(&img, Some(320)).unwrap();
        assert_eq!(smaller.dimensions(), (320, 240));
    }

    #[test]
    fn content_resize_rejects_zero_size() {
        let img = RgbImage::from_pixel(8, 8, Rgb([0, 0, 0]));
        assert!(matches!(
            resize_content(&img, Some(0)),
            Err(Error::ZeroSize { .. })
        ));
    }
}
