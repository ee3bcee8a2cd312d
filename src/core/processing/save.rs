//! Writing stylized images to disk in the selected output format.

use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::error::Result;
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::png::write_rgb_png;
use crate::types::OutputFormat;

pub fn save_stylized_image(
    img: &RgbImage,
    output: &Path,
    format: OutputFormat,
    quality: u8,
) -> Result<()> {
    debug!(
        "Saving {}x{} stylized image to {:?} as {}",
        img.width(),
        img.height(),
        output,
        format
    );
    match format {
        OutputFormat::JPEG => write_rgb_jpeg(
            output,
            img.width() as usize,
            img.height() as usize,
            img.as_raw(),
            quality,
        ),
        OutputFormat::PNG => write_rgb_png(output, img),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;
    use tempfile::tempdir;

    #[test]
    fn saves_both_formats() {
        let dir = tempdir().unwrap();
        let img = RgbImage::from_pixel(12, 9, Rgb([200, 40, 90]));

        let jpeg = dir.path().join("out.jpeg");
        save_stylized_image(&img, &jpeg, OutputFormat::JPEG, 90).unwrap();
        let decoded = image::open(&jpeg).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (12, 9));

        let png = dir.path().join("out.png");
        save_stylized_image(&img, &png, OutputFormat::PNG, 90).unwrap();
        let decoded = image::open(&png).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (12, 9));
        // PNG is lossless.
        assert_eq!(decoded.as_raw(), img.as_raw());
    }
}
