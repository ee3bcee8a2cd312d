//! Decoding user-supplied images into 8-bit RGB.
//!
//! Uploads arrive in whatever format and channel layout the user has lying
//! around: grayscale scans, RGBA screenshots, CMYK exports. Everything is
//! converted to 3-channel RGB here so the rest of the pipeline never sees a
//! channel count it cannot feed to the network.

use std::path::Path;

use image::{DynamicImage, RgbImage};
use tracing::debug;

use crate::error::{Error, Result};

/// Decode an in-memory image (an upload) to 8-bit RGB.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    let img = image::load_from_memory(bytes)?;
    to_rgb_checked(img)
}

/// Open and decode an image file to 8-bit RGB.
pub fn open_image(path: &Path) -> Result<RgbImage> {
    debug!("Decoding image {:?}", path);
    let img = image::open(path)?;
    to_rgb_checked(img)
}

fn to_rgb_checked(img: DynamicImage) -> Result<RgbImage> {
    let rgb = img.to_rgb8();
    if rgb.width() == 0 || rgb.height() == 0 {
        return Err(Error::ZeroSize { size: 0 });
    }
    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageFormat, Luma, Rgba, RgbaImage};
    use std::io::Cursor;

    fn encode_png(img: &DynamicImage) -> Vec<u8> {
        let mut buf = Vec::new();
        img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
            .unwrap();
        buf
    }

    #[test]
    fn corrupted_bytes_fail_with_decode_error() {
        let garbage = b"\xff\xd8\xff\xe0not really a jpeg at all";
        assert!(matches!(decode_image(garbage), Err(Error::Decode(_))));
    }

    #[test]
    fn grayscale_input_becomes_three_channel_rgb() {
        let gray = GrayImage::from_pixel(6, 4, Luma([140]));
        let bytes = encode_png(&DynamicImage::ImageLuma8(gray));

        let rgb = decode_image(&bytes).unwrap();
        assert_eq!(rgb.dimensions(), (6, 4));
        assert_eq!(rgb.get_pixel(0, 0).0, [140, 140, 140]);
    }

    #[test]
    fn alpha_channel_is_dropped() {
        let rgba = RgbaImage::from_pixel(3, 3, Rgba([10, 20, 30, 128]));
        let bytes = encode_png(&DynamicImage::ImageRgba8(rgba));

        let rgb = decode_image(&bytes).unwrap();
        assert_eq!(rgb.get_pixel(1, 1).0, [10, 20, 30]);
    }

    #[test]
    fn missing_file_is_an_io_style_error() {
        assert!(open_image(Path::new("/definitely/not/here.jpg")).is_err());
    }
}
