use std::io::Cursor;
use std::path::Path;

use image::{ImageFormat, RgbImage};

use crate::error::{Error, Result};

/// Encode an RGB image to an in-memory PNG.
pub fn encode_rgb_png(img: &RgbImage) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(buf)
}

/// Write an RGB image to a PNG file.
pub fn write_rgb_png(output: &Path, img: &RgbImage) -> Result<()> {
    img.save_with_format(output, ImageFormat::Png)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(())
}
