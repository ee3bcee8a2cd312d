use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use crate::error::{Error, Result};

/// Encode interleaved RGB data to an in-memory JPEG, e.g. for download
/// buffers.
pub fn encode_rgb_jpeg(cols: usize, rows: usize, rgb_data: &[u8], quality: u8) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, quality);
    encoder
        .encode(rgb_data, cols as u16, rows as u16, ColorType::Rgb)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(buf)
}

/// Encode interleaved RGB data to a JPEG file.
pub fn write_rgb_jpeg(
    output: &Path,
    cols: usize,
    rows: usize,
    rgb_data: &[u8],
    quality: u8,
) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, quality);
    encoder
        .encode(rgb_data, cols as u16, rows as u16, ColorType::Rgb)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoded_jpeg_round_trips_dimensions() {
        let rgb = vec![128u8; 20 * 10 * 3];
        let bytes = encode_rgb_jpeg(20, 10, &rgb, 90).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (20, 10));
    }
}
