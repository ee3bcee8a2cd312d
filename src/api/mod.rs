//! High-level API for stylizing images.
//!
//! These entry points tie the lower layers together: decode the two inputs,
//! apply the optional content pre-scale, run the transfer, and encode the
//! result. The CLI and GUI are thin wrappers over this module, and it is
//! the surface embedders should reach for first.

use std::path::Path;
use std::sync::Arc;

use image::RgbImage;
use tracing::info;

use crate::core::params::StylizeParams;
use crate::core::processing::pipeline::StylizationPipeline;
use crate::core::processing::resize::resize_content;
use crate::core::processing::save::save_stylized_image;
use crate::error::Result;
use crate::io::decode::open_image;
use crate::io::writers::jpeg::encode_rgb_jpeg;
use crate::io::writers::png::encode_rgb_png;
use crate::model::StyleTransferModel;
use crate::types::OutputFormat;

/// Default file name offered for downloaded/saved results.
pub const DEFAULT_OUTPUT_NAME: &str = "stylized_image.jpeg";

/// An encoded stylization result, ready to write or serve.
#[derive(Debug, Clone)]
pub struct StylizedImage {
    pub width: usize,
    pub height: usize,
    pub format: OutputFormat,
    /// Encoded bytes in `format`.
    pub data: Vec<u8>,
}

impl StylizedImage {
    /// The file name a download of this result should default to.
    pub fn suggested_file_name(&self) -> String {
        format!("stylized_image.{}", self.format.extension())
    }
}

/// Stylize two already-decoded images. The result keeps the content image's
/// dimensions after the optional `params.size` pre-scale.
pub fn stylize_images(
    content: &RgbImage,
    style: &RgbImage,
    model: Arc<dyn StyleTransferModel>,
    params: &StylizeParams,
) -> Result<RgbImage> {
    let content = resize_content(content, params.size)?;
    StylizationPipeline::new(model).stylize(&content, style)
}

/// Stylize two image files and return the encoded result in memory.
pub fn stylize_to_buffer(
    content_path: &Path,
    style_path: &Path,
    model: Arc<dyn StyleTransferModel>,
    params: &StylizeParams,
) -> Result<StylizedImage> {
    let content = open_image(content_path)?;
    let style = open_image(style_path)?;

    let out = stylize_images(&content, &style, model, params)?;
    let (width, height) = (out.width() as usize, out.height() as usize);
    let data = match params.format {
        OutputFormat::JPEG => encode_rgb_jpeg(width, height, out.as_raw(), params.quality)?,
        OutputFormat::PNG => encode_rgb_png(&out)?,
    };

    Ok(StylizedImage {
        width,
        height,
        format: params.format,
        data,
    })
}

/// Stylize two image files and write the result to `output`.
pub fn stylize_files_to_path(
    content_path: &Path,
    style_path: &Path,
    output: &Path,
    model: Arc<dyn StyleTransferModel>,
    params: &StylizeParams,
) -> Result<()> {
    let content = open_image(content_path)?;
    let style = open_image(style_path)?;

    let out = stylize_images(&content, &style, model, params)?;
    save_stylized_image(&out, output, params.format, params.quality)?;
    info!("Stylized image written to {:?}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelError;
    use image::Rgb;
    use ndarray::{Array4, ArrayView4};
    use tempfile::tempdir;

    struct Passthrough;

    impl StyleTransferModel for Passthrough {
        fn name(&self) -> &str {
            "passthrough"
        }

        fn transfer(
            &self,
            content: ArrayView4<'_, f32>,
            _style: ArrayView4<'_, f32>,
        ) -> std::result::Result<Array4<f32>, ModelError> {
            Ok(content.to_owned())
        }
    }

    #[test]
    fn pre_scale_applies_before_transfer() {
        let content = RgbImage::from_pixel(400, 200, Rgb([9, 9, 9]));
        let style = RgbImage::from_pixel(64, 64, Rgb([1, 1, 1]));
        let params = StylizeParams {
            size: Some(100),
            ..StylizeParams::default()
        };

        let out = stylize_images(&content, &style, Arc::new(Passthrough), &params).unwrap();
        assert_eq!(out.dimensions(), (100, 50));
    }

    #[test]
    fn buffer_result_carries_format_and_dimensions() {
        let dir = tempdir().unwrap();
        let content_path = dir.path().join("content.png");
        let style_path = dir.path().join("style.png");
        RgbImage::from_pixel(30, 20, Rgb([100, 150, 200]))
            .save(&content_path)
            .unwrap();
        RgbImage::from_pixel(50, 50, Rgb([5, 5, 5]))
            .save(&style_path)
            .unwrap();

        let img = stylize_to_buffer(
            &content_path,
            &style_path,
            Arc::new(Passthrough),
            &StylizeParams::default(),
        )
        .unwrap();

        assert_eq!((img.width, img.height), (30, 20));
        assert_eq!(img.format, OutputFormat::JPEG);
        assert_eq!(img.suggested_file_name(), "stylized_image.jpeg");

        let decoded = image::load_from_memory(&img.data).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (30, 20));
    }
}
