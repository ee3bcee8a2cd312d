//! The stylization pipeline: normalize both images to float tensors, run the
//! style transfer model, and convert the result back to 8-bit RGB.
//!
//! The pipeline owns no model weights. It drives any [`StyleTransferModel`]
//! and enforces the one contract the rest of the crate relies on: the output
//! image has the content image's dimensions.

use std::sync::Arc;

use image::RgbImage;
use tracing::{debug, info};

use crate::core::processing::resize::resize_style;
use crate::core::processing::tensor::{image_to_tensor, tensor_to_image};
use crate::error::Result;
use crate::io::writers::jpeg::encode_rgb_jpeg;
use crate::model::{ModelError, StyleTransferModel};

pub struct StylizationPipeline {
    model: Arc<dyn StyleTransferModel>,
}

impl StylizationPipeline {
    pub fn new(model: Arc<dyn StyleTransferModel>) -> Self {
        Self { model }
    }

    /// Blend `style` onto `content`. The result has `content`'s dimensions.
    ///
    /// The style image is resized to the network's fixed style edge first;
    /// the content image is passed through at whatever size it arrives in,
    /// so callers wanting a pre-scale apply it before this call.
    pub fn stylize(&self, content: &RgbImage, style: &RgbImage) -> Result<RgbImage> {
        let (cols, rows) = content.dimensions();
        debug!(
            "Stylizing {}x{} content with {}x{} style via model '{}'",
            cols,
            rows,
            style.width(),
            style.height(),
            self.model.name()
        );

        let content_tensor = image_to_tensor(content);
        let style_tensor = image_to_tensor(&resize_style(style)?);

        let output = self
            .model
            .transfer(content_tensor.view(), style_tensor.view())?;

        let expected = vec![1, rows as usize, cols as usize, 3];
        if output.shape() != expected.as_slice() {
            return Err(ModelError::OutputShape {
                expected,
                got: output.shape().to_vec(),
            }
            .into());
        }

        let stylized = tensor_to_image(&output)?;
        info!(
            "Stylized image ready: {}x{}",
            stylized.width(),
            stylized.height()
        );
        Ok(stylized)
    }

    /// Stylize and encode the result as JPEG in one step.
    pub fn stylize_to_jpeg(&self, content: &RgbImage, style: &RgbImage, quality: u8) -> Result<Vec<u8>> {
        let out = self.stylize(content, style)?;
        encode_rgb_jpeg(
            out.width() as usize,
            out.height() as usize,
            out.as_raw(),
            quality,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::STYLE_EDGE;
    use crate::error::Error;
    use image::Rgb;
    use ndarray::{Array4, ArrayView4};
    use std::sync::Mutex;

    /// Returns the content tensor unchanged and records the style shape.
    struct ShapeProbe {
        style_shapes: Mutex<Vec<Vec<usize>>>,
    }

    impl ShapeProbe {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                style_shapes: Mutex::new(Vec::new()),
            })
        }
    }

    impl StyleTransferModel for ShapeProbe {
        fn name(&self) -> &str {
            "shape-probe"
        }

        fn transfer(
            &self,
            content: ArrayView4<'_, f32>,
            style: ArrayView4<'_, f32>,
        ) -> std::result::Result<Array4<f32>, ModelError> {
            self.style_shapes
                .lock()
                .unwrap()
                .push(style.shape().to_vec());
            Ok(content.to_owned())
        }
    }

    /// Inverts the content channels, ignoring style. Deterministic.
    struct Inverter;

    impl StyleTransferModel for Inverter {
        fn name(&self) -> &str {
            "inverter"
        }

        fn transfer(
            &self,
            content: ArrayView4<'_, f32>,
            _style: ArrayView4<'_, f32>,
        ) -> std::result::Result<Array4<f32>, ModelError> {
            Ok(content.map(|v| 1.0 - v))
        }
    }

    /// Always returns a fixed-size tensor regardless of the content shape.
    struct WrongShape;

    impl StyleTransferModel for WrongShape {
        fn name(&self) -> &str {
            "wrong-shape"
        }

        fn transfer(
            &self,
            _content: ArrayView4<'_, f32>,
            _style: ArrayView4<'_, f32>,
        ) -> std::result::Result<Array4<f32>, ModelError> {
            Ok(Array4::zeros((1, 16, 16, 3)))
        }
    }

    fn gradient(cols: u32, rows: u32) -> RgbImage {
        RgbImage::from_fn(cols, rows, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        })
    }

    #[test]
    fn output_keeps_content_dimensions() {
        let probe = ShapeProbe::new();
        let pipeline = StylizationPipeline::new(probe.clone());

        let out = pipeline
            .stylize(&gradient(100, 100), &gradient(640, 480))
            .unwrap();
        assert_eq!(out.dimensions(), (100, 100));
    }

    #[test]
    fn style_tensor_is_always_fixed_edge() {
        let probe = ShapeProbe::new();
        let pipeline = StylizationPipeline::new(probe.clone());

        for (w, h) in [(64, 64), (1024, 768), (259, 259)] {
            pipeline.stylize(&gradient(32, 32), &gradient(w, h)).unwrap();
        }

        let edge = STYLE_EDGE as usize;
        for shape in probe.style_shapes.lock().unwrap().iter() {
            assert_eq!(shape, &vec![1, edge, edge, 3]);
        }
    }

    #[test]
    fn stylization_is_deterministic() {
        let pipeline = StylizationPipeline::new(Arc::new(Inverter));
        let content = gradient(40, 30);
        let style = gradient(80, 80);

        let a = pipeline.stylize(&content, &style).unwrap();
        let b = pipeline.stylize(&content, &style).unwrap();
        assert_eq!(a.as_raw(), b.as_raw());

        // The inverter actually changed the pixels.
        assert_ne!(a.as_raw(), content.as_raw());
    }

    #[test]
    fn mismatched_model_output_is_an_error() {
        let pipeline = StylizationPipeline::new(Arc::new(WrongShape));
        let err = pipeline
            .stylize(&gradient(50, 50), &gradient(50, 50))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Model(ModelError::OutputShape { .. })
        ));
    }

    #[test]
    fn jpeg_output_decodes_back_to_content_dimensions() {
        let pipeline = StylizationPipeline::new(Arc::new(Inverter));
        let bytes = pipeline
            .stylize_to_jpeg(&gradient(100, 100), &gradient(200, 150), 90)
            .unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (100, 100));
    }
}
