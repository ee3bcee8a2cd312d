//! End-to-end tests of the stylization flow with a stub model standing in
//! for the pre-trained network.

use std::path::Path;
use std::sync::Arc;

use image::{Rgb, RgbImage};
use ndarray::{Array4, ArrayView4};
use tempfile::tempdir;

use stylize::{
    ModelError, OutputFormat, StyleTransferModel, StylizationPipeline, StylizeParams,
    stylize_files_to_path, stylize_to_buffer,
};

/// Averages the content tensor with the style tensor's mean color, so the
/// output depends on both inputs but stays deterministic.
struct Blend;

impl StyleTransferModel for Blend {
    fn name(&self) -> &str {
        "blend"
    }

    fn transfer(
        &self,
        content: ArrayView4<'_, f32>,
        style: ArrayView4<'_, f32>,
    ) -> Result<Array4<f32>, ModelError> {
        let style_mean = style.mean().unwrap_or(0.5);
        Ok(content.map(|v| (v + style_mean) / 2.0))
    }
}

fn gradient(cols: u32, rows: u32) -> RgbImage {
    RgbImage::from_fn(cols, rows, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 5 % 256) as u8, ((x + y) % 256) as u8])
    })
}

fn write_image(path: &Path, img: &RgbImage) {
    img.save(path).unwrap();
}

#[test]
fn stylized_file_keeps_content_dimensions() {
    let dir = tempdir().unwrap();
    let content_path = dir.path().join("content.jpg");
    let style_path = dir.path().join("style.jpg");
    let output_path = dir.path().join("stylized_image.jpeg");

    write_image(&content_path, &gradient(100, 100));
    write_image(&style_path, &gradient(640, 480));

    stylize_files_to_path(
        &content_path,
        &style_path,
        &output_path,
        Arc::new(Blend),
        &StylizeParams::default(),
    )
    .unwrap();

    let out = image::open(&output_path).unwrap().to_rgb8();
    assert_eq!(out.dimensions(), (100, 100));
}

#[test]
fn repeated_runs_produce_identical_bytes() {
    let dir = tempdir().unwrap();
    let content_path = dir.path().join("content.png");
    let style_path = dir.path().join("style.png");

    write_image(&content_path, &gradient(80, 60));
    write_image(&style_path, &gradient(120, 90));

    let params = StylizeParams::default();
    let a = stylize_to_buffer(&content_path, &style_path, Arc::new(Blend), &params).unwrap();
    let b = stylize_to_buffer(&content_path, &style_path, Arc::new(Blend), &params).unwrap();

    assert_eq!(a.data, b.data);
}

#[test]
fn content_pre_scale_shrinks_the_output() {
    let dir = tempdir().unwrap();
    let content_path = dir.path().join("content.png");
    let style_path = dir.path().join("style.png");

    write_image(&content_path, &gradient(800, 400));
    write_image(&style_path, &gradient(64, 64));

    let params = StylizeParams {
        size: Some(200),
        ..StylizeParams::default()
    };
    let out = stylize_to_buffer(&content_path, &style_path, Arc::new(Blend), &params).unwrap();

    assert_eq!((out.width, out.height), (200, 100));
}

#[test]
fn png_output_round_trips_losslessly() {
    let dir = tempdir().unwrap();
    let content_path = dir.path().join("content.png");
    let style_path = dir.path().join("style.png");
    let output_path = dir.path().join("stylized_image.png");

    write_image(&content_path, &gradient(33, 21));
    write_image(&style_path, &gradient(10, 10));

    let params = StylizeParams {
        format: OutputFormat::PNG,
        ..StylizeParams::default()
    };
    stylize_files_to_path(
        &content_path,
        &style_path,
        &output_path,
        Arc::new(Blend),
        &params,
    )
    .unwrap();

    let from_file = image::open(&output_path).unwrap().to_rgb8();
    let from_buffer = stylize_to_buffer(&content_path, &style_path, Arc::new(Blend), &params)
        .unwrap();
    let decoded = image::load_from_memory(&from_buffer.data).unwrap().to_rgb8();
    assert_eq!(from_file.as_raw(), decoded.as_raw());
}

#[test]
fn corrupted_content_fails_without_touching_the_model() {
    let dir = tempdir().unwrap();
    let content_path = dir.path().join("content.jpg");
    let style_path = dir.path().join("style.jpg");

    std::fs::write(&content_path, b"not an image").unwrap();
    write_image(&style_path, &gradient(50, 50));

    /// Fails the test if the pipeline ever reaches the model.
    struct Unreachable;

    impl StyleTransferModel for Unreachable {
        fn name(&self) -> &str {
            "unreachable"
        }

        fn transfer(
            &self,
            _content: ArrayView4<'_, f32>,
            _style: ArrayView4<'_, f32>,
        ) -> Result<Array4<f32>, ModelError> {
            panic!("model must not run on undecodable input");
        }
    }

    let err = stylize_to_buffer(
        &content_path,
        &style_path,
        Arc::new(Unreachable),
        &StylizeParams::default(),
    )
    .unwrap_err();
    assert!(matches!(err, stylize::Error::Decode(_)));
}

#[test]
fn pipeline_accepts_in_memory_images() {
    let pipeline = StylizationPipeline::new(Arc::new(Blend));
    let out = pipeline
        .stylize(&gradient(59, 31), &gradient(300, 200))
        .unwrap();
    assert_eq!(out.dimensions(), (59, 31));
}
