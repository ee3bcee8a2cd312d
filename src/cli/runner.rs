use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::info;

use stylize::core::params::StylizeParams;
use stylize::io::samples::SampleGallery;
use stylize::model::StyleTransferModel;
use stylize::types::{ImageRole, OutputFormat};
use stylize::{DEFAULT_OUTPUT_NAME, stylize_files_to_path};

use super::args::CliArgs;
use super::errors::AppError;

fn parse_target_size(size: &str) -> Result<Option<usize>, AppError> {
    if size == "original" {
        return Ok(None);
    }

    let parsed_size = size.parse::<usize>().map_err(|_| AppError::InvalidSize {
        size: size.to_string(),
    })?;
    if parsed_size == 0 {
        return Err(AppError::ZeroSize { size: parsed_size });
    }
    Ok(Some(parsed_size))
}

fn resolve_input(
    gallery: &SampleGallery,
    role: ImageRole,
    file: Option<PathBuf>,
    sample: Option<String>,
) -> Result<PathBuf, Box<dyn std::error::Error>> {
    match (file, sample) {
        (Some(path), _) => Ok(path),
        (None, Some(name)) => Ok(gallery.path(role, &name).map_err(AppError::Stylize)?),
        (None, None) => Err(AppError::MissingArgument {
            arg: format!("--{role} or --{role}-sample"),
        }
        .into()),
    }
}

/// The default output name tracks the chosen format; an explicit --output
/// is taken literally.
fn resolve_output(output: PathBuf, format: OutputFormat) -> PathBuf {
    if output == Path::new(DEFAULT_OUTPUT_NAME) {
        PathBuf::from(format!("stylized_image.{}", format.extension()))
    } else {
        output
    }
}

#[cfg(feature = "onnx")]
fn load_model(path: &Path) -> Result<Arc<dyn StyleTransferModel>, Box<dyn std::error::Error>> {
    let model = stylize::OnnxStyleModel::global(path).map_err(stylize::Error::Model)?;
    Ok(model)
}

#[cfg(not(feature = "onnx"))]
fn load_model(_path: &Path) -> Result<Arc<dyn StyleTransferModel>, Box<dyn std::error::Error>> {
    Err("this build has no model backend; rebuild with --features onnx".into())
}

fn list_samples(gallery: &SampleGallery) -> Result<(), AppError> {
    for role in [ImageRole::Content, ImageRole::Style] {
        let names = gallery.list(role)?;
        println!("{role} samples ({}):", names.len());
        for name in names {
            println!("  {name}");
        }
    }
    Ok(())
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let gallery = SampleGallery::new(&args.samples_dir);

    if args.list_samples {
        list_samples(&gallery)?;
        return Ok(());
    }

    let content = resolve_input(&gallery, ImageRole::Content, args.content, args.content_sample)?;
    let style = resolve_input(&gallery, ImageRole::Style, args.style, args.style_sample)?;

    let target_size = parse_target_size(&args.size)?;
    if !(1..=100).contains(&args.quality) {
        return Err(AppError::InvalidQuality {
            quality: args.quality,
        }
        .into());
    }

    let model_path = args.model.ok_or(AppError::MissingArgument {
        arg: "--model".to_string(),
    })?;
    let model = load_model(&model_path)?;

    let output = resolve_output(args.output, args.format);
    let params = StylizeParams {
        format: args.format,
        size: target_size,
        quality: args.quality,
    };

    stylize_files_to_path(&content, &style, &output, model, &params)?;
    info!(
        "Successfully stylized: {:?} + {:?} -> {:?}\n",
        content, style, output
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_string_parses_like_the_gui() {
        assert_eq!(parse_target_size("original").unwrap(), None);
        assert_eq!(parse_target_size("1024").unwrap(), Some(1024));
        assert!(matches!(
            parse_target_size("huge"),
            Err(AppError::InvalidSize { .. })
        ));
        assert!(matches!(
            parse_target_size("0"),
            Err(AppError::ZeroSize { .. })
        ));
    }

    #[test]
    fn default_output_follows_format() {
        let default = PathBuf::from(DEFAULT_OUTPUT_NAME);
        assert_eq!(
            resolve_output(default.clone(), OutputFormat::PNG),
            PathBuf::from("stylized_image.png")
        );
        assert_eq!(resolve_output(default.clone(), OutputFormat::JPEG), default);
        assert_eq!(
            resolve_output(PathBuf::from("custom.jpg"), OutputFormat::PNG),
            PathBuf::from("custom.jpg")
        );
    }
}
