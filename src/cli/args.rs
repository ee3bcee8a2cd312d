use clap::Parser;
use std::path::PathBuf;

use stylize::types::OutputFormat;

#[derive(Parser)]
#[command(name = "stylize", version, about = "STYLIZE CLI")]
pub struct CliArgs {
    /// Content image file; keeps its structure and dimensions in the result
    #[arg(short, long)]
    pub content: Option<PathBuf>,

    /// Name of a bundled content sample (under <samples-dir>/contents)
    #[arg(long)]
    pub content_sample: Option<String>,

    /// Style image file; donates texture and palette
    #[arg(short, long)]
    pub style: Option<PathBuf>,

    /// Name of a bundled style sample (under <samples-dir>/styles)
    #[arg(long)]
    pub style_sample: Option<String>,

    /// Root directory holding the contents/ and styles/ sample galleries
    #[arg(long, default_value = ".")]
    pub samples_dir: PathBuf,

    /// Output filename
    #[arg(short, long, default_value = "stylized_image.jpeg")]
    pub output: PathBuf,

    /// Output format (jpeg or png)
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::JPEG)]
    pub format: OutputFormat,

    /// Path to the pre-trained style transfer model (.onnx)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Content size for scaling. Options:
    /// - Predefined: 512, 1024, 2048
    /// - Custom: any positive integer (e.g., 1536)
    /// - Original: "original" (no scaling)
    #[arg(long, default_value = "original")]
    pub size: String,

    /// JPEG quality (1-100)
    #[arg(long, default_value_t = 90)]
    pub quality: u8,

    /// List available samples and exit
    #[arg(long, default_value_t = false)]
    pub list_samples: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
