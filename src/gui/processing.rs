use super::logging::{GuiLogLayer, LogEntry};
use super::models::{SizeMode, StylizeGui};
use crate::core::params::StylizeParams;
use crate::gui::models::init_gui_logging;
use crate::model::StyleTransferModel;
use crate::types::OutputFormat;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, trace};
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;

/// GUI-specific errors
#[derive(Debug, Error)]
pub enum GuiError {
    #[error("Invalid size parameter: {size}. Must be a positive integer or 'original'")]
    InvalidSize { size: String },

    #[error("Size must be greater than 0, got: {size}")]
    ZeroSize { size: usize },

    #[error("Missing required input: {what}")]
    MissingInput { what: String },
}

/// Everything the background thread needs, detached from GUI state.
struct StylizeJob {
    content: Option<PathBuf>,
    style: Option<PathBuf>,
    output: Option<PathBuf>,
    model_path: Option<PathBuf>,
    format: OutputFormat,
    quality: u8,
    size: String,
}

#[cfg(feature = "onnx")]
fn load_model(path: &std::path::Path) -> Result<Arc<dyn StyleTransferModel>, crate::Error> {
    let model = crate::model::OnnxStyleModel::global(path)?;
    Ok(model)
}

#[cfg(not(feature = "onnx"))]
fn load_model(_path: &std::path::Path) -> Result<Arc<dyn StyleTransferModel>, crate::Error> {
    Err(crate::Error::External(
        "this build has no model backend; rebuild with --features onnx".to_string(),
    ))
}

fn run_stylize_job(job: StylizeJob) -> Result<String, String> {
    let missing = |what: &str| GuiError::MissingInput {
        what: what.to_string(),
    };
    let content = job.content.ok_or_else(|| missing("content image").to_string())?;
    let style = job.style.ok_or_else(|| missing("style image").to_string())?;
    let output = job.output.ok_or_else(|| missing("output file").to_string())?;
    let model_path = job
        .model_path
        .ok_or_else(|| missing("model file").to_string())?;

    trace!("Content: {:?}, Style: {:?}", content, style);
    trace!("Output: {:?}, Format: {:?}", output, job.format);

    // Parse size parameter
    let target_size = if job.size == "original" || job.size.is_empty() {
        None
    } else {
        let parsed_size = job.size.parse::<usize>().map_err(|_| {
            GuiError::InvalidSize {
                size: job.size.clone(),
            }
            .to_string()
        })?;

        if parsed_size == 0 {
            return Err(GuiError::ZeroSize { size: parsed_size }.to_string());
        }

        Some(parsed_size)
    };
    debug!("Target size: {:?}", target_size);

    let model = load_model(&model_path).map_err(|e| e.to_string())?;
    let params = StylizeParams {
        format: job.format,
        size: target_size,
        quality: job.quality,
    };

    match crate::api::stylize_files_to_path(&content, &style, &output, model, &params) {
        Ok(()) => {
            info!("Successfully stylized: {:?} -> {:?}\n", content, output);
            Ok(format!(
                "Successfully stylized: {:?} -> {:?}",
                content, output
            ))
        }
        Err(e) => {
            error!("Error stylizing image: {}", e);
            Err(format!("Error stylizing image: {}", e))
        }
    }
}

impl StylizeGui {
    pub fn select_model_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("ONNX models", &["onnx"])
            .pick_file()
        {
            self.model_path = Some(path);
            info!("Selected model: {:?}", self.model_path.as_ref().unwrap());
        }
    }

    pub fn select_content_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", &["jpg", "jpeg", "png"])
            .pick_file()
        {
            self.content_upload = Some(path);
            info!(
                "Selected content image: {:?}",
                self.content_upload.as_ref().unwrap()
            );
            trace!("Content upload set");
        }
    }

    pub fn select_style_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", &["jpg", "jpeg", "png"])
            .pick_file()
        {
            self.style_upload = Some(path);
            info!(
                "Selected style image: {:?}",
                self.style_upload.as_ref().unwrap()
            );
            trace!("Style upload set");
        }
    }

    fn path_without_extension(path: &PathBuf) -> PathBuf {
        if let Some(file_name) = path.file_name().and_then(|s| s.to_str()) {
            if let Some(index) = file_name.find('.') {
                let prefix = &file_name[..index];
                if let Some(parent) = path.parent() {
                    return parent.join(prefix);
                } else {
                    return PathBuf::from(prefix);
                }
            }
        }
        path.to_path_buf()
    }

    pub fn select_output_file(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Image files", &["jpeg", "jpg", "png"])
            .set_file_name(crate::api::DEFAULT_OUTPUT_NAME)
            .save_file()
        {
            // Strip any extension from the user-selected path
            // The extension will be controlled by the format setting
            let path_without_extension = Self::path_without_extension(&path);

            self.output_path = Some(path_without_extension);
            self.update_output_path_extension();
            info!(
                "Selected output file: {:?}",
                self.output_path.as_ref().unwrap()
            );
        }
    }

    /// Update the output path extension based on the current format setting
    pub fn update_output_path_extension(&mut self) {
        if let Some(output_path) = &self.output_path {
            let path_without_extension = Self::path_without_extension(output_path);
            let new_path = path_without_extension.with_extension(self.output_format.extension());
            self.output_path = Some(new_path);
            debug!(
                "Updated output path extension to: {}",
                self.output_format.extension()
            );
        }
    }

    pub fn get_size_string(&self) -> String {
        match self.size_mode {
            SizeMode::Original => "original".to_string(),
            SizeMode::Predefined(size) => size.to_string(),
            SizeMode::Custom => self.custom_size.clone(),
        }
    }

    pub fn stylize_image(&mut self) {
        if self.is_processing {
            debug!("Stylization already in progress, ignoring request");
            return;
        }

        trace!("Starting stylization");
        self.is_processing = true;
        self.processing_start_time = Some(Instant::now());
        self.last_processing_duration = None;

        // Always initialize logging for error messages to appear in GUI
        init_gui_logging();
        info!("Stylization started");

        let job = StylizeJob {
            content: self.content_path(),
            style: self.style_path(),
            output: self.output_path.clone(),
            model_path: self.model_path.clone(),
            format: self.output_format,
            quality: self.quality,
            size: self.get_size_string(),
        };
        self.pending_output = job.output.clone();

        debug!("Background stylization parameters:");
        debug!("  Content: {:?}", job.content);
        debug!("  Style: {:?}", job.style);
        debug!("  Output format: {:?}", job.format);
        debug!("  Size: {}", job.size);

        let log_messages = self.log_messages.clone();
        let (tx, rx) = std::sync::mpsc::channel();

        std::thread::spawn(move || {
            // Set up tracing for this thread so error messages appear in GUI
            let subscriber = Registry::default().with(GuiLogLayer::new());
            let _ = tracing::subscriber::set_global_default(subscriber);

            let separator = LogEntry::new(
                tracing::Level::INFO,
                "--- Stylization Started ---".to_string(),
                "gui".to_string(),
            );
            if let Ok(mut logs) = log_messages.lock() {
                logs.push(separator);
            }

            trace!("Background stylization thread started");
            let msg = match run_stylize_job(job) {
                Ok(m) => m,
                Err(e) => {
                    error!("Stylization cancelled: {}", e);
                    format!("Error: {}", e)
                }
            };
            let _ = tx.send(msg);
        });

        // Store the receiver for completion notification
        self.completion_receiver = Some(rx);
        info!("Stylization started in background thread");
    }
}
