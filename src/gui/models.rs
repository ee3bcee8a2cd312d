use crate::gui::logging::{GuiLogLayer, LogEntry};
use crate::io::samples::SampleGallery;
use crate::types::{ImageRole, OutputFormat};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use sysinfo;
use tracing::Level;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum SizeMode {
    Original,
    Predefined(usize),
    Custom,
}

/// Where an input image comes from: a bundled sample or a file the user
/// picked themselves.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum SourceMode {
    Sample,
    Upload,
}

static LOGGING_INIT: OnceCell<()> = OnceCell::new();

pub fn init_gui_logging() {
    LOGGING_INIT.get_or_init(|| {
        let gui_layer = GuiLogLayer::new();

        // Keep eframe/winit TRACE noise out of the log panel.
        let filter = EnvFilter::new("trace")
            .add_directive("eframe=info".parse().unwrap())
            .add_directive("winit=info".parse().unwrap());

        let subscriber = Registry::default().with(gui_layer).with(filter);
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

pub struct StylizeGui {
    // Model
    pub model_path: Option<PathBuf>,

    // Sample galleries
    pub samples_dir: PathBuf,
    pub content_samples: Vec<String>,
    pub style_samples: Vec<String>,
    pub samples_scanned: bool,

    // Input selection
    pub content_source: SourceMode,
    pub content_sample: Option<String>,
    pub content_upload: Option<PathBuf>,
    pub style_source: SourceMode,
    pub style_sample: Option<String>,
    pub style_upload: Option<PathBuf>,

    // Output parameters
    pub output_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub quality: u8,

    // Size parameters
    pub size_mode: SizeMode,
    pub custom_size: String,

    // Options
    pub min_log_level: Level,

    // Status
    pub is_processing: bool,
    pub processing_start_time: Option<Instant>,
    pub last_processing_duration: Option<Duration>,

    // Result preview: set once the background thread reports success
    pub last_result: Option<PathBuf>,
    pub pending_output: Option<PathBuf>,

    // Log messages for the central panel - thread-safe
    pub log_messages: Arc<Mutex<Vec<LogEntry>>>,

    // Receiver for completion notification from background processing
    pub completion_receiver: Option<std::sync::mpsc::Receiver<String>>,

    // System monitoring
    pub cpu_usage: f32,
    pub memory_usage_mb: f64,
    pub total_memory_mb: f64,
    pub system_monitor: Option<sysinfo::System>,
    pub last_system_update: Option<Instant>,
}

impl Default for StylizeGui {
    fn default() -> Self {
        Self {
            model_path: None,
            samples_dir: PathBuf::from("."),
            content_samples: Vec::new(),
            style_samples: Vec::new(),
            samples_scanned: false,
            content_source: SourceMode::Sample,
            content_sample: None,
            content_upload: None,
            style_source: SourceMode::Sample,
            style_sample: None,
            style_upload: None,
            output_path: None,
            output_format: OutputFormat::JPEG,
            quality: 90,
            size_mode: SizeMode::Original,
            custom_size: String::new(),
            min_log_level: Level::INFO,
            is_processing: false,
            processing_start_time: None,
            last_processing_duration: None,
            last_result: None,
            pending_output: None,
            log_messages: Arc::new(Mutex::new(Vec::new())),
            completion_receiver: None,
            cpu_usage: 0.0,
            memory_usage_mb: 0.0,
            total_memory_mb: 0.0,
            system_monitor: None,
            last_system_update: None,
        }
    }
}

impl StylizeGui {
    /// Re-scan the sample galleries under `samples_dir`.
    pub fn refresh_samples(&mut self) {
        let gallery = SampleGallery::new(&self.samples_dir);
        self.content_samples = gallery.list(ImageRole::Content).unwrap_or_default();
        self.style_samples = gallery.list(ImageRole::Style).unwrap_or_default();
        self.samples_scanned = true;
    }

    /// Resolved path of the content image for the current selection.
    pub fn content_path(&self) -> Option<PathBuf> {
        match self.content_source {
            SourceMode::Sample => {
                let gallery = SampleGallery::new(&self.samples_dir);
                self.content_sample
                    .as_ref()
                    .and_then(|name| gallery.path(ImageRole::Content, name).ok())
            }
            SourceMode::Upload => self.content_upload.clone(),
        }
    }

    /// Resolved path of the style image for the current selection.
    pub fn style_path(&self) -> Option<PathBuf> {
        match self.style_source {
            SourceMode::Sample => {
                let gallery = SampleGallery::new(&self.samples_dir);
                self.style_sample
                    .as_ref()
                    .and_then(|name| gallery.path(ImageRole::Style, name).ok())
            }
            SourceMode::Upload => self.style_upload.clone(),
        }
    }

    pub fn save_logs_to_file(&self) -> Result<(), Box<dyn std::error::Error>> {
        let logs = self
            .log_messages
            .lock()
            .map_err(|e| format!("Failed to lock logs: {}", e))?;

        if logs.is_empty() {
            return Err("No logs to save".into());
        }

        // Filter logs based on current filter level
        let filtered_logs: Vec<&LogEntry> = logs
            .iter()
            .filter(|entry| {
                if self.min_log_level == Level::TRACE {
                    // Show all logs when ALL is selected
                    true
                } else {
                    entry.level == self.min_log_level
                }
            })
            .collect();

        if filtered_logs.is_empty() {
            return Err("No logs match the current filter level".into());
        }

        if let Some(save_path) = rfd::FileDialog::new()
            .add_filter("STYLIZE Log files", &["stylog"])
            .set_file_name("stylize_log.stylog")
            .save_file()
        {
            let mut log_content = String::new();
            log_content.push_str("=== STYLIZE Log File ===\n");
            log_content.push_str(&format!("Generated: {}\n", chrono::Utc::now().to_rfc3339()));
            log_content.push_str(&format!(
                "Filter Level: {}\n",
                match self.min_log_level {
                    Level::ERROR => "ERROR",
                    Level::WARN => "WARN",
                    Level::INFO => "INFO",
                    Level::DEBUG => "DEBUG",
                    Level::TRACE => "ALL",
                }
            ));
            log_content.push_str(&format!("Total Logs: {}\n", filtered_logs.len()));
            log_content.push_str("========================\n\n");

            for entry in &filtered_logs {
                let level_str = match entry.level {
                    Level::ERROR => "ERROR",
                    Level::WARN => "WARN",
                    Level::INFO => "INFO",
                    Level::DEBUG => "DEBUG",
                    Level::TRACE => "TRACE",
                };

                log_content.push_str(&format!(
                    "[{}] {} {}: {}\n",
                    entry.timestamp, level_str, entry.target, entry.message
                ));
            }

            fs::write(&save_path, log_content)?;

            tracing::info!(
                "Filtered logs saved to: {:?} ({} entries)",
                save_path,
                filtered_logs.len()
            );

            Ok(())
        } else {
            Err("No save location selected".into())
        }
    }

    pub fn save_preset(&self) -> Result<(), Box<dyn std::error::Error>> {
        // Only configuration fields; input/output paths are deliberately
        // not part of presets.
        #[derive(Serialize)]
        struct StylizePreset {
            output_format: OutputFormat,
            quality: u8,
            size_mode: SizeMode,
            custom_size: String,
            samples_dir: String,
            model_path: Option<String>,
            min_log_level: String, // Store as string
        }

        let preset = StylizePreset {
            output_format: self.output_format,
            quality: self.quality,
            size_mode: self.size_mode,
            custom_size: self.custom_size.clone(),
            samples_dir: self.samples_dir.to_string_lossy().into_owned(),
            model_path: self
                .model_path
                .as_ref()
                .map(|p| p.to_string_lossy().into_owned()),
            min_log_level: format!("{:?}", self.min_log_level),
        };

        if let Some(save_path) = rfd::FileDialog::new()
            .add_filter("STYLIZE Preset files", &["stylize"])
            .set_file_name("stylize_preset.stylize")
            .save_file()
        {
            let mut preset_content = String::new();
            preset_content.push_str("// ==========================================\n");
            preset_content.push_str("// STYLIZE Configuration Preset\n");
            preset_content.push_str("// ==========================================\n");
            preset_content
                .push_str("// Program: STYLIZE - Neural Style Transfer Tool\n");
            preset_content.push_str(&format!("// Version: {}\n", env!("CARGO_PKG_VERSION")));
            preset_content.push_str(&format!(
                "// Generated: {}\n",
                chrono::Utc::now().to_rfc3339()
            ));
            preset_content.push_str("// Note: Input/Output paths are not included in presets\n");
            preset_content.push_str("// ==========================================\n\n");

            let json = serde_json::to_string_pretty(&preset)?;
            preset_content.push_str(&json);

            fs::write(&save_path, preset_content)?;

            tracing::info!("Preset saved to: {:?}", save_path);
            Ok(())
        } else {
            Err("No save location selected".into())
        }
    }

    pub fn load_preset(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(load_path) = rfd::FileDialog::new()
            .add_filter("STYLIZE Preset files", &["stylize"])
            .pick_file()
        {
            let content = fs::read_to_string(&load_path)?;

            // Extract JSON part by finding the first '{' character
            let json_start = content
                .find('{')
                .ok_or("Invalid preset file: no JSON content found")?;
            let json = &content[json_start..];

            #[derive(Deserialize)]
            struct StylizePreset {
                output_format: OutputFormat,
                quality: u8,
                size_mode: SizeMode,
                custom_size: String,
                samples_dir: String,
                model_path: Option<String>,
                min_log_level: String, // Load as string
            }

            let preset: StylizePreset = serde_json::from_str(json)?;

            let min_log_level = match preset.min_log_level.as_str() {
                "ERROR" => Level::ERROR,
                "WARN" => Level::WARN,
                "INFO" => Level::INFO,
                "DEBUG" => Level::DEBUG,
                "TRACE" => Level::TRACE,
                _ => Level::INFO, // Default fallback
            };

            self.output_format = preset.output_format;
            self.quality = preset.quality.clamp(1, 100);
            self.size_mode = preset.size_mode;
            self.custom_size = preset.custom_size;
            self.samples_dir = PathBuf::from(preset.samples_dir);
            self.model_path = preset.model_path.map(PathBuf::from);
            self.min_log_level = min_log_level;
            self.refresh_samples();

            tracing::info!("Preset loaded from: {:?}", load_path);
            Ok(())
        } else {
            Err("No preset file selected".into())
        }
    }

    pub fn generate_cli_command(&self) -> String {
        let mut cmd = String::from("cargo run --release --bin stylize --");

        match self.content_source {
            SourceMode::Sample => {
                if let Some(name) = &self.content_sample {
                    cmd.push_str(&format!(" --content-sample {}", name));
                }
            }
            SourceMode::Upload => {
                if let Some(path) = &self.content_upload {
                    cmd.push_str(&format!(" --content {:?}", path));
                }
            }
        }
        match self.style_source {
            SourceMode::Sample => {
                if let Some(name) = &self.style_sample {
                    cmd.push_str(&format!(" --style-sample {}", name));
                }
            }
            SourceMode::Upload => {
                if let Some(path) = &self.style_upload {
                    cmd.push_str(&format!(" --style {:?}", path));
                }
            }
        }

        if self.samples_dir != PathBuf::from(".") {
            cmd.push_str(&format!(" --samples-dir {:?}", self.samples_dir));
        }
        if let Some(model_path) = &self.model_path {
            cmd.push_str(&format!(" --model {:?}", model_path));
        }
        if let Some(output_path) = &self.output_path {
            cmd.push_str(&format!(" --output {:?}", output_path));
        }

        cmd.push_str(&format!(" --format {:?}", self.output_format).to_lowercase());
        if self.output_format == OutputFormat::JPEG && self.quality != 90 {
            cmd.push_str(&format!(" --quality {}", self.quality));
        }

        let size_str = match self.size_mode {
            SizeMode::Original => "original".to_string(),
            SizeMode::Predefined(size) => size.to_string(),
            SizeMode::Custom => self.custom_size.clone(),
        };
        cmd.push_str(&format!(" --size {}", size_str));

        // we always want to log
        cmd.push_str(" --log");

        cmd
    }

    /// Update system statistics (CPU and memory usage)
    pub fn update_system_stats(&mut self) {
        // Only update every 2 seconds to avoid excessive system calls
        let now = Instant::now();
        if let Some(last_update) = self.last_system_update {
            if now.duration_since(last_update).as_secs() < 2 {
                return;
            }
        }

        if self.system_monitor.is_none() {
            self.system_monitor = Some(sysinfo::System::new_all());
        }

        if let Some(ref mut sys) = self.system_monitor {
            sys.refresh_all();

            self.cpu_usage = sys.global_cpu_usage();
            self.memory_usage_mb = sys.used_memory() as f64 / 1024.0 / 1024.0;
            self.total_memory_mb = sys.total_memory() as f64 / 1024.0 / 1024.0;
        }

        self.last_system_update = Some(now);
    }
}
