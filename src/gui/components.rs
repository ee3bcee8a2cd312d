use super::models::{SizeMode, SourceMode, StylizeGui};
use crate::types::OutputFormat;
use eframe::egui::{Align, Color32, ComboBox, Frame, Layout, RichText, Slider, Ui};

const COMPONENT_HEIGHT: f32 = 80.0;
const COMPONENT_WIDTH: f32 = 120.0;

pub struct ModelSelectionComponent;

impl ModelSelectionComponent {
    pub fn render(ui: &mut Ui, app: &mut StylizeGui) {
        ui.heading("Model");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT * 0.6);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Style Transfer Model:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Browse").clicked() {
                        app.select_model_file();
                    }
                });
            });

            if let Some(path) = &app.model_path {
                ui.label(
                    RichText::new(path.to_string_lossy()).color(Color32::from_rgb(255, 165, 0)),
                );
            } else {
                ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
            }

            ui.add_space(5.0);
            ui.label(
                RichText::new(
                    "Pre-trained arbitrary style transfer network (.onnx). Loaded once and reused for every stylization.",
                )
                .color(Color32::from_gray(120))
                .size(11.0),
            );
        });
    }
}

pub struct ImageSelectionComponent;

impl ImageSelectionComponent {
    pub fn render_content(ui: &mut Ui, app: &mut StylizeGui) {
        ui.heading("Content Image");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.radio_value(&mut app.content_source, SourceMode::Sample, "Sample");
                ui.radio_value(&mut app.content_source, SourceMode::Upload, "Upload");
            });

            ui.add_space(5.0);

            match app.content_source {
                SourceMode::Sample => {
                    ui.horizontal(|ui| {
                        ui.label("Sample:");
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ComboBox::from_id_salt("content_sample")
                                .selected_text(
                                    app.content_sample.clone().unwrap_or_else(|| "None".to_string()),
                                )
                                .show_ui(ui, |ui| {
                                    for name in app.content_samples.clone() {
                                        ui.selectable_value(
                                            &mut app.content_sample,
                                            Some(name.clone()),
                                            &name,
                                        );
                                    }
                                });
                        });
                    });
                    if app.content_samples.is_empty() {
                        ui.label(
                            RichText::new("No content samples found under contents/")
                                .color(Color32::from_gray(120))
                                .size(11.0),
                        );
                    }
                }
                SourceMode::Upload => {
                    ui.horizontal(|ui| {
                        ui.label("File:");
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button("Browse").clicked() {
                                app.select_content_file();
                            }
                        });
                    });
                    if let Some(path) = &app.content_upload {
                        ui.label(
                            RichText::new(path.to_string_lossy())
                                .color(Color32::from_rgb(255, 165, 0)),
                        );
                    } else {
                        ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
                    }
                }
            }

            ui.add_space(5.0);
            ui.label(
                RichText::new("Keeps its structure and dimensions in the result.")
                    .color(Color32::from_gray(120))
                    .size(11.0),
            );
        });
    }

    pub fn render_style(ui: &mut Ui, app: &mut StylizeGui) {
        ui.heading("Style Image");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.radio_value(&mut app.style_source, SourceMode::Sample, "Sample");
                ui.radio_value(&mut app.style_source, SourceMode::Upload, "Upload");
            });

            ui.add_space(5.0);

            match app.style_source {
                SourceMode::Sample => {
                    ui.horizontal(|ui| {
                        ui.label("Sample:");
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ComboBox::from_id_salt("style_sample")
                                .selected_text(
                                    app.style_sample.clone().unwrap_or_else(|| "None".to_string()),
                                )
                                .show_ui(ui, |ui| {
                                    for name in app.style_samples.clone() {
                                        ui.selectable_value(
                                            &mut app.style_sample,
                                            Some(name.clone()),
                                            &name,
                                        );
                                    }
                                });
                        });
                    });
                    if app.style_samples.is_empty() {
                        ui.label(
                            RichText::new("No style samples found under styles/")
                                .color(Color32::from_gray(120))
                                .size(11.0),
                        );
                    }
                }
                SourceMode::Upload => {
                    ui.horizontal(|ui| {
                        ui.label("File:");
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            if ui.button("Browse").clicked() {
                                app.select_style_file();
                            }
                        });
                    });
                    if let Some(path) = &app.style_upload {
                        ui.label(
                            RichText::new(path.to_string_lossy())
                                .color(Color32::from_rgb(255, 165, 0)),
                        );
                    } else {
                        ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
                    }
                }
            }

            ui.add_space(5.0);
            ui.label(
                RichText::new("Donates texture and palette. Resized to the network's fixed style edge before transfer.")
                    .color(Color32::from_gray(120))
                    .size(11.0),
            );
        });
    }
}

pub struct OutputOptionsComponent;

impl OutputOptionsComponent {
    pub fn render(ui: &mut Ui, app: &mut StylizeGui) {
        ui.heading("Output Options");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Output File:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button("Browse").clicked() {
                        app.select_output_file();
                    }
                });
            });

            if let Some(path) = &app.output_path {
                ui.label(
                    RichText::new(path.to_string_lossy()).color(Color32::from_rgb(255, 165, 0)),
                );
            } else {
                ui.label(RichText::new("None selected").color(Color32::from_gray(120)));
            }

            ui.add_space(10.0);

            ui.horizontal(|ui| {
                ui.label("Image Format:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let old_format = app.output_format;
                    ComboBox::from_id_salt("output_format")
                        .selected_text(format!("{:?}", app.output_format))
                        .show_ui(ui, |ui| {
                            ui.selectable_value(&mut app.output_format, OutputFormat::JPEG, "JPEG");
                            ui.selectable_value(&mut app.output_format, OutputFormat::PNG, "PNG");
                        });

                    // Update output path extension if format changed
                    if app.output_format != old_format {
                        app.update_output_path_extension();
                        if let Some(path) = &app.output_path {
                            tracing::debug!(
                                "Output format changed to {:?}, updated path: {:?}",
                                app.output_format,
                                path
                            );
                        }
                    }
                });
            });

            if app.output_format == OutputFormat::JPEG {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label("JPEG Quality:");
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.add(Slider::new(&mut app.quality, 1..=100));
                    });
                });
            }
        });
    }
}

pub struct SizeOptionsComponent;

impl SizeOptionsComponent {
    pub fn render(ui: &mut Ui, app: &mut StylizeGui) {
        ui.heading("Size Options");

        Frame::NONE.inner_margin(0.0).show(ui, |ui| {
            ui.set_min_height(COMPONENT_HEIGHT * 0.6);
            ui.set_min_width(COMPONENT_WIDTH);

            ui.horizontal(|ui| {
                ui.label("Content Size:");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ComboBox::from_id_salt("size_mode")
                        .selected_text(match app.size_mode {
                            SizeMode::Original => "Original".to_string(),
                            SizeMode::Predefined(size) => format!("{}", size),
                            SizeMode::Custom => "Custom".to_string(),
                        })
                        .show_ui(ui, |ui| {
                            if ui
                                .selectable_value(
                                    &mut app.size_mode,
                                    SizeMode::Original,
                                    "Original",
                                )
                                .clicked()
                            {
                                app.custom_size.clear();
                            }
                            for &size in &[512, 1024, 2048] {
                                if ui
                                    .selectable_value(
                                        &mut app.size_mode,
                                        SizeMode::Predefined(size),
                                        size.to_string(),
                                    )
                                    .clicked()
                                {
                                    app.custom_size.clear();
                                }
                            }
                            if ui
                                .selectable_value(&mut app.size_mode, SizeMode::Custom, "Custom")
                                .clicked()
                            {
                                // Do nothing, keep custom_size
                            }
                        });
                });
            });

            if matches!(app.size_mode, SizeMode::Custom) {
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    ui.label("Custom Size (pixels):");
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let response = ui.text_edit_singleline(&mut app.custom_size);
                        if let Some(text) = response.changed().then(|| app.custom_size.clone()) {
                            app.custom_size = text.chars().filter(|c| c.is_ascii_digit()).collect();
                        }
                    });
                });
            }

            ui.add_space(5.0);
            ui.label(
                RichText::new("Long side of the content image before transfer. Only downscaling; larger values keep the original dimensions. The result follows the content size.")
                    .color(Color32::from_gray(120))
                    .size(11.0),
            );
        });
    }
}

pub struct FooterComponent;

impl FooterComponent {
    pub fn render(ui: &mut Ui, app: &mut StylizeGui) {
        // Update system statistics
        app.update_system_stats();

        ui.horizontal(|ui| {
            // Left side - Timing and system information
            let status_color = if app.is_processing {
                Color32::from_rgb(255, 165, 0) // Orange for processing
            } else {
                Color32::from_rgb(100, 200, 100) // Green for ready
            };

            let timing_text = if app.is_processing {
                if let Some(start_time) = app.processing_start_time {
                    let elapsed = start_time.elapsed();
                    format!("Stylizing: {:.2?}", elapsed)
                } else {
                    "Stylizing...".to_string()
                }
            } else if let Some(duration) = app.last_processing_duration {
                format!("Last run: {:.2?}", duration)
            } else {
                "Ready".to_string()
            };

            ui.label(RichText::new(timing_text).color(status_color).size(14.0));

            ui.separator();

            // CPU usage
            let cpu_color = if app.cpu_usage > 80.0 {
                Color32::from_rgb(255, 100, 100) // Red for high usage
            } else if app.cpu_usage > 50.0 {
                Color32::from_rgb(255, 165, 0) // Orange for medium usage
            } else {
                Color32::from_rgb(100, 200, 100) // Green for low usage
            };

            ui.label(
                RichText::new(format!("CPU: {:.1}%", app.cpu_usage))
                    .color(cpu_color)
                    .size(12.0),
            );

            ui.separator();

            // Memory usage
            let memory_percent = if app.total_memory_mb > 0.0 {
                (app.memory_usage_mb / app.total_memory_mb) * 100.0
            } else {
                0.0
            };

            let memory_color = if memory_percent > 80.0 {
                Color32::from_rgb(255, 100, 100) // Red for high usage
            } else if memory_percent > 60.0 {
                Color32::from_rgb(255, 165, 0) // Orange for medium usage
            } else {
                Color32::from_rgb(100, 200, 100) // Green for low usage
            };

            ui.label(
                RichText::new(format!(
                    "RAM: {:.1} GB / {:.1} GB ({:.1}%)",
                    app.memory_usage_mb / 1024.0,
                    app.total_memory_mb / 1024.0,
                    memory_percent
                ))
                .color(memory_color)
                .size(12.0),
            );

            // Right side - Buttons
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui.button("To CLI").clicked() {
                    let cli_command = app.generate_cli_command();

                    // Create a special CLI command entry (not a regular log)
                    let cli_entry = crate::gui::logging::LogEntry::new(
                        tracing::Level::INFO,
                        format!("CLI Command: {}", cli_command),
                        "cli".to_string(),
                    );

                    if let Ok(mut logs) = app.log_messages.lock() {
                        logs.push(cli_entry);
                    }
                }

                if ui.button("Save Preset").clicked() {
                    match app.save_preset() {
                        Ok(()) => {
                            // Success is logged in the method
                        }
                        Err(e) => {
                            tracing::error!("Failed to save preset: {}", e);
                        }
                    }
                }

                if ui.button("Load Preset").clicked() {
                    match app.load_preset() {
                        Ok(()) => {
                            // Success is logged in the method
                        }
                        Err(e) => {
                            tracing::error!("Failed to load preset: {}", e);
                        }
                    }
                }

                if ui.button("Save Logs").clicked() {
                    match app.save_logs_to_file() {
                        Ok(()) => {
                            // Success is logged in the method
                        }
                        Err(e) => {
                            tracing::error!("Failed to save logs: {}", e);
                        }
                    }
                }

                if ui.button("Clear").clicked() {
                    if let Ok(mut logs) = app.log_messages.lock() {
                        logs.clear();
                    }
                }

                if ui.button("Reset").clicked() {
                    *app = StylizeGui::default();
                }
            });
        });
    }
}
