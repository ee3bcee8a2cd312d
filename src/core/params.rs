use serde::{Deserialize, Serialize};

use crate::types::OutputFormat;

/// Stylization parameters suitable for config files and GUI presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StylizeParams {
    pub format: OutputFormat,
    /// Target long side in pixels for the content image; None means original size.
    /// The output image follows the (possibly resized) content dimensions.
    pub size: Option<usize>,
    /// JPEG quality, 1..=100. Ignored for PNG output.
    pub quality: u8,
}

impl Default for StylizeParams {
    fn default() -> Self {
        Self {
            format: OutputFormat::JPEG,
            size: None,
            quality: 90,
        }
    }
}
