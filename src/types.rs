//! Shared types and enums used across STYLIZE.
//! Includes the output image format and the role an input image plays
//! in the transfer (content vs. style).
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
pub enum OutputFormat {
    JPEG,
    PNG,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::JPEG => "jpeg",
            OutputFormat::PNG => "png",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::JPEG => write!(f, "JPEG"),
            OutputFormat::PNG => write!(f, "PNG"),
        }
    }
}

/// Which side of the transfer an input image feeds: the content image keeps
/// its structure and dimensions, the style image donates texture and palette.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
pub enum ImageRole {
    Content,
    Style,
}

impl std::fmt::Display for ImageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageRole::Content => write!(f, "content"),
            ImageRole::Style => write!(f, "style"),
        }
    }
}
