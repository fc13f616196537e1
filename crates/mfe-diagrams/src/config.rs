//! Configuration types for diagram generation.
//!
//! This module provides the configuration structures that control styling
//! and output of rendered diagrams. All types implement
//! [`serde::Deserialize`] so they can be loaded from a TOML file by the CLI,
//! and every field has a default matching the project's reference styling.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and output settings.
//! - [`StyleConfig`] - Shared visual styling applied to every diagram.
//! - [`OutputConfig`] - Output directory and image format.
//!
//! # Example
//!
//! ```
//! # use mfe_diagrams::config::AppConfig;
//! let config = AppConfig::default();
//! assert_eq!(config.style().font_name(), "Arial");
//! assert_eq!(config.output().format().extension(), "png");
//! ```

use std::{fmt, path::PathBuf, str::FromStr};

use serde::Deserialize;

/// Top-level configuration combining style and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,

    /// Output configuration section.
    #[serde(default)]
    output: OutputConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    pub fn new(style: StyleConfig, output: OutputConfig) -> Self {
        Self { style, output }
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Returns the output configuration.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }
}

/// Visual styling shared by all diagrams.
///
/// These are the graph-level attributes the reference diagrams set on every
/// canvas; factoring them into one structure keeps the four diagram
/// definitions free of repeated literals.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Font family for titles and labels.
    font_name: String,

    /// Title font size in points.
    font_size: u32,

    /// Canvas background color.
    background_color: String,

    /// Canvas padding in inches.
    padding: f64,
}

impl StyleConfig {
    /// Returns the font family.
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Returns the title font size in points.
    pub fn font_size(&self) -> u32 {
        self.font_size
    }

    /// Returns the canvas background color.
    pub fn background_color(&self) -> &str {
        &self.background_color
    }

    /// Returns the canvas padding in inches.
    pub fn padding(&self) -> f64 {
        self.padding
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        StyleConfig {
            font_name: "Arial".to_string(),
            font_size: 20,
            background_color: "white".to_string(),
            padding: 0.5,
        }
    }
}

/// Output location and image format for rendered diagrams.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory the image files are written into, created if absent.
    directory: PathBuf,

    /// Image format produced by the rendering backend.
    format: ImageFormat,
}

impl OutputConfig {
    /// Creates a new [`OutputConfig`] with the specified directory and format.
    pub fn new(directory: PathBuf, format: ImageFormat) -> Self {
        Self { directory, format }
    }

    /// Returns the configured output directory.
    pub fn directory(&self) -> &PathBuf {
        &self.directory
    }

    /// Returns the configured image format.
    pub fn format(&self) -> ImageFormat {
        self.format
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            directory: PathBuf::from("docs/diagrams"),
            format: ImageFormat::default(),
        }
    }
}

/// Image format the rendering backend produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Raster PNG output (the reference format).
    #[default]
    Png,
    /// Vector SVG output.
    Svg,
}

impl ImageFormat {
    /// Returns the file extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            other => Err(format!("unknown image format '{other}' (expected png or svg)")),
        }
    }
}
