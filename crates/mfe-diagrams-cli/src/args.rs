//! Command-line argument definitions for the diagram generator CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Every argument is optional: a bare invocation renders
//! all four diagrams into the configured output directory.

use std::path::PathBuf;

use clap::Parser;

use mfe_diagrams::config::ImageFormat;

/// Command-line arguments for the MFE Demo diagram generator
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Output directory for rendered diagrams (default: docs/diagrams)
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Image format (png, svg)
    #[arg(short, long)]
    pub format: Option<ImageFormat>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}
