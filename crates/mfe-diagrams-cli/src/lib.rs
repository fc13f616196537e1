//! CLI logic for the MFE Demo diagram generator.
//!
//! This module contains the core CLI logic: configuration loading, the
//! generation loop over the diagram catalog, and the progress output the
//! user sees.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::path::PathBuf;

use log::info;

use mfe_diagrams::{
    DiagramError, DiagramGenerator, catalog,
    config::{AppConfig, OutputConfig},
};

/// Run the diagram generator CLI application
///
/// Renders all four catalog diagrams into the resolved output directory,
/// printing a progress line per diagram and a final listing of the files
/// produced. Returns the written paths.
///
/// The output directory and image format are resolved from the command
/// line when given, falling back to the loaded configuration.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Errors
///
/// Returns `DiagramError` for:
/// - Configuration loading errors
/// - Output directory creation failures
/// - A missing Graphviz installation
/// - Rendering errors
pub fn run(args: &Args) -> Result<Vec<PathBuf>, DiagramError> {
    // Load configuration
    let loaded = config::load_config(args.config.as_ref())?;

    // Command-line overrides win over the configuration file
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| loaded.output().directory().clone());
    let format = args.format.unwrap_or_else(|| loaded.output().format());

    info!(
        out_dir = out_dir.display().to_string(),
        format = format.extension();
        "Generating diagrams"
    );

    let config = AppConfig::new(
        loaded.style().clone(),
        OutputConfig::new(out_dir.clone(), format),
    );
    let generator = DiagramGenerator::new(config);

    println!("Creating architecture diagrams...");
    println!("Output directory: {}", out_dir.display());

    let mut written = Vec::with_capacity(4);
    for (index, spec) in catalog::all().iter().enumerate() {
        println!("{}. Creating {}...", index + 1, spec.title());
        written.push(generator.generate(spec, &out_dir)?);
    }

    println!();
    println!("Diagrams created successfully!");
    println!("Files created:");
    for path in &written {
        if let Some(name) = path.file_name() {
            println!("  - {}", name.to_string_lossy());
        }
    }

    info!(count = written.len(); "Diagram generation complete");

    Ok(written)
}
