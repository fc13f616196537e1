//! Architecture diagram definitions and rendering for the MFE Demo project.
//!
//! This crate describes the project's four architecture diagrams as
//! in-memory graphs (nodes, nested clusters, directed edges) and renders
//! them to image files through the Graphviz `dot` executable. The diagram
//! content is fixed; the only durable output is the rendered files.

pub mod catalog;
pub mod config;

mod error;
mod export;
mod graph;
mod icon;

pub use error::DiagramError;
pub use graph::{ClusterRef, DiagramSpec, Direction, NodeRef};
pub use icon::Icon;

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::{debug, info};

use config::AppConfig;
use export::dot::DotExporter;

/// Renders diagram descriptions to image files.
///
/// Holds the shared [`AppConfig`] applied to every diagram; the output
/// directory is passed per call so callers control where files land.
///
/// # Examples
///
/// ```rust,no_run
/// use mfe_diagrams::{DiagramGenerator, catalog, config::AppConfig};
///
/// let generator = DiagramGenerator::new(AppConfig::default());
/// let written = generator
///     .generate(&catalog::mfe_architecture(), "docs/diagrams".as_ref())
///     .expect("Failed to render");
/// println!("wrote {}", written.display());
/// ```
#[derive(Default)]
pub struct DiagramGenerator {
    config: AppConfig,
}

impl DiagramGenerator {
    /// Creates a generator with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Renders one diagram into `out_dir` and returns the written path.
    ///
    /// The directory is created if absent (tolerating a concurrent creator)
    /// and an existing file with the same name is overwritten, so repeated
    /// runs produce a stable file set.
    ///
    /// # Errors
    ///
    /// Returns [`DiagramError::Io`] when the directory cannot be created or
    /// written, and [`DiagramError::Backend`] when Graphviz is not
    /// installed.
    pub fn generate(&self, spec: &DiagramSpec, out_dir: &Path) -> Result<PathBuf, DiagramError> {
        fs::create_dir_all(out_dir)?;

        debug!(diagram = spec.slug(), title = spec.title(); "Generating diagram");
        let exporter = DotExporter::new(self.config.style());
        let path = exporter.render(spec, out_dir, self.config.output().format())?;
        Ok(path)
    }

    /// Renders all four catalog diagrams into `out_dir` sequentially.
    ///
    /// The first failure aborts the run; files already written stay in
    /// place, since a rerun overwrites them anyway.
    ///
    /// # Errors
    ///
    /// Same conditions as [`generate`](Self::generate).
    pub fn generate_all(&self, out_dir: &Path) -> Result<Vec<PathBuf>, DiagramError> {
        fs::create_dir_all(out_dir)?;

        let mut written = Vec::with_capacity(4);
        for spec in catalog::all() {
            written.push(self.generate(&spec, out_dir)?);
        }

        info!(count = written.len(), directory = out_dir.display().to_string(); "Generated diagrams");
        Ok(written)
    }

    /// Returns the DOT source for one diagram under this generator's
    /// styling, without invoking the rendering backend.
    pub fn dot_source(&self, spec: &DiagramSpec) -> String {
        DotExporter::new(self.config.style()).dot_source(spec)
    }
}

/// Renders all four catalog diagrams into `out_dir` with the default
/// configuration and returns the written paths.
///
/// # Errors
///
/// See [`DiagramGenerator::generate_all`].
pub fn generate_all_diagrams(out_dir: &Path) -> Result<Vec<PathBuf>, DiagramError> {
    DiagramGenerator::default().generate_all(out_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_source_is_available_without_backend() {
        let generator = DiagramGenerator::default();
        for spec in catalog::all() {
            let dot = generator.dot_source(&spec);
            assert!(dot.contains("digraph"), "{}: {dot}", spec.slug());
            assert_eq!(dot.matches("->").count(), spec.edge_count(), "{}", spec.slug());
        }
    }
}
