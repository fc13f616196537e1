//! Error types for diagram generation.
//!
//! This module provides the main error type [`DiagramError`] which wraps
//! the conditions that can abort a generation run. No error is recovered
//! locally; every one propagates to the caller, which reports it and exits
//! non-zero.

use std::io;

use thiserror::Error;

/// The main error type for diagram generation.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Graphviz backend unavailable: {0}")]
    Backend(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error + Send + Sync>),
}

impl From<crate::export::Error> for DiagramError {
    fn from(error: crate::export::Error) -> Self {
        match error {
            crate::export::Error::BackendMissing(message) => Self::Backend(message),
            other => Self::Export(Box::new(other)),
        }
    }
}

impl DiagramError {
    /// Actionable guidance for the user, where the error has any.
    ///
    /// A missing rendering backend is an environment problem the user can
    /// fix; the returned text names the prerequisite.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            Self::Backend(_) => Some(
                "Install Graphviz so the `dot` executable is on PATH \
                 (`apt-get install graphviz` on Debian/Ubuntu, `brew install graphviz` on macOS).",
            ),
            _ => None,
        }
    }
}
