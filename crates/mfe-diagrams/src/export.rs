//! Export functionality for diagram descriptions.
//!
//! This module turns a [`DiagramSpec`](crate::graph::DiagramSpec) into its
//! output artifact. It is the final stage of the pipeline:
//!
//! ```text
//! Catalog definition
//!     ↓ build (graph module)
//! DiagramSpec
//!     ↓ lower (this module)
//! DOT graph
//!     ↓ render (Graphviz, external)
//! Image file
//! ```
//!
//! # Available Backends
//!
//! - [`dot`] — DOT lowering and rendering through the Graphviz `dot`
//!   executable via [`graphviz_rust`].
//!
//! # Error Handling
//!
//! Export operations return [`Error`], covering lowering failures, I/O
//! errors, and an absent Graphviz installation. [`Error`] converts into
//! [`DiagramError::Export`] or [`DiagramError::Backend`] at the crate
//! boundary.
//!
//! [`DiagramError::Export`]: crate::DiagramError::Export
//! [`DiagramError::Backend`]: crate::DiagramError::Backend

pub mod dot;

/// Errors that can occur during diagram export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while invoking the backend or writing output.
    Io(std::io::Error),
    /// The Graphviz `dot` executable could not be found.
    BackendMissing(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
            Self::BackendMissing(msg) => write!(f, "Backend missing: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
