//! Error adapter for converting DiagramError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error
//! types and miette's rich diagnostic formatting used in the CLI. The
//! library errors carry no source spans, so the adapter only contributes
//! the help text (notably the Graphviz installation guidance for a missing
//! backend).

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;

use mfe_diagrams::DiagramError;

/// Adapter wrapping a [`DiagramError`] for miette reporting.
pub struct ErrorAdapter<'a>(pub &'a DiagramError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.0
            .help()
            .map(|help| Box::new(help) as Box<dyn fmt::Display>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_errors_carry_install_guidance() {
        let err = DiagramError::Backend("dot not found".to_string());
        let adapter = ErrorAdapter(&err);
        let help = adapter.help().expect("backend error should have help");
        assert!(help.to_string().contains("graphviz"));
    }

    #[test]
    fn io_errors_have_no_help() {
        let err = DiagramError::Io(std::io::Error::other("disk full"));
        assert!(ErrorAdapter(&err).help().is_none());
    }
}
