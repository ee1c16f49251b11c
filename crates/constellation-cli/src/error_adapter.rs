//! Error adapter for converting ConstellationError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Engine errors
//! carry no source spans, so the adapter contributes codes and help text
//! only.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan};

use constellation::ConstellationError;

/// Adapter wrapping a [`ConstellationError`] for miette rendering.
pub struct ErrorAdapter<'a>(pub &'a ConstellationError);

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

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ConstellationError::Io(_) => "constellation::io",
            ConstellationError::UnknownDiagram(_) => "constellation::unknown_diagram",
            ConstellationError::DuplicateDiagram(_) => "constellation::duplicate_diagram",
            ConstellationError::Config(_) => "constellation::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help: &str = match &self.0 {
            ConstellationError::UnknownDiagram(_) => {
                "the diagram id is not loaded; check the input file list"
            }
            ConstellationError::Config(_) => {
                "valid modes are all, subset-only, and none; see constellation/config.toml"
            }
            ConstellationError::Io(_) | ConstellationError::DuplicateDiagram(_) => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}
