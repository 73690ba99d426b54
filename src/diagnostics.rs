//! Unified, `miette`-based diagnostics for the fixture compiler.
//!
//! Every generation-time failure is a [`GenError`]. Errors are fatal: the
//! pipeline stops before anything is written, and the CLI renders the error
//! through `miette::Report`.
//!
//! Structure errors are built with the [`err_shape!`](crate::err_shape) macro:
//!
//! - `err_shape!(path, "expected a sequence of cases")`
//! - `err_shape!(path, "expected a string", help = "quote the value")`

use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Unified error type for every generation-time failure mode.
#[derive(Debug, Error, Diagnostic)]
pub enum GenError {
    #[error("Failed to {action} '{}'", .path.display())]
    #[diagnostic(code(testgen::io))]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid YAML: {message}")]
    #[diagnostic(code(testgen::yaml))]
    Yaml {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("Malformed test specification at `{path}`: {message}")]
    #[diagnostic(code(testgen::shape))]
    Shape {
        path: String,
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Failed to render suite as JSON")]
    #[diagnostic(code(testgen::json))]
    Json {
        #[source]
        source: serde_json::Error,
    },
}

impl GenError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GenError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Wraps a YAML syntax error, pointing the label at the parser's location
    /// when it has one.
    pub fn yaml(name: &str, text: &str, err: serde_yaml::Error) -> Self {
        let span = err.location().and_then(|loc| {
            if text.is_empty() {
                return None;
            }
            let start = loc.index().min(text.len() - 1);
            Some(SourceSpan::from((start, 1)))
        });
        GenError::Yaml {
            message: err.to_string(),
            src: NamedSource::new(name, text.to_string()),
            span,
        }
    }

    /// The stable diagnostic code, used by tests and the CLI summary.
    pub fn code_str(&self) -> &'static str {
        match self {
            GenError::Io { .. } => "testgen::io",
            GenError::Yaml { .. } => "testgen::yaml",
            GenError::Shape { .. } => "testgen::shape",
            GenError::Json { .. } => "testgen::json",
        }
    }
}

/// Builds a [`GenError::Shape`] for a location in the specification document.
#[macro_export]
macro_rules! err_shape {
    ($path:expr, $msg:expr) => {
        $crate::diagnostics::GenError::Shape {
            path: $path.to_string(),
            message: $msg.into(),
            help: None,
        }
    };
    ($path:expr, $msg:expr, help = $help:expr) => {
        $crate::diagnostics::GenError::Shape {
            path: $path.to_string(),
            message: $msg.into(),
            help: Some($help.into()),
        }
    };
}
