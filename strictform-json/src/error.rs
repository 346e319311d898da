//! Error types for strictform-json.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from loading a message catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error, with file path and line context from serde_yaml.
    #[error("failed to parse message catalog at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Parsed YAML that is not a map of message keys.
    #[error("invalid message catalog at {path}: {reason}")]
    Invalid { path: PathBuf, reason: String },
}

/// Errors from binding submitted JSON to field nodes.
#[derive(Debug, Error)]
pub enum SubmissionError {
    /// Submissions are JSON objects keyed by field name.
    #[error("submission must be a JSON object keyed by field name, found {found}")]
    NotAnObject { found: &'static str },

    /// The submission names a field the form does not declare.
    #[error("submission contains unknown field '{field}'")]
    UnknownField { field: String },
}

/// Convenience constructor for [`CatalogError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> CatalogError {
    CatalogError::Io {
        path: path.into(),
        source,
    }
}
