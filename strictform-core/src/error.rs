//! Error types for strictform-core.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Accessor failures
// ---------------------------------------------------------------------------

/// Which accessor argument failed its type check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentPosition {
    /// The submitted value or collection element.
    Value,
    /// The record being read from or written into.
    Record,
}

impl fmt::Display for ArgumentPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentPosition::Value => write!(f, "value"),
            ArgumentPosition::Record => write!(f, "record"),
        }
    }
}

/// A type mismatch reported by an accessor at its argument boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{position} argument type mismatch: expected {expected}, found {found}")]
pub struct AccessorFailure {
    pub position: ArgumentPosition,
    pub expected: String,
    pub found: String,
}

impl AccessorFailure {
    /// The value (or element) argument did not have the expected shape.
    pub fn value(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            position: ArgumentPosition::Value,
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// The record argument did not have the expected shape.
    pub fn record(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            position: ArgumentPosition::Record,
            expected: expected.into(),
            found: found.into(),
        }
    }
}

/// How a caught accessor failure is handled.
///
/// | class            | handling                                              |
/// |------------------|-------------------------------------------------------|
/// | `ReadMismatch`   | recovered as the empty/absent value, never surfaced   |
/// | `RecordMismatch` | suppressed; an ancestor field reports it              |
/// | `ValueMismatch`  | field error when a message key is configured          |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    ReadMismatch,
    RecordMismatch,
    ValueMismatch,
}

impl FailureClass {
    /// Classify a failure raised while reading the record.
    pub fn of_read(_failure: &AccessorFailure) -> Self {
        FailureClass::ReadMismatch
    }

    /// Classify a failure raised by an update, add or remove accessor.
    pub fn of_write(failure: &AccessorFailure) -> Self {
        match failure.position {
            ArgumentPosition::Record => FailureClass::RecordMismatch,
            ArgumentPosition::Value => FailureClass::ValueMismatch,
        }
    }
}

/// A user-visible error attached to a field node.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Translated message.
    pub message: String,
    /// The accessor failure that produced this error.
    #[source]
    pub cause: AccessorFailure,
}

// ---------------------------------------------------------------------------
// Definition errors
// ---------------------------------------------------------------------------

/// All errors that can arise from loading form definitions.
#[derive(Debug, Error)]
pub enum DefinitionError {
    /// Underlying I/O failure (permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error on load, with file path and line context from serde_yaml.
    #[error("failed to parse form definition at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The definition parsed but is not usable.
    #[error("invalid form definition '{form}': {reason}")]
    Invalid { form: String, reason: String },

    /// `dirs::home_dir()` returned `None`; cannot locate `~/.strictform/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// The definition file did not exist at the expected path.
    #[error("form definition not found at {path}")]
    NotFound { path: PathBuf },
}
