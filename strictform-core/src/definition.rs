//! YAML form definitions.
//!
//! # Storage layout
//!
//! ```text
//! ~/.strictform/
//!   forms/
//!     <form_name>.yaml
//! ```
//!
//! Definitions can also be loaded from any path with [`load`].
//!
//! # API pattern
//!
//! - `fn_at(home: &Path, …)`: explicit home; used in tests with `TempDir`
//! - `fn(…)`: derives home from `dirs::home_dir()`, delegates to `_at`

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;
use crate::types::{FieldName, MessageKey, ValueKind};

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which accessors a field declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AccessMode {
    /// No custom accessors; handled by the fallback mapper in both directions.
    #[default]
    Fallback,
    /// Custom read accessor only.
    ///
    /// Writes go to the fallback mapper like any field without a write
    /// accessor, so a submission that omits the field clears the value at
    /// its path.
    Read,
    /// Read + update.
    Update,
    /// Read + add + remove.
    Collection,
}

/// One field of a form definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: FieldName,
    /// Dotted path into the record, e.g. `contact.email`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default)]
    pub access: AccessMode,
    #[serde(default)]
    pub kind: ValueKind,
    #[serde(default)]
    pub multiple: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub write_error_message: Option<MessageKey>,
}

impl FieldSpec {
    /// Path segments, or `None` when no path is declared.
    pub fn path_segments(&self) -> Option<Vec<&str>> {
        self.path.as_deref().map(|p| p.split('.').collect())
    }
}

/// Root of a form definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormDefinition {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldSpec>,
}

impl FormDefinition {
    /// Check structural rules that serde cannot express.
    pub fn validate(&self) -> Result<(), DefinitionError> {
        let invalid = |reason: String| DefinitionError::Invalid {
            form: self.name.clone(),
            reason,
        };

        if self.name.trim().is_empty() {
            return Err(invalid("form name must not be empty".to_string()));
        }

        let mut seen = HashSet::new();
        for field in &self.fields {
            if field.name.0.is_empty() {
                return Err(invalid("field name must not be empty".to_string()));
            }
            if !seen.insert(&field.name) {
                return Err(invalid(format!("duplicate field '{}'", field.name)));
            }
            match field.path_segments() {
                None if field.access != AccessMode::Fallback => {
                    return Err(invalid(format!(
                        "field '{}' needs a path for custom accessors",
                        field.name
                    )));
                }
                Some(segments) if segments.iter().any(|s| s.is_empty()) => {
                    return Err(invalid(format!(
                        "field '{}' has an empty path segment",
                        field.name
                    )));
                }
                _ => {}
            }
            if field.access == AccessMode::Collection && !field.multiple {
                return Err(invalid(format!(
                    "collection field '{}' must set multiple: true",
                    field.name
                )));
            }
        }
        Ok(())
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name.0 == name)
    }
}

// ---------------------------------------------------------------------------
// Load
// ---------------------------------------------------------------------------

/// `<home>/.strictform/forms/<name>.yaml`. Pure, no I/O.
pub fn definition_path_at(home: &Path, name: &str) -> PathBuf {
    home.join(".strictform")
        .join("forms")
        .join(format!("{name}.yaml"))
}

/// Parse and validate definition YAML. `path` is only used for error context.
pub fn parse(contents: &str, path: &Path) -> Result<FormDefinition, DefinitionError> {
    let definition: FormDefinition =
        serde_yaml::from_str(contents).map_err(|e| DefinitionError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
    definition.validate()?;
    Ok(definition)
}

/// Load a definition file from an explicit path.
///
/// Returns `DefinitionError::NotFound` if absent,
/// `DefinitionError::Parse` (with path + line context) if malformed YAML,
/// `DefinitionError::Invalid` if it fails validation.
pub fn load(path: &Path) -> Result<FormDefinition, DefinitionError> {
    if !path.exists() {
        return Err(DefinitionError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    parse(&contents, path)
}

/// Load `<home>/.strictform/forms/<name>.yaml`.
pub fn load_named_at(home: &Path, name: &str) -> Result<FormDefinition, DefinitionError> {
    load(&definition_path_at(home, name))
}

/// `load_named_at` convenience wrapper.
pub fn load_named(name: &str) -> Result<FormDefinition, DefinitionError> {
    load_named_at(&home()?, name)
}

fn home() -> Result<PathBuf, DefinitionError> {
    dirs::home_dir().ok_or(DefinitionError::HomeNotFound)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
