//! YAML message catalogs.
//!
//! Nested maps flatten to dotted keys:
//!
//! ```yaml
//! errors:
//!   email: "Enter a valid email address"   # key: errors.email
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde_yaml::Value as Yaml;

use strictform_core::types::MessageKey;
use strictform_mapper::Translator;

use crate::error::{io_err, CatalogError};

/// Message key → display string. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load and flatten a catalog file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let contents = std::fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        Self::parse(&contents, path)
    }

    /// Parse catalog YAML. `path` is only used for error context.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, CatalogError> {
        if contents.trim().is_empty() {
            return Ok(Self::new());
        }
        let root: Yaml = serde_yaml::from_str(contents).map_err(|e| CatalogError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut catalog = Self::new();
        match root {
            Yaml::Null => {}
            Yaml::Mapping(_) => flatten("", &root, &mut catalog.messages).map_err(|reason| {
                CatalogError::Invalid {
                    path: path.to_path_buf(),
                    reason,
                }
            })?,
            _ => {
                return Err(CatalogError::Invalid {
                    path: path.to_path_buf(),
                    reason: "top level must be a map".to_string(),
                })
            }
        }
        Ok(catalog)
    }

    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.messages.insert(key.into(), message.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

fn flatten(prefix: &str, node: &Yaml, out: &mut HashMap<String, String>) -> Result<(), String> {
    match node {
        Yaml::Mapping(map) => {
            for (k, v) in map {
                let segment = scalar_text(k).ok_or_else(|| format!("non-scalar key under '{prefix}'"))?;
                let key = if prefix.is_empty() {
                    segment
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten(&key, v, out)?;
            }
            Ok(())
        }
        other => {
            let text = scalar_text(other)
                .ok_or_else(|| format!("message '{prefix}' must be a scalar"))?;
            out.insert(prefix.to_string(), text);
            Ok(())
        }
    }
}

fn scalar_text(node: &Yaml) -> Option<String> {
    match node {
        Yaml::String(s) => Some(s.clone()),
        Yaml::Number(n) => Some(n.to_string()),
        Yaml::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl Translator for Catalog {
    fn translate(&self, key: &MessageKey) -> String {
        match self.get(&key.0) {
            Some(message) => message.to_string(),
            None => {
                tracing::debug!(key = %key, "no catalog entry; using key as message");
                key.0.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> Result<Catalog, CatalogError> {
        Catalog::parse(yaml, Path::new("messages.yaml"))
    }

    #[test]
    fn nested_maps_flatten_to_dotted_keys() {
        let catalog = parse("errors:\n  email: Bad email\n  tags:\n    max: Too many\n").expect("parse");
        assert_eq!(catalog.get("errors.email"), Some("Bad email"));
        assert_eq!(catalog.get("errors.tags.max"), Some("Too many"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn unknown_key_translates_to_itself() {
        let catalog = Catalog::new();
        assert_eq!(catalog.translate(&MessageKey::from("errors.x")), "errors.x");
    }

    #[test]
    fn known_key_translates() {
        let mut catalog = Catalog::new();
        catalog.insert("errors.x", "Nope");
        assert_eq!(catalog.translate(&MessageKey::from("errors.x")), "Nope");
    }

    #[test]
    fn empty_document_is_empty_catalog() {
        assert!(parse("").expect("parse").is_empty());
    }

    #[test]
    fn list_top_level_is_invalid() {
        let err = parse("- a\n- b\n").unwrap_err();
        assert!(matches!(err, CatalogError::Invalid { .. }), "got: {err}");
    }

    #[test]
    fn list_message_is_invalid() {
        let err = parse("errors:\n  email: [a, b]\n").unwrap_err();
        assert!(err.to_string().contains("errors.email"), "got: {err}");
    }
}
