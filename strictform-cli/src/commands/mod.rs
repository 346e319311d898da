pub mod extract;
pub mod plan;
pub mod populate;

use std::path::Path;

use anyhow::{Context, Result};
use serde_json::Value;

use strictform_core::{definition, FormDefinition};
use strictform_json::Catalog;

/// A definition file when `form` names an existing path, else a named form.
pub fn load_form(form: &str) -> Result<FormDefinition> {
    let path = Path::new(form);
    if path.exists() {
        return definition::load(path)
            .with_context(|| format!("failed to load form definition {}", path.display()));
    }
    definition::load_named(form).with_context(|| format!("failed to load form '{form}'"))
}

pub fn read_json(path: &Path) -> Result<Value> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("invalid JSON in {}", path.display()))
}

pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::load(path).context("failed to load message catalog"),
        None => Ok(Catalog::new()),
    }
}
