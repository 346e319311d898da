//! Property-path fallback mapping for JSON records.

use std::collections::HashMap;

use serde_json::Value;

use strictform_core::{definition::FormDefinition, field::FieldNode, types::FieldName};
use strictform_mapper::FallbackMapper;

use crate::path::{self, Segments};

/// Maps a node to the record member named by its path, or by its field name
/// when no path is known.
///
/// Unreadable members populate as `null`; unwritable ones are skipped with a
/// warning. Never fails.
#[derive(Debug, Clone, Default)]
pub struct PropertyPathMapper {
    paths: HashMap<FieldName, Segments>,
}

impl PropertyPathMapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the declared `path` of every field that has one.
    pub fn from_definition(definition: &FormDefinition) -> Self {
        let paths = definition
            .fields
            .iter()
            .filter_map(|f| Some((f.name.clone(), path::segments(f.path.as_deref()?))))
            .collect();
        Self { paths }
    }

    fn segments_for(&self, name: &FieldName) -> Segments {
        self.paths
            .get(name)
            .cloned()
            .unwrap_or_else(|| vec![name.0.clone()])
    }
}

impl FallbackMapper<Value> for PropertyPathMapper {
    fn populate(&self, record: &Value, nodes: &mut [&mut FieldNode<Value>]) {
        for node in nodes.iter_mut() {
            let segments = self.segments_for(node.name());
            let value = path::lookup(record, &segments).cloned().unwrap_or(Value::Null);
            node.set_data(value);
        }
    }

    fn extract(&self, nodes: &mut [&mut FieldNode<Value>], record: &mut Value) {
        if nodes.is_empty() {
            return;
        }
        if !record.is_object() {
            tracing::warn!("record is not a JSON object; fallback fields not written");
            return;
        }
        for node in nodes.iter() {
            let segments = self.segments_for(node.name());
            match path::slot_mut(record, &segments) {
                Ok(slot) => *slot = node.data().clone(),
                Err(err) => tracing::warn!(
                    field = %node.name(),
                    error = %err,
                    "fallback mapper could not write field"
                ),
            }
        }
    }
}
