//! Dotted-path navigation inside a JSON record.
//!
//! Every shape problem on the way to the target is reported as a
//! record-position [`AccessorFailure`]: the record, not the value, is wrong.

use serde_json::{Map, Value};

use strictform_core::{error::AccessorFailure, types::type_name};

/// Owned path segments, e.g. `["contact", "email"]`.
pub type Segments = Vec<String>;

pub fn segments(path: &str) -> Segments {
    path.split('.').map(str::to_string).collect()
}

/// Value at `segments`. Missing members and non-object parents fail.
pub fn lookup<'a>(record: &'a Value, segments: &[String]) -> Result<&'a Value, AccessorFailure> {
    let mut current = record;
    for segment in segments {
        let Value::Object(map) = current else {
            return Err(AccessorFailure::record(
                format!("object containing '{segment}'"),
                type_name(current),
            ));
        };
        current = map.get(segment).ok_or_else(|| {
            AccessorFailure::record(format!("member '{segment}'"), "missing member")
        })?;
    }
    Ok(current)
}

/// Mutable value at `segments`, or `None` when a member is missing.
pub fn find_mut<'a>(
    record: &'a mut Value,
    segments: &[String],
) -> Result<Option<&'a mut Value>, AccessorFailure> {
    let mut current = record;
    for segment in segments {
        let found = type_name(current);
        let Value::Object(map) = current else {
            return Err(AccessorFailure::record(
                format!("object containing '{segment}'"),
                found,
            ));
        };
        match map.get_mut(segment) {
            Some(next) => current = next,
            None => return Ok(None),
        }
    }
    Ok(Some(current))
}

/// Mutable slot at `segments`, creating missing members along the way.
///
/// Missing or `null` intermediates become empty objects. The root itself must
/// already be an object.
pub fn slot_mut<'a>(
    record: &'a mut Value,
    segments: &[String],
) -> Result<&'a mut Value, AccessorFailure> {
    let mut current = record;
    for (depth, segment) in segments.iter().enumerate() {
        if depth > 0 && current.is_null() {
            *current = Value::Object(Map::new());
        }
        let found = type_name(current);
        let Value::Object(map) = current else {
            return Err(AccessorFailure::record(
                format!("object containing '{segment}'"),
                found,
            ));
        };
        current = map.entry(segment.clone()).or_insert(Value::Null);
    }
    Ok(current)
}
