//! Domain types shared by every strictform crate.
//!
//! Field values are `serde_json::Value`; `Value::Null` is the empty/absent value.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A strongly-typed name for a field node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldName(pub String);

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

/// A translatable message key, resolved through a translator on write failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageKey(pub String);

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for MessageKey {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageKey {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

/// Position of an element inside a collection value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// Element of a JSON array.
    Index(usize),
    /// Member of a JSON object.
    Name(String),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(i) => write!(f, "{i}"),
            Key::Name(n) => write!(f, "{n}"),
        }
    }
}

/// An ordered, keyed collection value.
pub type Collection = Vec<(Key, Value)>;

/// Split a value into keyed entries.
///
/// `Null` is the empty collection. Returns `None` for scalars.
pub fn collection_entries(value: &Value) -> Option<Collection> {
    match value {
        Value::Null => Some(Vec::new()),
        Value::Array(items) => Some(
            items
                .iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i), v.clone()))
                .collect(),
        ),
        Value::Object(map) => Some(
            map.iter()
                .map(|(k, v)| (Key::Name(k.clone()), v.clone()))
                .collect(),
        ),
        _ => None,
    }
}

/// Short JSON type name, used in accessor failure descriptions.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "number",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

// ---------------------------------------------------------------------------
// Value kinds
// ---------------------------------------------------------------------------

/// Declared type of a field's value (or of each element, for collections).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    #[default]
    Any,
    String,
    Integer,
    Number,
    Boolean,
    Object,
    Array,
}

impl ValueKind {
    /// Whether `value` satisfies this kind. `Null` satisfies every kind.
    pub fn accepts(self, value: &Value) -> bool {
        match (self, value) {
            (_, Value::Null) | (ValueKind::Any, _) => true,
            (ValueKind::String, Value::String(_)) => true,
            (ValueKind::Integer, Value::Number(n)) => n.is_i64() || n.is_u64(),
            (ValueKind::Number, Value::Number(_)) => true,
            (ValueKind::Boolean, Value::Bool(_)) => true,
            (ValueKind::Object, Value::Object(_)) => true,
            (ValueKind::Array, Value::Array(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Any => write!(f, "any"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Integer => write!(f, "integer"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::Boolean => write!(f, "boolean"),
            ValueKind::Object => write!(f, "object"),
            ValueKind::Array => write!(f, "array"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn newtype_display() {
        assert_eq!(FieldName::from("email").to_string(), "email");
        assert_eq!(MessageKey::from("errors.email").to_string(), "errors.email");
        assert_eq!(Key::Index(3).to_string(), "3");
        assert_eq!(Key::Name("en".into()).to_string(), "en");
    }

    #[test]
    fn null_is_empty_collection() {
        assert_eq!(collection_entries(&Value::Null), Some(vec![]));
    }

    #[test]
    fn array_entries_are_indexed() {
        let entries = collection_entries(&json!(["a", "b"])).expect("collection");
        assert_eq!(
            entries,
            vec![(Key::Index(0), json!("a")), (Key::Index(1), json!("b"))]
        );
    }

    #[test]
    fn object_entries_keep_insertion_order() {
        let entries = collection_entries(&json!({"z": 1, "a": 2})).expect("collection");
        assert_eq!(entries[0].0, Key::Name("z".into()));
        assert_eq!(entries[1].0, Key::Name("a".into()));
    }

    #[test]
    fn scalars_are_not_collections() {
        assert!(collection_entries(&json!("x")).is_none());
        assert!(collection_entries(&json!(1)).is_none());
    }

    #[test]
    fn kind_acceptance_is_strict() {
        assert!(ValueKind::Integer.accepts(&json!(3)));
        assert!(!ValueKind::Integer.accepts(&json!(3.5)));
        assert!(!ValueKind::String.accepts(&json!(1)));
        assert!(!ValueKind::Boolean.accepts(&json!(0)));
        assert!(ValueKind::Number.accepts(&json!(3.5)));
        assert!(ValueKind::String.accepts(&Value::Null));
        assert!(ValueKind::Any.accepts(&json!({"a": 1})));
    }

    #[test]
    fn type_names() {
        assert_eq!(type_name(&json!(1)), "integer");
        assert_eq!(type_name(&json!(1.5)), "number");
        assert_eq!(type_name(&json!([])), "array");
    }
}
