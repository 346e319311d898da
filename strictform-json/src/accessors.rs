//! Path-based accessors for JSON records, built from a [`FormDefinition`].
//!
//! | access       | accessors installed           |
//! |--------------|-------------------------------|
//! | `fallback`   | none                          |
//! | `read`       | read                          |
//! | `update`     | read + update                 |
//! | `collection` | read + add + remove (arrays)  |
//!
//! Values are checked against the field's [`ValueKind`] (element kind for
//! `multiple` fields) and rejected as value-position failures.
//!
//! Collection fields are JSON arrays on every side: the reader rejects any
//! other value at the path as a record-position failure, the same way the
//! adder and remover do.

use serde_json::Value;

use strictform_core::{
    definition::{AccessMode, FieldSpec, FormDefinition},
    error::AccessorFailure,
    field::FieldNode,
    types::{collection_entries, type_name, ValueKind},
};

use crate::path::{self, Segments};

/// Build one node per field, in declaration order.
pub fn build_nodes(definition: &FormDefinition) -> Vec<FieldNode<Value>> {
    definition.fields.iter().map(build_node).collect()
}

pub fn build_node(spec: &FieldSpec) -> FieldNode<Value> {
    let mut node = FieldNode::new(spec.name.clone()).multiple(spec.multiple);
    if let Some(key) = &spec.write_error_message {
        node = node.write_error_message(key.clone());
    }

    let Some(raw) = spec.path.as_deref() else {
        return node;
    };
    let segments = path::segments(raw);

    match spec.access {
        AccessMode::Fallback => node,
        AccessMode::Read => node.read(reader(segments, spec.multiple)),
        AccessMode::Update => node
            .read(reader(segments.clone(), spec.multiple))
            .update(updater(segments, spec.kind, spec.multiple)),
        AccessMode::Collection => node
            .read(array_reader(segments.clone()))
            .collection(adder(segments.clone(), spec.kind), remover(segments)),
    }
}

// ---------------------------------------------------------------------------
// Accessor factories
// ---------------------------------------------------------------------------

fn reader(
    segments: Segments,
    multiple: bool,
) -> impl Fn(&Value) -> Result<Value, AccessorFailure> + 'static {
    move |record| {
        let value = path::lookup(record, &segments)?;
        if multiple && collection_entries(value).is_none() {
            return Err(AccessorFailure::record("collection", type_name(value)));
        }
        Ok(value.clone())
    }
}

fn array_reader(segments: Segments) -> impl Fn(&Value) -> Result<Value, AccessorFailure> + 'static {
    move |record| {
        let value = path::lookup(record, &segments)?;
        if value.is_array() {
            Ok(value.clone())
        } else {
            Err(AccessorFailure::record("array", type_name(value)))
        }
    }
}

fn updater(
    segments: Segments,
    kind: ValueKind,
    multiple: bool,
) -> impl Fn(Value, &mut Value) -> Result<(), AccessorFailure> + 'static {
    move |value, record| {
        check_value(kind, multiple, &value)?;
        *path::slot_mut(record, &segments)? = value;
        Ok(())
    }
}

fn adder(
    segments: Segments,
    kind: ValueKind,
) -> impl Fn(Value, &mut Value) -> Result<(), AccessorFailure> + 'static {
    move |element, record| {
        check_kind(kind, &element)?;
        let slot = path::slot_mut(record, &segments)?;
        if slot.is_null() {
            *slot = Value::Array(Vec::new());
        }
        match slot {
            Value::Array(items) => {
                items.push(element);
                Ok(())
            }
            other => Err(AccessorFailure::record("array", type_name(other))),
        }
    }
}

fn remover(segments: Segments) -> impl Fn(Value, &mut Value) -> Result<(), AccessorFailure> + 'static {
    move |element, record| match path::find_mut(record, &segments)? {
        None | Some(Value::Null) => Ok(()),
        Some(Value::Array(items)) => {
            if let Some(pos) = items.iter().position(|item| item == &element) {
                items.remove(pos);
            }
            Ok(())
        }
        Some(other) => Err(AccessorFailure::record("array", type_name(other))),
    }
}

// ---------------------------------------------------------------------------
// Value checks
// ---------------------------------------------------------------------------

fn check_kind(kind: ValueKind, value: &Value) -> Result<(), AccessorFailure> {
    if kind.accepts(value) {
        Ok(())
    } else {
        Err(AccessorFailure::value(kind.to_string(), type_name(value)))
    }
}

fn check_value(kind: ValueKind, multiple: bool, value: &Value) -> Result<(), AccessorFailure> {
    if !multiple {
        return check_kind(kind, value);
    }
    let entries = collection_entries(value)
        .ok_or_else(|| AccessorFailure::value("collection", type_name(value)))?;
    entries
        .iter()
        .try_for_each(|(_, element)| check_kind(kind, element))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strictform_core::{
        error::ArgumentPosition,
        field::WriteAccess,
        types::{FieldName, MessageKey},
    };

    fn spec(access: AccessMode, kind: ValueKind, multiple: bool) -> FieldSpec {
        FieldSpec {
            name: FieldName::from("f"),
            path: Some("profile.f".to_string()),
            access,
            kind,
            multiple,
            write_error_message: Some(MessageKey::from("errors.f")),
        }
    }

    fn update_of(node: &FieldNode<Value>) -> &strictform_core::field::WriteAccessor<Value> {
        match &node.config().accessors.write {
            WriteAccess::Update(update) => update,
            _ => panic!("expected update accessor"),
        }
    }

    #[test]
    fn fallback_spec_has_no_accessors() {
        let node = build_node(&spec(AccessMode::Fallback, ValueKind::Any, false));
        assert!(!node.config().accessors.has_read());
        assert!(!node.config().accessors.is_writable());
        assert_eq!(node.config().write_error_message, Some(MessageKey::from("errors.f")));
    }

    #[test]
    fn read_spec_is_not_writable() {
        let node = build_node(&spec(AccessMode::Read, ValueKind::Any, false));
        assert!(node.config().accessors.has_read());
        assert!(!node.config().accessors.is_writable());
    }

    #[test]
    fn update_rejects_wrong_kind_as_value_failure() {
        let node = build_node(&spec(AccessMode::Update, ValueKind::Integer, false));
        let mut record = json!({});
        let err = update_of(&node)(json!("nine"), &mut record).unwrap_err();
        assert_eq!(err.position, ArgumentPosition::Value);
        assert_eq!(record, json!({}));
    }

    #[test]
    fn update_rejects_scalar_root_as_record_failure() {
        let node = build_node(&spec(AccessMode::Update, ValueKind::Integer, false));
        let mut record = json!("not an object");
        let err = update_of(&node)(json!(9), &mut record).unwrap_err();
        assert_eq!(err.position, ArgumentPosition::Record);
    }

    #[test]
    fn multiple_update_checks_each_element() {
        let node = build_node(&spec(AccessMode::Update, ValueKind::String, true));
        let mut record = json!({});
        update_of(&node)(json!(["a", "b"]), &mut record).expect("strings accepted");
        assert_eq!(record, json!({"profile": {"f": ["a", "b"]}}));

        let err = update_of(&node)(json!(["a", 1]), &mut record).unwrap_err();
        assert_eq!(err, AccessorFailure::value("string", "integer"));
    }

    #[test]
    fn collection_add_and_remove_edit_the_array() {
        let node = build_node(&spec(AccessMode::Collection, ValueKind::String, true));
        let WriteAccess::Collection { add, remove } = &node.config().accessors.write else {
            panic!("expected collection accessors");
        };
        let mut record = json!({"profile": {}});
        add(json!("x"), &mut record).expect("add");
        add(json!("y"), &mut record).expect("add");
        remove(json!("x"), &mut record).expect("remove");
        remove(json!("missing"), &mut record).expect("remove absent element");
        assert_eq!(record, json!({"profile": {"f": ["y"]}}));
    }

    #[test]
    fn collection_add_into_scalar_is_record_failure() {
        let node = build_node(&spec(AccessMode::Collection, ValueKind::Any, true));
        let WriteAccess::Collection { add, .. } = &node.config().accessors.write else {
            panic!("expected collection accessors");
        };
        let mut record = json!({"profile": {"f": "scalar"}});
        let err = add(json!("x"), &mut record).unwrap_err();
        assert_eq!(err.position, ArgumentPosition::Record);
    }

    #[test]
    fn collection_reader_accepts_arrays_only() {
        let node = build_node(&spec(AccessMode::Collection, ValueKind::Any, true));
        let read = node.config().accessors.read.as_ref().expect("reader");
        assert_eq!(read(&json!({"profile": {"f": [3]}})).expect("read"), json!([3]));
        for target in [json!(3), json!({"en": "Hello"}), Value::Null] {
            let err = read(&json!({"profile": {"f": target}})).unwrap_err();
            assert_eq!(err.position, ArgumentPosition::Record);
        }
    }

    #[test]
    fn multiple_update_reader_accepts_objects() {
        let node = build_node(&spec(AccessMode::Update, ValueKind::Any, true));
        let read = node.config().accessors.read.as_ref().expect("reader");
        let keyed = json!({"en": "Hello"});
        assert_eq!(read(&json!({"profile": {"f": keyed.clone()}})).expect("read"), keyed);
    }
}
