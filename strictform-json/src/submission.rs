//! Binding submitted JSON to nodes and reading node values back out.

use serde_json::{Map, Value};

use strictform_core::{field::FieldNode, types::type_name};

use crate::error::SubmissionError;

/// Set each node's value from a JSON object keyed by field name.
///
/// Fields absent from the submission are bound to `null`, and an extract
/// writes that `null` like any other submitted value. Keys that match no node
/// are rejected before any node is touched.
pub fn apply_submission<R>(
    nodes: &mut [FieldNode<R>],
    submitted: &Value,
) -> Result<(), SubmissionError> {
    let Value::Object(map) = submitted else {
        return Err(SubmissionError::NotAnObject {
            found: type_name(submitted),
        });
    };

    if let Some(unknown) = map
        .keys()
        .find(|k| !nodes.iter().any(|n| &n.name().0 == *k))
    {
        return Err(SubmissionError::UnknownField {
            field: unknown.clone(),
        });
    }

    for node in nodes.iter_mut() {
        let value = map.get(&node.name().0).cloned().unwrap_or(Value::Null);
        node.set_data(value);
    }
    Ok(())
}

/// Node values as a JSON object, in declaration order.
pub fn collect_values<R>(nodes: &[FieldNode<R>]) -> Value {
    let map: Map<String, Value> = nodes
        .iter()
        .map(|n| (n.name().0.clone(), n.data().clone()))
        .collect();
    Value::Object(map)
}
