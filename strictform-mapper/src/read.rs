//! Record → fields.

use serde_json::Value;

use strictform_core::{error::FailureClass, field::FieldNode};

use crate::fallback::FallbackMapper;
use crate::summary::ReconcileSummary;

/// Populate node values from `record`.
///
/// Nodes with a read accessor get the accessor's result, or `Null` when it
/// fails. All other nodes go to `fallback` as one batch, after the loop.
/// The record is never mutated.
pub fn populate<R, F>(record: &R, nodes: &mut [FieldNode<R>], fallback: &F) -> ReconcileSummary
where
    F: FallbackMapper<R> + ?Sized,
{
    let mut summary = ReconcileSummary::default();
    let mut deferred: Vec<&mut FieldNode<R>> = Vec::new();

    for node in nodes.iter_mut() {
        let Some(reader) = node.config().accessors.read.as_ref() else {
            summary.deferred.push(node.name().clone());
            deferred.push(node);
            continue;
        };
        let outcome = reader(record);

        let value = match outcome {
            Ok(value) => value,
            Err(failure) => {
                tracing::debug!(
                    field = %node.name(),
                    class = ?FailureClass::of_read(&failure),
                    error = %failure,
                    "read accessor failed; field left empty"
                );
                Value::Null
            }
        };
        node.set_data(value);
        summary.handled.push(node.name().clone());
    }

    fallback.populate(record, &mut deferred);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use strictform_core::error::AccessorFailure;

    use crate::fallback::NoFallback;

    struct Rec {
        name: Option<String>,
    }

    #[test]
    fn reader_result_is_assigned() {
        let mut nodes = vec![FieldNode::new("name").read(|r: &Rec| Ok(json!(r.name)))];
        let rec = Rec { name: Some("Ada".into()) };
        populate(&rec, &mut nodes, &NoFallback);
        assert_eq!(nodes[0].data(), &json!("Ada"));
    }

    #[test]
    fn failing_reader_leaves_null_without_error() {
        let mut nodes = vec![FieldNode::new("name")
            .read(|r: &Rec| {
                r.name
                    .clone()
                    .map(Value::String)
                    .ok_or_else(|| AccessorFailure::record("populated name", "none"))
            })
            .write_error_message("errors.name")];
        nodes[0].set_data(json!("stale"));

        let summary = populate(&Rec { name: None }, &mut nodes, &NoFallback);
        assert_eq!(nodes[0].data(), &Value::Null);
        assert!(nodes[0].errors().is_empty());
        assert_eq!(summary.handled.len(), 1);
    }

    #[test]
    fn nodes_without_reader_are_deferred() {
        let mut nodes: Vec<FieldNode<Rec>> = vec![FieldNode::new("a"), FieldNode::new("b")];
        let summary = populate(&Rec { name: None }, &mut nodes, &NoFallback);
        assert!(summary.handled.is_empty());
        assert_eq!(summary.deferred.len(), 2);
    }

    #[test]
    fn every_node_is_handled_or_deferred() {
        let mut nodes = vec![
            FieldNode::new("a"),
            FieldNode::new("name").read(|r: &Rec| Ok(json!(r.name))),
            FieldNode::new("b").update(|_, _: &mut Rec| Ok(())),
        ];
        let summary = populate(&Rec { name: None }, &mut nodes, &NoFallback);
        assert_eq!(summary.handled.len() + summary.deferred.len(), nodes.len());
        assert_eq!(summary.handled[0].0, "name");
    }
}
