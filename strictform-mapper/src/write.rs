//! Fields → record.
//!
//! ## Per-field protocol
//!
//! 1. No write accessor → defer to the fallback mapper.
//! 2. Take the node's submitted value.
//! 3. `Update` → one call with the submitted value, no diffing.
//! 4. `Collection` → read the original value (a failing or missing reader
//!    yields the empty collection), then `add` for every entry of
//!    [`CollectionPlan::to_add`] and `remove` for every entry of
//!    [`CollectionPlan::to_remove`].
//! 5. A failure stops the field's remaining calls and is classified:
//!    record-attributable failures attach nothing and are listed in
//!    [`ReconcileSummary::suppressed`]; value-attributable ones become a field
//!    error when the field has a message key.
//! 6. The node is handled, error or not.
//!
//! [`plan_collection`] runs the read and diff of step 4 without writing.

use serde_json::Value;

use strictform_core::{
    error::{AccessorFailure, FailureClass, FieldError},
    field::{FieldConfig, FieldNode, WriteAccess, WriteAccessor},
    types::{collection_entries, type_name, FieldName},
};

use crate::diff::{CollectionPlan, EqualityPolicy};
use crate::fallback::FallbackMapper;
use crate::summary::ReconcileSummary;
use crate::translate::Translator;

/// Write submitted node values into `record`.
///
/// `None` for the record is a no-op: no accessor runs and the fallback mapper
/// is not called.
pub fn extract<R, F, T, P>(
    nodes: &mut [FieldNode<R>],
    record: Option<&mut R>,
    fallback: &F,
    translator: &T,
    policy: &P,
) -> ReconcileSummary
where
    F: FallbackMapper<R> + ?Sized,
    T: Translator + ?Sized,
    P: EqualityPolicy<Value> + ?Sized,
{
    let mut summary = ReconcileSummary::default();
    let Some(record) = record else {
        tracing::debug!("no record to write into; extract skipped");
        return summary;
    };

    let mut deferred: Vec<&mut FieldNode<R>> = Vec::new();
    for node in nodes.iter_mut() {
        let outcome = match &node.config().accessors.write {
            WriteAccess::None => None,
            WriteAccess::Update(update) => {
                tracing::trace!(field = %node.name(), "update");
                Some(update(node.data().clone(), &mut *record))
            }
            WriteAccess::Collection { add, remove } => {
                Some(write_collection(node, (add, remove), &mut *record, policy))
            }
        };
        let Some(outcome) = outcome else {
            summary.deferred.push(node.name().clone());
            deferred.push(node);
            continue;
        };

        if let Err(failure) = outcome {
            match report_failure(node, failure, translator) {
                Reported::Attached => summary.field_errors += 1,
                Reported::Suppressed => summary.suppressed.push(node.name().clone()),
                Reported::Swallowed => {}
            }
        }
        summary.handled.push(node.name().clone());
    }

    fallback.extract(&mut deferred, record);

    if summary.has_errors() {
        tracing::info!(errors = summary.field_errors, "extract attached field errors");
    }
    summary
}

fn write_collection<R, P>(
    node: &FieldNode<R>,
    accessors: (&WriteAccessor<R>, &WriteAccessor<R>),
    record: &mut R,
    policy: &P,
) -> Result<(), AccessorFailure>
where
    P: EqualityPolicy<Value> + ?Sized,
{
    let original = read_original(node.name(), node.config(), record);
    let plan = collection_plan(node.name(), &original, node.data(), policy)?;
    apply_collection(node.name(), plan, accessors, record)
}

fn read_original<R>(name: &FieldName, config: &FieldConfig<R>, record: &R) -> Value {
    let empty = || {
        if config.multiple {
            Value::Array(Vec::new())
        } else {
            Value::Null
        }
    };

    match config.accessors.read.as_ref() {
        Some(reader) => reader(record).unwrap_or_else(|failure| {
            tracing::debug!(
                field = %name,
                class = ?FailureClass::of_read(&failure),
                error = %failure,
                "original value unreadable; treating as empty"
            );
            empty()
        }),
        None => empty(),
    }
}

/// Add/remove plan for a collection field, without touching the record.
///
/// Returns `None` for fields that are not reconciled element by element.
pub fn plan_collection<R, P>(
    node: &FieldNode<R>,
    record: &R,
    policy: &P,
) -> Option<Result<CollectionPlan, AccessorFailure>>
where
    P: EqualityPolicy<Value> + ?Sized,
{
    if !matches!(node.config().accessors.write, WriteAccess::Collection { .. }) {
        return None;
    }
    let original = read_original(node.name(), node.config(), record);
    Some(collection_plan(node.name(), &original, node.data(), policy))
}

fn collection_plan<P>(
    name: &FieldName,
    original: &Value,
    submitted: &Value,
    policy: &P,
) -> Result<CollectionPlan, AccessorFailure>
where
    P: EqualityPolicy<Value> + ?Sized,
{
    let original = collection_entries(original).unwrap_or_else(|| {
        tracing::debug!(
            field = %name,
            found = type_name(original),
            "original value is not a collection; treating as empty"
        );
        Vec::new()
    });
    let submitted = collection_entries(submitted)
        .ok_or_else(|| AccessorFailure::value("array or object", type_name(submitted)))?;

    Ok(CollectionPlan::compute(&original, &submitted, policy))
}

fn apply_collection<R>(
    name: &FieldName,
    plan: CollectionPlan,
    (add, remove): (&WriteAccessor<R>, &WriteAccessor<R>),
    record: &mut R,
) -> Result<(), AccessorFailure> {
    for (key, element) in plan.to_add {
        tracing::trace!(field = %name, %key, "add");
        add(element, &mut *record)?;
    }
    for (key, element) in plan.to_remove {
        tracing::trace!(field = %name, %key, "remove");
        remove(element, &mut *record)?;
    }
    Ok(())
}

/// What [`report_failure`] did with a write failure.
enum Reported {
    /// A translated field error was attached.
    Attached,
    /// The record rejected the call; nothing attached.
    Suppressed,
    /// A value failure on a field without a message key.
    Swallowed,
}

/// Classify a write failure and attach a field error when warranted.
fn report_failure<R, T>(node: &mut FieldNode<R>, failure: AccessorFailure, translator: &T) -> Reported
where
    T: Translator + ?Sized,
{
    if FailureClass::of_write(&failure) == FailureClass::RecordMismatch {
        tracing::warn!(
            field = %node.name(),
            error = %failure,
            "record rejected by accessor; field left unchanged"
        );
        return Reported::Suppressed;
    }

    let Some(key) = node.config().write_error_message.clone() else {
        tracing::debug!(
            field = %node.name(),
            error = %failure,
            "write failed; no error message configured"
        );
        return Reported::Swallowed;
    };

    let message = translator.translate(&key);
    node.add_error(FieldError {
        message,
        cause: failure,
    });
    Reported::Attached
}
