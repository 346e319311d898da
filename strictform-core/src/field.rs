//! Field nodes and their accessor configuration.
//!
//! A field's behaviour is a *configuration* of one node type: an optional
//! read accessor plus a [`WriteAccess`] tag. The reconcilers branch on which
//! capabilities are present.

use std::fmt;

use serde_json::Value;

use crate::error::{AccessorFailure, FieldError};
use crate::types::{FieldName, MessageKey};

/// Reads a field's current value from the record.
pub type ReadAccessor<R> = Box<dyn Fn(&R) -> Result<Value, AccessorFailure>>;

/// Writes a value (or a single collection element) into the record.
pub type WriteAccessor<R> = Box<dyn Fn(Value, &mut R) -> Result<(), AccessorFailure>>;

/// Write capability of a field.
pub enum WriteAccess<R> {
    /// No custom writer; the fallback mapper handles the field.
    None,
    /// Replace the whole value with one call.
    Update(WriteAccessor<R>),
    /// Reconcile a collection element by element.
    Collection {
        add: WriteAccessor<R>,
        remove: WriteAccessor<R>,
    },
}

impl<R> WriteAccess<R> {
    fn label(&self) -> &'static str {
        match self {
            WriteAccess::None => "none",
            WriteAccess::Update(_) => "update",
            WriteAccess::Collection { .. } => "collection",
        }
    }
}

/// The accessor set declared for a field.
pub struct Accessors<R> {
    pub read: Option<ReadAccessor<R>>,
    pub write: WriteAccess<R>,
}

impl<R> Default for Accessors<R> {
    fn default() -> Self {
        Self {
            read: None,
            write: WriteAccess::None,
        }
    }
}

impl<R> Accessors<R> {
    pub fn has_read(&self) -> bool {
        self.read.is_some()
    }

    pub fn is_writable(&self) -> bool {
        !matches!(self.write, WriteAccess::None)
    }
}

/// Per-field configuration supplied by the form-definition layer.
pub struct FieldConfig<R> {
    pub accessors: Accessors<R>,
    /// Collection-valued field.
    pub multiple: bool,
    /// Message attached as a field error when a write fails on the value.
    pub write_error_message: Option<MessageKey>,
}

impl<R> Default for FieldConfig<R> {
    fn default() -> Self {
        Self {
            accessors: Accessors::default(),
            multiple: false,
            write_error_message: None,
        }
    }
}

/// A single bindable unit of a form.
pub struct FieldNode<R> {
    name: FieldName,
    config: FieldConfig<R>,
    data: Value,
    errors: Vec<FieldError>,
}

impl<R> FieldNode<R> {
    /// A node with no accessors and an empty value.
    pub fn new(name: impl Into<FieldName>) -> Self {
        Self {
            name: name.into(),
            config: FieldConfig::default(),
            data: Value::Null,
            errors: Vec::new(),
        }
    }

    pub fn with_config(name: impl Into<FieldName>, config: FieldConfig<R>) -> Self {
        Self {
            config,
            ..Self::new(name)
        }
    }

    pub fn read<F>(mut self, reader: F) -> Self
    where
        F: Fn(&R) -> Result<Value, AccessorFailure> + 'static,
    {
        self.config.accessors.read = Some(Box::new(reader));
        self
    }

    pub fn update<F>(mut self, updater: F) -> Self
    where
        F: Fn(Value, &mut R) -> Result<(), AccessorFailure> + 'static,
    {
        self.config.accessors.write = WriteAccess::Update(Box::new(updater));
        self
    }

    /// Declare add/remove accessors; also marks the field as multiple.
    pub fn collection<A, D>(mut self, adder: A, remover: D) -> Self
    where
        A: Fn(Value, &mut R) -> Result<(), AccessorFailure> + 'static,
        D: Fn(Value, &mut R) -> Result<(), AccessorFailure> + 'static,
    {
        self.config.accessors.write = WriteAccess::Collection {
            add: Box::new(adder),
            remove: Box::new(remover),
        };
        self.config.multiple = true;
        self
    }

    pub fn multiple(mut self, multiple: bool) -> Self {
        self.config.multiple = multiple;
        self
    }

    pub fn write_error_message(mut self, key: impl Into<MessageKey>) -> Self {
        self.config.write_error_message = Some(key.into());
        self
    }

    pub fn name(&self) -> &FieldName {
        &self.name
    }

    pub fn config(&self) -> &FieldConfig<R> {
        &self.config
    }

    /// Current bound value (populated or submitted).
    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn set_data(&mut self, data: Value) {
        self.data = data;
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn add_error(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }
}

impl<R> fmt::Debug for FieldNode<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldNode")
            .field("name", &self.name)
            .field("read", &self.config.accessors.has_read())
            .field("write", &self.config.accessors.write.label())
            .field("multiple", &self.config.multiple)
            .field("write_error_message", &self.config.write_error_message)
            .field("data", &self.data)
            .field("errors", &self.errors)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Rec {
        n: i64,
    }

    #[test]
    fn new_node_has_no_accessors() {
        let node: FieldNode<Rec> = FieldNode::new("n");
        assert!(!node.config().accessors.has_read());
        assert!(!node.config().accessors.is_writable());
        assert_eq!(node.data(), &Value::Null);
    }

    #[test]
    fn collection_marks_field_multiple() {
        let node: FieldNode<Rec> = FieldNode::new("tags").collection(|_, _| Ok(()), |_, _| Ok(()));
        assert!(node.config().multiple);
        assert!(node.config().accessors.is_writable());
    }

    #[test]
    fn accessors_are_invocable() {
        let node = FieldNode::new("n")
            .read(|r: &Rec| Ok(json!(r.n)))
            .update(|v, r: &mut Rec| {
                r.n = v.as_i64().ok_or_else(|| AccessorFailure::value("integer", "other"))?;
                Ok(())
            });
        let mut rec = Rec { n: 1 };
        let read = node.config().accessors.read.as_ref().expect("reader");
        assert_eq!(read(&rec).expect("read"), json!(1));
        match &node.config().accessors.write {
            WriteAccess::Update(update) => update(json!(5), &mut rec).expect("update"),
            _ => panic!("expected update accessor"),
        }
        assert_eq!(rec.n, 5);
    }

    #[test]
    fn debug_output_names_write_capability() {
        let node: FieldNode<Rec> = FieldNode::new("n").update(|_, _| Ok(()));
        let dbg = format!("{node:?}");
        assert!(dbg.contains("\"update\""), "got: {dbg}");
    }
}
