//! strictform core library: field nodes, the accessor contract, and form definitions.
//!
//! Public API surface:
//! - [`types`]: newtypes, collection keys and value kinds
//! - [`error`]: [`AccessorFailure`], [`FieldError`], [`DefinitionError`]
//! - [`field`]: [`FieldNode`] and its accessor configuration
//! - [`definition`]: YAML form definitions: load / validate

pub mod definition;
pub mod error;
pub mod field;
pub mod types;

pub use definition::{AccessMode, FieldSpec, FormDefinition};
pub use error::{AccessorFailure, ArgumentPosition, DefinitionError, FailureClass, FieldError};
pub use field::{Accessors, FieldConfig, FieldNode, ReadAccessor, WriteAccess, WriteAccessor};
pub use types::{Collection, FieldName, Key, MessageKey, ValueKind};
