//! # strictform-json
//!
//! Binds form definitions to `serde_json::Value` records: path accessors, a
//! property-path fallback mapper, YAML message catalogs, and submission
//! helpers. [`JsonForm`] ties them to a [`strictform_mapper::StrictMapper`].

pub mod accessors;
pub mod catalog;
pub mod error;
pub mod fallback;
pub mod form;
pub mod path;
pub mod submission;

pub use accessors::{build_node, build_nodes};
pub use catalog::Catalog;
pub use error::{CatalogError, SubmissionError};
pub use fallback::PropertyPathMapper;
pub use form::JsonForm;
pub use submission::{apply_submission, collect_values};
