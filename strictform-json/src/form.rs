//! [`JsonForm`]: a loaded definition bound to JSON records.

use serde_json::Value;

use strictform_core::{
    definition::FormDefinition,
    error::{AccessorFailure, FieldError},
    field::FieldNode,
    types::FieldName,
};
use strictform_mapper::{CollectionPlan, ReconcileSummary, StrictMapper, VoterSet};

use crate::accessors::build_nodes;
use crate::catalog::Catalog;
use crate::error::SubmissionError;
use crate::fallback::PropertyPathMapper;
use crate::submission::{apply_submission, collect_values};

/// Nodes built from a [`FormDefinition`], plus the mapper that reconciles them.
pub struct JsonForm {
    definition: FormDefinition,
    nodes: Vec<FieldNode<Value>>,
    mapper: StrictMapper<Value, PropertyPathMapper, Catalog>,
}

impl JsonForm {
    pub fn new(definition: FormDefinition, catalog: Catalog) -> Self {
        Self::with_voters(definition, catalog, VoterSet::new())
    }

    pub fn with_voters(
        definition: FormDefinition,
        catalog: Catalog,
        voters: VoterSet<Value>,
    ) -> Self {
        let nodes = build_nodes(&definition);
        let fallback = PropertyPathMapper::from_definition(&definition);
        let mapper = StrictMapper::new(fallback, voters, catalog);
        Self {
            definition,
            nodes,
            mapper,
        }
    }

    pub fn definition(&self) -> &FormDefinition {
        &self.definition
    }

    pub fn nodes(&self) -> &[FieldNode<Value>] {
        &self.nodes
    }

    pub fn mapper(&self) -> &StrictMapper<Value, PropertyPathMapper, Catalog> {
        &self.mapper
    }

    pub fn populate(&mut self, record: &Value) -> ReconcileSummary {
        self.mapper.populate(record, &mut self.nodes)
    }

    /// Bind a submission and clear errors from any previous extract.
    pub fn submit(&mut self, submitted: &Value) -> Result<(), SubmissionError> {
        apply_submission(&mut self.nodes, submitted)?;
        for node in self.nodes.iter_mut() {
            node.clear_errors();
        }
        Ok(())
    }

    pub fn extract(&mut self, record: Option<&mut Value>) -> ReconcileSummary {
        self.mapper.extract(&mut self.nodes, record)
    }

    pub fn plan(&self, record: &Value) -> Vec<(FieldName, Result<CollectionPlan, AccessorFailure>)> {
        self.mapper.plan(&self.nodes, record)
    }

    /// Current node values as a JSON object.
    pub fn values(&self) -> Value {
        collect_values(&self.nodes)
    }

    /// Every attached field error, in declaration order.
    pub fn errors(&self) -> Vec<(&FieldName, &FieldError)> {
        self.nodes
            .iter()
            .flat_map(|node| node.errors().iter().map(move |e| (node.name(), e)))
            .collect()
    }
}
