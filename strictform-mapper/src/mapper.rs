//! [`StrictMapper`]: the two reconciliation entry points with their collaborators.

use serde_json::Value;

use strictform_core::{error::AccessorFailure, field::FieldNode, types::FieldName};

use crate::diff::{CollectionPlan, EqualityPolicy, StrictEquality};
use crate::fallback::FallbackMapper;
use crate::summary::ReconcileSummary;
use crate::translate::Translator;
use crate::voter::VoterSet;
use crate::{read, write};

/// Accessor-driven data mapper.
///
/// Fields with custom accessors are reconciled here; every other field is
/// handed to the fallback mapper `F`. Write failures are rendered through the
/// translator `T`.
pub struct StrictMapper<R, F, T> {
    fallback: F,
    voters: VoterSet<R>,
    translator: T,
    equality: Box<dyn EqualityPolicy<Value>>,
}

impl<R, F, T> StrictMapper<R, F, T>
where
    F: FallbackMapper<R>,
    T: Translator,
{
    pub fn new(fallback: F, voters: VoterSet<R>, translator: T) -> Self {
        Self {
            fallback,
            voters,
            translator,
            equality: Box::new(StrictEquality),
        }
    }

    /// Replace the element equality used when diffing collections.
    pub fn with_equality(mut self, policy: impl EqualityPolicy<Value> + 'static) -> Self {
        self.equality = Box::new(policy);
        self
    }

    /// Record → fields. See [`read::populate`].
    pub fn populate(&self, record: &R, nodes: &mut [FieldNode<R>]) -> ReconcileSummary {
        read::populate(record, nodes, &self.fallback)
    }

    /// Fields → record. See [`write::extract`].
    pub fn extract(&self, nodes: &mut [FieldNode<R>], record: Option<&mut R>) -> ReconcileSummary {
        write::extract(
            nodes,
            record,
            &self.fallback,
            &self.translator,
            self.equality.as_ref(),
        )
    }

    /// Collection add/remove plans against `record`, computed as `extract`
    /// would but without invoking any write accessor.
    pub fn plan(
        &self,
        nodes: &[FieldNode<R>],
        record: &R,
    ) -> Vec<(FieldName, Result<CollectionPlan, AccessorFailure>)> {
        nodes
            .iter()
            .filter_map(|node| {
                write::plan_collection(node, record, self.equality.as_ref())
                    .map(|plan| (node.name().clone(), plan))
            })
            .collect()
    }

    /// Injected voters. Not consulted by `populate` or `extract`.
    pub fn voters(&self) -> &VoterSet<R> {
        &self.voters
    }

    pub fn fallback(&self) -> &F {
        &self.fallback
    }

    pub fn translator(&self) -> &T {
        &self.translator
    }
}
