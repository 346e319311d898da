//! Value voters: an injectable per-field decision hook.
//!
//! The mapper carries a [`VoterSet`] and exposes it via
//! [`StrictMapper::voters`](crate::StrictMapper::voters). `populate` and
//! `extract` do not consult it.

use strictform_core::field::FieldNode;

/// A single voter's opinion about reconciling a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vote {
    Abstain,
    Grant,
    Deny,
}

pub trait ValueVoter<R> {
    fn vote(&self, node: &FieldNode<R>, record: &R) -> Vote;
}

impl<R, F> ValueVoter<R> for F
where
    F: Fn(&FieldNode<R>, &R) -> Vote,
{
    fn vote(&self, node: &FieldNode<R>, record: &R) -> Vote {
        self(node, record)
    }
}

/// Ordered collection of voters.
pub struct VoterSet<R> {
    voters: Vec<Box<dyn ValueVoter<R>>>,
}

impl<R> Default for VoterSet<R> {
    fn default() -> Self {
        Self { voters: Vec::new() }
    }
}

impl<R> VoterSet<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, voter: impl ValueVoter<R> + 'static) -> Self {
        self.push(voter);
        self
    }

    pub fn push(&mut self, voter: impl ValueVoter<R> + 'static) {
        self.voters.push(Box::new(voter));
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }

    /// Combined decision: any `Deny` wins, then any `Grant`, else `Abstain`.
    pub fn decide(&self, node: &FieldNode<R>, record: &R) -> Vote {
        let mut decision = Vote::Abstain;
        for voter in &self.voters {
            match voter.vote(node, record) {
                Vote::Deny => return Vote::Deny,
                Vote::Grant => decision = Vote::Grant,
                Vote::Abstain => {}
            }
        }
        decision
    }
}
