//! Fallback mapping for fields without custom accessors.

use strictform_core::field::FieldNode;

/// Generic mapping strategy for deferred nodes.
///
/// Receives every node the reconcilers did not handle, as one batch per call.
/// Implementations must not fail; they own their error policy.
pub trait FallbackMapper<R> {
    fn populate(&self, record: &R, nodes: &mut [&mut FieldNode<R>]);

    fn extract(&self, nodes: &mut [&mut FieldNode<R>], record: &mut R);
}

/// Leaves deferred nodes and the record untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFallback;

impl<R> FallbackMapper<R> for NoFallback {
    fn populate(&self, _record: &R, nodes: &mut [&mut FieldNode<R>]) {
        if !nodes.is_empty() {
            tracing::debug!(count = nodes.len(), "no fallback mapper; deferred nodes left as-is");
        }
    }

    fn extract(&self, nodes: &mut [&mut FieldNode<R>], _record: &mut R) {
        if !nodes.is_empty() {
            tracing::debug!(count = nodes.len(), "no fallback mapper; deferred nodes not written");
        }
    }
}
