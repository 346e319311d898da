//! Outcome of a reconciliation call.

use strictform_core::types::FieldName;

/// Which nodes were handled by accessors and which went to the fallback mapper.
///
/// `handled` and `deferred` partition the input nodes, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub handled: Vec<FieldName>,
    pub deferred: Vec<FieldName>,
    /// Field errors attached during this call.
    pub field_errors: usize,
    /// Handled fields whose write the record rejected. No error is attached
    /// for these; the record is left as the accessor found it.
    pub suppressed: Vec<FieldName>,
}

impl ReconcileSummary {
    pub fn has_errors(&self) -> bool {
        self.field_errors > 0
    }
}
