//! Keyed set-difference used to drive add/remove accessors.
//!
//! [`set_diff`] is one-directional: "what in `submitted` is not accounted for
//! in `original`". The write reconciler calls it twice, once per direction.

use std::rc::Rc;

use serde_json::Value;

use strictform_core::types::{Collection, Key};

// ---------------------------------------------------------------------------
// Equality policies
// ---------------------------------------------------------------------------

/// Decides whether two collection elements are the same element.
pub trait EqualityPolicy<T: ?Sized> {
    fn equal(&self, a: &T, b: &T) -> bool;
}

/// Same type and same value, no coercion.
///
/// For JSON values `1`, `1.0`, `"1"` and `true` are pairwise distinct.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictEquality;

impl<T: PartialEq + ?Sized> EqualityPolicy<T> for StrictEquality {
    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Pointer identity: two handles are equal only if they share an allocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityEquality;

impl<T: ?Sized> EqualityPolicy<Rc<T>> for IdentityEquality {
    fn equal(&self, a: &Rc<T>, b: &Rc<T>) -> bool {
        Rc::ptr_eq(a, b)
    }
}

// ---------------------------------------------------------------------------
// set_diff
// ---------------------------------------------------------------------------

/// Entries of `submitted` that are extra relative to `original`.
///
/// An entry is kept unless its value is found in `original` at the same key.
/// The first matching original entry wins. Results keep submitted order and
/// submitted keys. `original` is materialised before the scan, so any
/// iterator works. O(n·m).
pub fn set_diff<K, T, P, I>(original: I, submitted: &[(K, T)], policy: &P) -> Vec<(K, T)>
where
    K: PartialEq + Clone,
    T: Clone,
    P: EqualityPolicy<T> + ?Sized,
    I: IntoIterator<Item = (K, T)>,
{
    let original: Vec<(K, T)> = original.into_iter().collect();

    submitted
        .iter()
        .filter(|(key, value)| {
            let matched = original
                .iter()
                .find(|(_, candidate)| policy.equal(candidate, value))
                .map(|(found, _)| found);
            let unchanged = match matched {
                Some(found) if found == key => submitted
                    .iter()
                    .find(|(k, _)| k == found)
                    .is_some_and(|(_, at_key)| policy.equal(at_key, value)),
                _ => false,
            };
            !unchanged
        })
        .cloned()
        .collect()
}

// ---------------------------------------------------------------------------
// CollectionPlan
// ---------------------------------------------------------------------------

/// Add/remove calls needed to turn `original` into `submitted`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CollectionPlan {
    /// Submitted entries not matched in the original, keyed by submitted key.
    pub to_add: Collection,
    /// Original entries not matched in the submission, keyed by original key.
    pub to_remove: Collection,
}

impl CollectionPlan {
    pub fn compute<P>(original: &[(Key, Value)], submitted: &[(Key, Value)], policy: &P) -> Self
    where
        P: EqualityPolicy<Value> + ?Sized,
    {
        Self {
            to_add: set_diff(original.iter().cloned(), submitted, policy),
            to_remove: set_diff(submitted.iter().cloned(), original, policy),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.to_add.is_empty() && self.to_remove.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
