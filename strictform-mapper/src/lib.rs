//! # strictform-mapper
//!
//! Accessor-driven reconciliation between field nodes and a record.
//!
//! Call [`StrictMapper::populate`] to fill node values from a record, or
//! [`StrictMapper::extract`] to write submitted values back. Neither call
//! fails: accessor failures are recovered or become field errors.

pub mod diff;
pub mod fallback;
pub mod mapper;
pub mod read;
pub mod summary;
pub mod translate;
pub mod voter;
pub mod write;

pub use diff::{set_diff, CollectionPlan, EqualityPolicy, IdentityEquality, StrictEquality};
pub use fallback::{FallbackMapper, NoFallback};
pub use mapper::StrictMapper;
pub use summary::ReconcileSummary;
pub use translate::{IdentityTranslator, Translator};
pub use voter::{ValueVoter, Vote, VoterSet};
