//! # palate-learning
//!
//! The adaptive preference subsystem: an append-only feedback ledger with
//! online per-item score updates, trend analysis over a recent window, and
//! the confidence-gated merge of learned signal into the base profile.

pub mod ledger;
pub mod merge;
pub mod trends;

pub use ledger::AdaptiveLedger;
pub use merge::merge_preferences;
