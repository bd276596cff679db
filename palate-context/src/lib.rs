//! # palate-context
//!
//! The request-to-prompt pipeline: classify the free-text request, collect
//! candidate context fragments from the merged preferences, select a
//! subset under the token budget with a hard floor for critical
//! constraints, and assemble the final text block.

pub mod assemble;
pub mod classify;
pub mod collect;
pub mod select;

pub use assemble::assemble;
pub use classify::{classify, classify_at, Classification, ConstraintFlags, Season, TemporalContext, TimeOfDay};
pub use collect::{ContextCollector, LearningSnapshot};
pub use select::select;
