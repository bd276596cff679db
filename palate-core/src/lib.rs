//! # palate-core
//!
//! Foundation crate for the Palate meal-recommendation core.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod model;
pub mod request;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{ContextConfig, LearningConfig};
pub use errors::{PalateError, PalateResult};
pub use model::{
    AdaptiveEntry, Confidence, ContextFragment, EffectivePreferences, FeedbackEvent,
    FeedbackKind, FeedbackPayload, ItemKind, PreferenceProfile, PreferenceSignal, Priority,
    RecipeContext, Score, Trend,
};
pub use request::RequestKind;
