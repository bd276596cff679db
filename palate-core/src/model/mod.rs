//! Core data model: scores, adaptive entries, feedback events, profiles,
//! merged preference views, and context fragments.

mod confidence;
mod effective;
mod entry;
mod feedback;
mod fragment;
mod profile;
mod report;
mod score;
mod trend;

pub use confidence::Confidence;
pub use effective::EffectivePreferences;
pub use entry::{AdaptiveEntry, ItemKind};
pub use feedback::{
    FeedbackEvent, FeedbackKind, FeedbackPayload, PreferenceSignal, RecipeContext,
};
pub use fragment::{ContextFragment, Priority};
pub use profile::{CuisineRating, Demographics, EquipmentSet, PreferenceProfile, SkillLevel};
pub use report::{LearningSummary, TrendReport};
pub use score::Score;
pub use trend::Trend;
