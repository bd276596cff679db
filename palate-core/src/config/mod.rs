//! Configuration structs with serde defaults.
//!
//! Thresholds that the adaptive scheme treats as tuning choices (flip
//! thresholds, trend threshold, propagation weights, cache TTL) live here
//! rather than as hardcoded constants.

mod context_config;
mod learning_config;

pub use context_config::ContextConfig;
pub use learning_config::LearningConfig;

pub(crate) mod defaults {
    /// Cap on the decaying learning-rate weight `min(cap, 1/(n+1))`.
    pub const MAX_STEP_WEIGHT: f64 = 0.2;
    /// Confidence gained per observation; saturates after ~9 updates.
    pub const CONFIDENCE_STEP: f64 = 0.1;
    /// Entries below this confidence do not influence the merge.
    pub const CONFIDENCE_GATE: f64 = 0.3;
    /// Score above which an adaptive item is treated as newly liked.
    pub const LIKE_THRESHOLD: f64 = 0.5;
    /// Score below which an adaptive item is treated as newly disliked.
    pub const DISLIKE_THRESHOLD: f64 = -0.5;
    /// Absolute score delta above which a trend counts as movement.
    pub const TREND_THRESHOLD: f64 = 0.1;
    /// Propagation weight for each ingredient in a rated recipe.
    pub const INGREDIENT_WEIGHT: f64 = 0.3;
    /// Propagation weight for the rated recipe's cuisine.
    pub const CUISINE_WEIGHT: f64 = 0.5;
    /// Score above which an increasing item becomes a trend line.
    pub const TREND_SCORE_THRESHOLD: f64 = 0.6;
    /// Trend lines added per merge, and the cap on the combined list.
    pub const MAX_LEARNED_TRENDS: usize = 3;
    pub const MAX_TREND_LINES: usize = 10;

    /// Default prompt context budget in tokens.
    pub const MAX_CONTEXT_TOKENS: usize = 8000;
    /// Feedback count past which the learned fragment is promoted to high.
    pub const LEARNED_FRAGMENT_PROMOTE_AFTER: usize = 5;
    /// TTL for the effective-preference cache (seconds).
    pub const PREFERENCE_CACHE_TTL_SECS: u64 = 120;
    /// Window for the learned fragment's trend analysis (days).
    pub const LEARNED_FRAGMENT_WINDOW_DAYS: u32 = 14;
}
