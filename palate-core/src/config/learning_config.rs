use serde::{Deserialize, Serialize};

use super::defaults;

/// Adaptive-learning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Cap on the decaying per-update weight `min(cap, 1/(n+1))`.
    pub max_step_weight: f64,
    /// Confidence gained per observation.
    pub confidence_step: f64,
    /// Confidence below which entries are ignored by the merge.
    pub confidence_gate: f64,
    /// Score threshold for promoting an item into the effective liked set.
    pub like_threshold: f64,
    /// Score threshold for the effective disliked set.
    pub dislike_threshold: f64,
    /// Absolute delta above which the trend leaves `Stable`.
    pub trend_threshold: f64,
    /// Propagation weight per rated-recipe ingredient.
    pub ingredient_weight: f64,
    /// Propagation weight for the rated-recipe cuisine.
    pub cuisine_weight: f64,
    /// Score bar for a "recently enjoying" trend line.
    pub trend_score_threshold: f64,
    /// Trend lines added per merge.
    pub max_learned_trends: usize,
    /// Cap on the combined trend list.
    pub max_trend_lines: usize,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            max_step_weight: defaults::MAX_STEP_WEIGHT,
            confidence_step: defaults::CONFIDENCE_STEP,
            confidence_gate: defaults::CONFIDENCE_GATE,
            like_threshold: defaults::LIKE_THRESHOLD,
            dislike_threshold: defaults::DISLIKE_THRESHOLD,
            trend_threshold: defaults::TREND_THRESHOLD,
            ingredient_weight: defaults::INGREDIENT_WEIGHT,
            cuisine_weight: defaults::CUISINE_WEIGHT,
            trend_score_threshold: defaults::TREND_SCORE_THRESHOLD,
            max_learned_trends: defaults::MAX_LEARNED_TRENDS,
            max_trend_lines: defaults::MAX_TREND_LINES,
        }
    }
}
