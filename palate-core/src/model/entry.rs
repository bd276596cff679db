use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::score::Score;
use super::trend::Trend;

/// What kind of item an adaptive entry tracks.
///
/// Supplied explicitly by the caller at record time; the merge never
/// guesses cuisine-ness from the item name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Ingredient,
    Cuisine,
}

/// Per-item online-learned preference, distinct from the user's explicitly
/// stated base preferences. Created on first feedback referencing the item,
/// mutated on every subsequent one, never deleted; stale entries lose
/// influence through the confidence gate, not through removal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptiveEntry {
    pub item: String,
    pub kind: ItemKind,
    pub score: Score,
    pub confidence: Confidence,
    pub update_count: u32,
    pub trend: Trend,
    pub last_updated: DateTime<Utc>,
}

impl AdaptiveEntry {
    /// A fresh entry: neutral score, initial confidence, no history.
    pub fn new(item: impl Into<String>, kind: ItemKind, now: DateTime<Utc>) -> Self {
        Self {
            item: item.into(),
            kind,
            score: Score::NEUTRAL,
            confidence: Confidence::new(Confidence::INITIAL),
            update_count: 0,
            trend: Trend::Stable,
            last_updated: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_entry_is_neutral_and_stable() {
        let e = AdaptiveEntry::new("tomato", ItemKind::Ingredient, Utc::now());
        assert_eq!(e.score.value(), 0.0);
        assert_eq!(e.confidence.value(), 0.1);
        assert_eq!(e.update_count, 0);
        assert_eq!(e.trend, Trend::Stable);
    }
}
