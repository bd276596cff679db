//! PreferenceMerger: overlay confidence-gated adaptive signal onto the
//! declarative base profile. Pure function of its inputs; callers may
//! cache the result with a short TTL as long as writes invalidate it.

use std::collections::HashMap;

use tracing::debug;

use palate_core::model::CuisineRating;
use palate_core::{
    AdaptiveEntry, EffectivePreferences, ItemKind, LearningConfig, PreferenceProfile, Trend,
};

/// Prefix marking trend lines synthesized by the merge. Synthetic lines are
/// the first dropped when the combined list overflows.
const LEARNED_TREND_PREFIX: &str = "recently enjoying: ";

/// Merge the base profile with the adaptive entries.
///
/// Only entries at or above the confidence gate participate. A stated
/// dislike is never flipped into the liked set by adaptive signal alone,
/// and scores between the like and dislike thresholds change nothing.
pub fn merge_preferences(
    profile: &PreferenceProfile,
    entries: &HashMap<String, AdaptiveEntry>,
    config: &LearningConfig,
) -> EffectivePreferences {
    let mut effective = EffectivePreferences::from(profile);
    if entries.is_empty() {
        return effective;
    }

    // Deterministic order: entry maps have none of their own.
    let mut sorted: Vec<&AdaptiveEntry> = entries.values().collect();
    sorted.sort_unstable_by(|a, b| a.item.cmp(&b.item));

    for entry in &sorted {
        if !entry.confidence.passes_gate(config.confidence_gate) {
            continue;
        }
        let score = entry.score.value();

        if score > config.like_threshold {
            if !contains_item(&effective.disliked_foods, &entry.item)
                && !contains_item(&effective.liked_foods, &entry.item)
            {
                effective.liked_foods.push(entry.item.clone());
            }
        } else if score < config.dislike_threshold
            && !contains_item(&effective.disliked_foods, &entry.item)
        {
            effective.disliked_foods.push(entry.item.clone());
        }

        if entry.kind == ItemKind::Cuisine {
            apply_cuisine_rating(&mut effective.cuisine_ratings, entry);
        }
    }

    apply_trend_lines(&mut effective.recent_trends, &sorted, config);

    debug!(
        adaptive_entries = entries.len(),
        liked = effective.liked_foods.len(),
        disliked = effective.disliked_foods.len(),
        cuisines = effective.cuisine_ratings.len(),
        "preferences merged"
    );
    effective
}

fn contains_item(list: &[String], item: &str) -> bool {
    list.iter().any(|i| i.eq_ignore_ascii_case(item))
}

/// Map the learned score back to a 1..=5 rating: update an existing cuisine
/// by name, or append a synthetic entry annotated as learned.
fn apply_cuisine_rating(ratings: &mut Vec<CuisineRating>, entry: &AdaptiveEntry) {
    let rating = entry.score.to_rating();
    match ratings
        .iter_mut()
        .find(|c| c.name.eq_ignore_ascii_case(&entry.item))
    {
        Some(existing) => existing.rating = rating,
        None => ratings.push(CuisineRating {
            name: entry.item.clone(),
            rating,
            note: "learned from feedback".to_string(),
            learned: true,
        }),
    }
}

/// Add "recently enjoying" lines for items with strong, still-rising scores
/// and at least two observations. Additions are capped, and the combined
/// list is capped with synthetic lines dropped first (oldest first).
fn apply_trend_lines(trends: &mut Vec<String>, sorted: &[&AdaptiveEntry], config: &LearningConfig) {
    let mut added = 0;
    for entry in sorted {
        if added >= config.max_learned_trends {
            break;
        }
        let rising = entry.score.value() > config.trend_score_threshold
            && entry.trend == Trend::Increasing
            && entry.update_count >= 2;
        if !rising {
            continue;
        }
        let line = format!("{LEARNED_TREND_PREFIX}{}", entry.item);
        if !trends.contains(&line) {
            trends.push(line);
            added += 1;
        }
    }

    while trends.len() > config.max_trend_lines {
        match trends.iter().position(|t| t.starts_with(LEARNED_TREND_PREFIX)) {
            Some(idx) => {
                trends.remove(idx);
            }
            None => {
                trends.truncate(config.max_trend_lines);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use palate_core::{Confidence, Score};

    fn entry(item: &str, kind: ItemKind, score: f64, confidence: f64) -> AdaptiveEntry {
        AdaptiveEntry {
            item: item.to_string(),
            kind,
            score: Score::new(score),
            confidence: Confidence::new(confidence),
            update_count: 3,
            trend: Trend::Stable,
            last_updated: Utc::now(),
        }
    }

    fn entries(list: Vec<AdaptiveEntry>) -> HashMap<String, AdaptiveEntry> {
        list.into_iter().map(|e| (e.item.clone(), e)).collect()
    }

    #[test]
    fn strong_positive_signal_becomes_liked() {
        let profile = PreferenceProfile::default();
        let map = entries(vec![entry("salmon", ItemKind::Ingredient, 0.7, 0.6)]);
        let eff = merge_preferences(&profile, &map, &LearningConfig::default());
        assert_eq!(eff.liked_foods, vec!["salmon"]);
        assert!(eff.disliked_foods.is_empty());
    }

    #[test]
    fn low_confidence_signal_is_ignored() {
        let profile = PreferenceProfile::default();
        let map = entries(vec![entry("salmon", ItemKind::Ingredient, 0.9, 0.2)]);
        let eff = merge_preferences(&profile, &map, &LearningConfig::default());
        assert!(eff.liked_foods.is_empty());
    }

    #[test]
    fn stated_dislike_is_not_overridden() {
        let profile = PreferenceProfile {
            disliked_foods: vec!["salmon".to_string()],
            ..Default::default()
        };
        let map = entries(vec![entry("Salmon", ItemKind::Ingredient, 0.9, 0.9)]);
        let eff = merge_preferences(&profile, &map, &LearningConfig::default());
        assert!(eff.liked_foods.is_empty());
        assert_eq!(eff.disliked_foods, vec!["salmon"]);
    }

    #[test]
    fn strong_negative_signal_becomes_disliked() {
        let profile = PreferenceProfile::default();
        let map = entries(vec![entry("cilantro", ItemKind::Ingredient, -0.6, 0.5)]);
        let eff = merge_preferences(&profile, &map, &LearningConfig::default());
        assert_eq!(eff.disliked_foods, vec!["cilantro"]);
    }

    #[test]
    fn learned_cuisine_appends_a_synthetic_rating() {
        let profile = PreferenceProfile::default();
        let map = entries(vec![entry("Thai", ItemKind::Cuisine, 0.8, 0.6)]);
        let eff = merge_preferences(&profile, &map, &LearningConfig::default());
        let thai = &eff.cuisine_ratings[0];
        assert_eq!(thai.name, "Thai");
        // round(clamp((0.8 + 1) * 2.5, 1, 5)) = round(4.5) = 5.
        assert_eq!(thai.rating, 5);
        assert!(thai.learned);
    }

    #[test]
    fn learned_cuisine_updates_existing_rating_in_place() {
        let profile = PreferenceProfile {
            cuisine_ratings: vec![CuisineRating {
                name: "Thai".to_string(),
                rating: 2,
                note: String::new(),
                learned: false,
            }],
            ..Default::default()
        };
        let map = entries(vec![entry("thai", ItemKind::Cuisine, 0.0, 0.6)]);
        let eff = merge_preferences(&profile, &map, &LearningConfig::default());
        assert_eq!(eff.cuisine_ratings.len(), 1);
        assert_eq!(eff.cuisine_ratings[0].rating, 3);
        assert!(!eff.cuisine_ratings[0].learned);
    }

    #[test]
    fn rising_favorites_become_trend_lines_capped_at_three() {
        let profile = PreferenceProfile::default();
        let mut list = Vec::new();
        for name in ["a", "b", "c", "d", "e"] {
            let mut e = entry(name, ItemKind::Ingredient, 0.1, 0.9);
            e.trend = Trend::Increasing;
            e.score = Score::new(0.7);
            list.push(e);
        }
        let eff = merge_preferences(&profile, &entries(list), &LearningConfig::default());
        let learned: Vec<_> = eff
            .recent_trends
            .iter()
            .filter(|t| t.starts_with(LEARNED_TREND_PREFIX))
            .collect();
        assert_eq!(learned.len(), 3);
    }

    #[test]
    fn overflowing_trend_list_drops_synthetic_lines_first() {
        let profile = PreferenceProfile {
            recent_trends: (0..9).map(|i| format!("stated trend {i}")).collect(),
            ..Default::default()
        };
        let mut list = Vec::new();
        for name in ["a", "b", "c"] {
            let mut e = entry(name, ItemKind::Ingredient, 0.7, 0.9);
            e.trend = Trend::Increasing;
            list.push(e);
        }
        let eff = merge_preferences(&profile, &entries(list), &LearningConfig::default());
        assert_eq!(eff.recent_trends.len(), 10);
        // All nine stated lines survive; only one synthetic line fits.
        assert_eq!(
            eff.recent_trends
                .iter()
                .filter(|t| t.starts_with("stated"))
                .count(),
            9
        );
    }

    #[test]
    fn empty_entries_return_the_profile_unchanged() {
        let profile = PreferenceProfile {
            liked_foods: vec!["rice".to_string()],
            ..Default::default()
        };
        let eff = merge_preferences(&profile, &HashMap::new(), &LearningConfig::default());
        assert_eq!(eff.liked_foods, vec!["rice"]);
    }
}
