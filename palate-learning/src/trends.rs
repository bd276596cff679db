//! Trend analysis over a recent feedback window: rating statistics,
//! preference stability, and learned recommendations.

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use palate_core::model::TrendReport;
use palate_core::{FeedbackPayload, Trend};

use crate::ledger::AdaptiveLedger;

/// Items suggested in the "lean on favorites" recommendation.
const MAX_FAVORITE_SUGGESTIONS: usize = 3;
/// Long-stable entry counts past these bars trigger the variety nudge.
const SETTLED_UPDATE_COUNT: u32 = 5;
const SETTLED_ENTRY_COUNT: usize = 10;

/// Analyze the ledger over the trailing `window_days`.
///
/// An empty ledger reports stability 1.0 and no recommendations; this path
/// never fails.
pub fn analyze(ledger: &AdaptiveLedger, window_days: u32, now: DateTime<Utc>) -> TrendReport {
    let cutoff = now - Duration::days(i64::from(window_days));
    let recent: Vec<_> = ledger
        .events()
        .iter()
        .filter(|e| e.timestamp > cutoff)
        .collect();

    let mut distribution = [0usize; 5];
    let mut rating_sum = 0u32;
    let mut rating_count = 0usize;
    for event in &recent {
        if let FeedbackPayload::RecipeRating { rating, .. } = &event.payload {
            // Stored events may predate validation; skip anything off-scale.
            if let Some(slot) = usize::from(*rating)
                .checked_sub(1)
                .and_then(|i| distribution.get_mut(i))
            {
                *slot += 1;
                rating_sum += u32::from(*rating);
                rating_count += 1;
            }
        }
    }
    let average_rating = (rating_count > 0).then(|| f64::from(rating_sum) / rating_count as f64);

    let report = TrendReport {
        window_days,
        feedback_count: recent.len(),
        average_rating,
        rating_distribution: distribution,
        stability_score: ledger.stability(),
        recommendations: recommendations(ledger),
    };
    debug!(
        window_days,
        feedback_count = report.feedback_count,
        stability = report.stability_score,
        "trend analysis complete"
    );
    report
}

/// Learned recommendations: highlight confident favorites, and nudge
/// toward variety once most of the palate has settled.
fn recommendations(ledger: &AdaptiveLedger) -> Vec<String> {
    let mut recommendations = Vec::new();

    let mut favorites: Vec<&str> = ledger
        .entries()
        .values()
        .filter(|e| e.score.value() > 0.5 && e.confidence.value() > 0.5)
        .map(|e| e.item.as_str())
        .collect();
    favorites.sort_unstable();
    if !favorites.is_empty() {
        favorites.truncate(MAX_FAVORITE_SUGGESTIONS);
        recommendations.push(format!("Lean on well-rated items: {}", favorites.join(", ")));
    }

    let settled = ledger
        .entries()
        .values()
        .filter(|e| e.trend == Trend::Stable && e.update_count > SETTLED_UPDATE_COUNT)
        .count();
    if settled > SETTLED_ENTRY_COUNT {
        recommendations.push("Preferences look settled; consider trying a new cuisine".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use palate_core::{ItemKind, LearningConfig, RecipeContext};

    #[test]
    fn empty_ledger_is_maximally_stable() {
        let ledger = AdaptiveLedger::new(LearningConfig::default());
        let report = analyze(&ledger, 30, Utc::now());
        assert_eq!(report.stability_score, 1.0);
        assert_eq!(report.feedback_count, 0);
        assert!(report.average_rating.is_none());
        assert!(report.recommendations.is_empty());
        assert_eq!(report.rating_distribution, [0; 5]);
    }

    #[test]
    fn ratings_land_in_the_distribution() {
        let mut ledger = AdaptiveLedger::new(LearningConfig::default());
        ledger
            .record_recipe_rating("A", 5, "", RecipeContext::default())
            .unwrap();
        ledger
            .record_recipe_rating("B", 5, "", RecipeContext::default())
            .unwrap();
        ledger
            .record_recipe_rating("C", 2, "", RecipeContext::default())
            .unwrap();

        let report = analyze(&ledger, 30, Utc::now());
        assert_eq!(report.feedback_count, 3);
        assert_eq!(report.rating_distribution, [0, 1, 0, 0, 2]);
        assert_eq!(report.average_rating, Some(4.0));
    }

    #[test]
    fn old_events_fall_outside_the_window() {
        let mut ledger = AdaptiveLedger::new(LearningConfig::default());
        ledger
            .record_recipe_rating("A", 4, "", RecipeContext::default())
            .unwrap();
        // Analyze "two months from now": nothing is recent.
        let later = Utc::now() + Duration::days(60);
        let report = analyze(&ledger, 30, later);
        assert_eq!(report.feedback_count, 0);
        assert!(report.average_rating.is_none());
    }

    #[test]
    fn confident_favorites_are_recommended() {
        let mut ledger = AdaptiveLedger::new(LearningConfig::default());
        // Enough positive signal to cross score 0.5 and confidence 0.5.
        for _ in 0..6 {
            ledger
                .update_item_score("salmon", ItemKind::Ingredient, 1.0, "test")
                .unwrap();
        }
        let report = analyze(&ledger, 30, Utc::now());
        assert!(report.recommendations.iter().any(|r| r.contains("salmon")));
    }
}
