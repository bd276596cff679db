//! ContextElementCollector: turn the classification plus the merged
//! preference view into a candidate list of labeled, sized, prioritized
//! fragments. Selection happens later; this stage only proposes.

use tracing::debug;

use palate_core::{ContextConfig, ContextFragment, EffectivePreferences, Priority, RequestKind};
use palate_tokens::TokenCounter;

use crate::classify::Classification;

/// What the collector needs to know about the ledger, decoupled from the
/// learning crate: the engine fills this from the ledger's trend report.
#[derive(Debug, Clone, Default)]
pub struct LearningSnapshot {
    pub feedback_count: usize,
    pub average_rating: Option<f64>,
    pub recommendations: Vec<String>,
}

/// Cuisines listed in the ranking fragment.
const MAX_RANKED_CUISINES: usize = 5;
/// Health goals listed in the health fragment.
const MAX_HEALTH_GOALS: usize = 3;

/// Collects candidate fragments for one request.
pub struct ContextCollector<'a> {
    tokens: &'a TokenCounter,
    config: &'a ContextConfig,
}

impl<'a> ContextCollector<'a> {
    pub fn new(tokens: &'a TokenCounter, config: &'a ContextConfig) -> Self {
        Self { tokens, config }
    }

    /// Produce the candidate list. Exactly one critical fragment (hard
    /// constraints) is always present; everything else depends on the
    /// request kind and available data.
    pub fn collect(
        &self,
        classification: &Classification,
        prefs: &EffectivePreferences,
        learning: &LearningSnapshot,
    ) -> Vec<ContextFragment> {
        let mut fragments = vec![self.fragment(
            "hard_constraints",
            render_hard_constraints(prefs),
            Priority::Critical,
        )];

        match classification.kind {
            RequestKind::RecipeSuggestion
            | RequestKind::IngredientSubstitution
            | RequestKind::CookingHelp => {
                fragments.push(self.fragment(
                    "cuisine_ranking",
                    render_cuisine_ranking(prefs),
                    Priority::High,
                ));
                fragments.push(self.fragment(
                    "cooking_capabilities",
                    render_cooking_capabilities(prefs),
                    Priority::High,
                ));
                if !prefs.health_goals.is_empty() {
                    fragments.push(self.fragment(
                        "health_considerations",
                        render_health_goals(prefs),
                        Priority::Medium,
                    ));
                }
            }
            RequestKind::MealPlanning => {
                fragments.push(self.fragment(
                    "meal_patterns",
                    render_meal_patterns(prefs),
                    Priority::High,
                ));
                fragments.push(self.fragment(
                    "nutrition_balance",
                    render_nutrition_balance(prefs),
                    Priority::High,
                ));
            }
            RequestKind::ShoppingList => {
                fragments.push(self.fragment(
                    "shopping_patterns",
                    render_shopping_patterns(prefs),
                    Priority::High,
                ));
            }
            RequestKind::DietaryAdvice => {
                fragments.push(self.fragment(
                    "health_considerations",
                    render_health_goals(prefs),
                    Priority::High,
                ));
            }
        }

        if learning.feedback_count > 0 {
            // More data deserves more prominence.
            let priority = if learning.feedback_count > self.config.learned_fragment_promote_after
            {
                Priority::High
            } else {
                Priority::Medium
            };
            fragments.push(self.fragment(
                "learned_preferences",
                render_learned_preferences(prefs, learning),
                priority,
            ));
        }

        fragments.push(self.fragment(
            "basic_profile",
            render_basic_profile(prefs),
            Priority::Medium,
        ));

        if classification.temporal.seasonal_cue {
            fragments.push(self.fragment(
                "seasonal_context",
                render_seasonal_context(classification),
                Priority::Medium,
            ));
        }

        debug!(
            kind = %classification.kind,
            candidates = fragments.len(),
            "context fragments collected"
        );
        fragments
    }

    fn fragment(&self, name: &str, text: String, priority: Priority) -> ContextFragment {
        let estimated_tokens = self.tokens.count_cached(&text);
        ContextFragment::new(name, text, priority, estimated_tokens)
    }
}

fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The one fragment that must survive any budget: allergies, disliked
/// foods, unusable equipment, dietary restrictions.
fn render_hard_constraints(prefs: &EffectivePreferences) -> String {
    let mut sections = vec!["## Hard constraints (must respect)".to_string()];
    if !prefs.disliked_foods.is_empty() {
        sections.push(format!("Never use: {}", prefs.disliked_foods.join(", ")));
    }
    if !prefs.equipment.unavailable.is_empty() {
        sections.push(format!(
            "Unavailable equipment: {}",
            prefs.equipment.unavailable.join(", ")
        ));
    }
    if !prefs.dietary_restrictions.is_empty() {
        sections.push(format!(
            "Dietary restrictions: {}",
            prefs.dietary_restrictions.join(", ")
        ));
    }
    if sections.len() == 1 {
        sections.push("None recorded.".to_string());
    }
    sections.join("\n")
}

fn render_cuisine_ranking(prefs: &EffectivePreferences) -> String {
    let mut ranked = prefs.cuisine_ratings.clone();
    ranked.sort_by(|a, b| b.rating.cmp(&a.rating).then(a.name.cmp(&b.name)));
    let mut sections = vec!["## Cuisine preferences (best first)".to_string()];
    if ranked.is_empty() {
        sections.push("No cuisine ratings yet.".to_string());
    }
    for cuisine in ranked.iter().take(MAX_RANKED_CUISINES) {
        let stars = "*".repeat(usize::from(cuisine.rating));
        let learned = if cuisine.learned { " (learned)" } else { "" };
        sections.push(format!("- {}: {stars}{learned}", cuisine.name));
    }
    sections.join("\n")
}

fn render_cooking_capabilities(prefs: &EffectivePreferences) -> String {
    let mut sections = vec!["## Cooking capabilities".to_string()];
    sections.push(format!("Skill level: {:?}", prefs.skill_level));
    if !prefs.equipment.available.is_empty() {
        sections.push("Available equipment:".to_string());
        sections.push(bullet_list(&prefs.equipment.available));
    }
    if !prefs.equipment.sometimes.is_empty() {
        sections.push(format!(
            "Occasionally available: {}",
            prefs.equipment.sometimes.join(", ")
        ));
    }
    sections.join("\n")
}

fn render_health_goals(prefs: &EffectivePreferences) -> String {
    let mut sections = vec!["## Health goals".to_string()];
    if prefs.health_goals.is_empty() {
        sections.push("No stated goals.".to_string());
    } else {
        for goal in prefs.health_goals.iter().take(MAX_HEALTH_GOALS) {
            sections.push(format!("- {goal}"));
        }
    }
    sections.join("\n")
}

fn render_meal_patterns(prefs: &EffectivePreferences) -> String {
    let mut sections = vec!["## Meal patterns".to_string()];
    if let Some(size) = prefs.demographics.household_size {
        sections.push(format!("Cooking for a household of {size}."));
    }
    if !prefs.liked_foods.is_empty() {
        sections.push(format!("Staples to build around: {}", prefs.liked_foods.join(", ")));
    }
    if !prefs.recent_trends.is_empty() {
        sections.push("Recent direction:".to_string());
        sections.push(bullet_list(&prefs.recent_trends));
    }
    sections.join("\n")
}

fn render_nutrition_balance(prefs: &EffectivePreferences) -> String {
    let mut sections = vec!["## Nutrition balance".to_string()];
    if prefs.health_goals.is_empty() {
        sections.push("Aim for general balance across the plan.".to_string());
    } else {
        sections.push(format!(
            "Balance the plan around: {}",
            prefs.health_goals.join(", ")
        ));
    }
    sections.join("\n")
}

fn render_shopping_patterns(prefs: &EffectivePreferences) -> String {
    let mut sections = vec!["## Shopping patterns".to_string()];
    if prefs.liked_foods.is_empty() {
        sections.push("No purchase history yet.".to_string());
    } else {
        sections.push(format!("Frequently used: {}", prefs.liked_foods.join(", ")));
    }
    sections.join("\n")
}

fn render_learned_preferences(prefs: &EffectivePreferences, learning: &LearningSnapshot) -> String {
    let mut sections = vec!["## Learned preferences".to_string()];
    sections.push(format!("Feedback events: {}", learning.feedback_count));
    if let Some(avg) = learning.average_rating {
        sections.push(format!("Recent average rating: {avg:.1}/5"));
    }
    if !learning.recommendations.is_empty() {
        sections.push(bullet_list(&learning.recommendations));
    }
    let learned_trends: Vec<String> = prefs
        .recent_trends
        .iter()
        .filter(|t| t.starts_with("recently enjoying"))
        .cloned()
        .collect();
    if !learned_trends.is_empty() {
        sections.push(bullet_list(&learned_trends));
    }
    sections.join("\n")
}

fn render_basic_profile(prefs: &EffectivePreferences) -> String {
    let mut sections = vec!["## Profile".to_string()];
    let mut line = Vec::new();
    if let Some(age_band) = &prefs.demographics.age_band {
        line.push(format!("age {age_band}"));
    }
    if let Some(size) = prefs.demographics.household_size {
        line.push(format!("household of {size}"));
    }
    if line.is_empty() {
        sections.push("No demographic details recorded.".to_string());
    } else {
        sections.push(line.join(", "));
    }
    sections.join("\n")
}

fn render_seasonal_context(classification: &Classification) -> String {
    format!(
        "## Season and timing\nSeason: {}\nTime of day: {}{}",
        classification.temporal.season.label(),
        classification.temporal.time_of_day.label(),
        if classification.temporal.weekend {
            "\nIt is the weekend."
        } else {
            ""
        }
    )
}
