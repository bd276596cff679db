//! RequestClassifier: pure keyword classification of a free-text request
//! into a request kind, domain keywords, constraint flags, and temporal
//! context. Never fails: empty or unmatched input falls back to the
//! default classification.

use chrono::{DateTime, Datelike, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use tracing::debug;

use palate_core::RequestKind;

/// Request-kind vocabularies, checked first-match in declaration order.
/// Narrow phrasings come before broad ones so "how do I ..." is help, not
/// a recipe request.
const KIND_VOCABULARY: &[(RequestKind, &[&str])] = &[
    (
        RequestKind::MealPlanning,
        &["meal plan", "plan my", "weekly", "week of", "for the week", "days of meals"],
    ),
    (
        RequestKind::ShoppingList,
        &["shopping", "grocery", "groceries", "buy", "what do i need"],
    ),
    (
        RequestKind::IngredientSubstitution,
        &["substitute", "instead of", "replace", "don't have", "ran out"],
    ),
    (
        RequestKind::CookingHelp,
        &["how do i", "how to", "technique", "tips", "went wrong", "why did"],
    ),
    (
        RequestKind::DietaryAdvice,
        &["nutrition", "diet advice", "calories", "macros", "is it healthy"],
    ),
    (
        RequestKind::RecipeSuggestion,
        &["recipe", "what should i make", "dinner idea", "something to cook", "suggest"],
    ),
];

const INGREDIENT_VOCABULARY: &[&str] = &[
    "chicken", "beef", "pork", "fish", "salmon", "shrimp", "tofu", "egg", "rice", "pasta",
    "noodle", "potato", "tomato", "onion", "garlic", "cheese", "beans", "lentil", "mushroom",
    "spinach", "broccoli", "peanut", "bread",
];

const CUISINE_VOCABULARY: &[&str] = &[
    "italian", "japanese", "chinese", "mexican", "thai", "indian", "french", "korean",
    "mediterranean", "vietnamese",
];

const COOKING_VERB_VOCABULARY: &[&str] = &[
    "bake", "grill", "fry", "roast", "steam", "boil", "simmer", "stir-fry", "saute", "braise",
];

const TIME_LIMIT_TRIGGERS: &[&str] = &[
    "quick", "fast", "minute", "min", "in a hurry", "weeknight", "easy",
];

const EQUIPMENT_LIMIT_TRIGGERS: &[&str] = &[
    "microwave", "one pan", "one pot", "no oven", "air fryer", "slow cooker", "instant pot",
    "stovetop only",
];

const DIET_FOCUS_TRIGGERS: &[&str] = &[
    "healthy", "low calorie", "low carb", "low fat", "vegetarian", "vegan", "gluten",
    "allergic", "allergy", "light",
];

const SEASONAL_CUES: &[&str] = &["spring", "summer", "autumn", "fall", "winter", "seasonal", "in season"];

/// Independently detected constraint flags; not mutually exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintFlags {
    pub time_limited: bool,
    pub equipment_limited: bool,
    pub diet_focused: bool,
}

impl ConstraintFlags {
    pub fn any(self) -> bool {
        self.time_limited || self.equipment_limited || self.diet_focused
    }
}

/// Calendar season, from fixed 3-month buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    pub fn from_month(month: u32) -> Self {
        match month {
            12 | 1 | 2 => Season::Winter,
            3..=5 => Season::Spring,
            6..=8 => Season::Summer,
            _ => Season::Autumn,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Season::Winter => "winter",
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
        }
    }
}

/// Rough time-of-day bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeOfDay {
    Morning,
    Lunch,
    Afternoon,
    Dinner,
    LateNight,
}

impl TimeOfDay {
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=9 => TimeOfDay::Morning,
            10..=13 => TimeOfDay::Lunch,
            14..=17 => TimeOfDay::Afternoon,
            18..=21 => TimeOfDay::Dinner,
            _ => TimeOfDay::LateNight,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Lunch => "lunch",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Dinner => "dinner",
            TimeOfDay::LateNight => "late night",
        }
    }
}

/// When the request is being made, plus whether it carries a seasonal cue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemporalContext {
    pub season: Season,
    pub time_of_day: TimeOfDay,
    pub weekend: bool,
    pub seasonal_cue: bool,
}

/// Full classifier output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    pub kind: RequestKind,
    pub keywords: Vec<String>,
    pub constraints: ConstraintFlags,
    pub temporal: TemporalContext,
}

/// Classify a request against the current clock.
pub fn classify(request: &str) -> Classification {
    classify_at(request, Utc::now())
}

/// Classify a request at an explicit instant (testable seam).
pub fn classify_at(request: &str, now: DateTime<Utc>) -> Classification {
    let lower = request.to_lowercase();

    let matched = KIND_VOCABULARY
        .iter()
        .find(|(_, patterns)| patterns.iter().any(|p| contains_term(&lower, p)))
        .map(|(kind, _)| *kind);
    if matched.is_none() {
        debug!(request_len = request.len(), "low-confidence classification, using default");
    }
    let kind = matched.unwrap_or_default();

    Classification {
        kind,
        keywords: extract_keywords(&lower),
        constraints: ConstraintFlags {
            time_limited: matches_any(&lower, TIME_LIMIT_TRIGGERS),
            equipment_limited: matches_any(&lower, EQUIPMENT_LIMIT_TRIGGERS),
            diet_focused: matches_any(&lower, DIET_FOCUS_TRIGGERS),
        },
        temporal: TemporalContext {
            season: Season::from_month(now.month()),
            time_of_day: TimeOfDay::from_hour(now.hour()),
            weekend: matches!(now.weekday(), Weekday::Sat | Weekday::Sun),
            seasonal_cue: matches_any(&lower, SEASONAL_CUES),
        },
    }
}

fn matches_any(text: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| contains_term(text, p))
}

/// Substring search constrained to word boundaries, so "fast" never fires
/// inside "breakfast" nor "rice" inside "price". A short inflection tail
/// ("s", "es", "d", "ed") after the term still counts as the same word.
fn contains_term(text: &str, term: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = text[from..].find(term) {
        let begin = from + pos;
        let end = begin + term.len();
        if begins_word(text, begin) && ends_word(text, end) {
            return true;
        }
        from = end;
    }
    false
}

fn begins_word(text: &str, begin: usize) -> bool {
    text[..begin]
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric())
}

fn ends_word(text: &str, end: usize) -> bool {
    let rest = &text[end..];
    let rest = ["es", "ed", "s", "d"]
        .iter()
        .find_map(|tail| rest.strip_prefix(tail))
        .unwrap_or(rest);
    rest.chars().next().map_or(true, |c| !c.is_alphanumeric())
}

/// Deduplicated domain terms found in the request, in first-seen order.
fn extract_keywords(lower: &str) -> Vec<String> {
    let mut keywords = Vec::new();
    for vocabulary in [INGREDIENT_VOCABULARY, CUISINE_VOCABULARY, COOKING_VERB_VOCABULARY] {
        for term in vocabulary {
            if contains_term(lower, term) && !keywords.iter().any(|k| k == term) {
                keywords.push((*term).to_string());
            }
        }
    }
    keywords
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn empty_input_yields_default_classification() {
        let c = classify_at("", at(2024, 7, 1, 12));
        assert_eq!(c.kind, RequestKind::RecipeSuggestion);
        assert!(c.keywords.is_empty());
        assert!(!c.constraints.any());
    }

    #[test]
    fn meal_planning_wins_over_recipe_vocab() {
        let c = classify_at("plan my meals for the week", at(2024, 7, 1, 12));
        assert_eq!(c.kind, RequestKind::MealPlanning);
    }

    #[test]
    fn how_to_is_cooking_help() {
        let c = classify_at("how do I stop my rice going mushy", at(2024, 7, 1, 12));
        assert_eq!(c.kind, RequestKind::CookingHelp);
        assert!(c.keywords.contains(&"rice".to_string()));
    }

    #[test]
    fn substitution_is_detected() {
        let c = classify_at("what can I use instead of butter", at(2024, 7, 1, 12));
        assert_eq!(c.kind, RequestKind::IngredientSubstitution);
    }

    #[test]
    fn constraints_are_independent_flags() {
        let c = classify_at(
            "quick healthy dinner idea, microwave only",
            at(2024, 7, 1, 19),
        );
        assert!(c.constraints.time_limited);
        assert!(c.constraints.equipment_limited);
        assert!(c.constraints.diet_focused);
    }

    #[test]
    fn triggers_respect_word_boundaries() {
        let c = classify_at("breakfast recipe with eggs", at(2024, 7, 1, 8));
        assert!(!c.constraints.time_limited);
        assert!(c.keywords.contains(&"egg".to_string()));

        let c = classify_at("fast weeknight dinner idea", at(2024, 7, 1, 19));
        assert!(c.constraints.time_limited);
    }

    #[test]
    fn keywords_do_not_match_inside_words() {
        let c = classify_at("compare the price of these recipes", at(2024, 7, 1, 12));
        assert!(!c.keywords.contains(&"rice".to_string()));

        let c = classify_at("rice bowl recipe", at(2024, 7, 1, 12));
        assert!(c.keywords.contains(&"rice".to_string()));
    }

    #[test]
    fn inflected_forms_still_match() {
        let c = classify_at("recipe with roasted potatoes", at(2024, 7, 1, 18));
        assert!(c.keywords.contains(&"potato".to_string()));
        assert!(c.keywords.contains(&"roast".to_string()));
    }

    #[test]
    fn keywords_are_deduplicated() {
        let c = classify_at("chicken, more chicken, thai chicken", at(2024, 7, 1, 12));
        assert_eq!(
            c.keywords,
            vec!["chicken".to_string(), "thai".to_string()]
        );
    }

    #[test]
    fn seasons_follow_three_month_buckets() {
        assert_eq!(Season::from_month(12), Season::Winter);
        assert_eq!(Season::from_month(2), Season::Winter);
        assert_eq!(Season::from_month(3), Season::Spring);
        assert_eq!(Season::from_month(8), Season::Summer);
        assert_eq!(Season::from_month(10), Season::Autumn);
    }

    #[test]
    fn temporal_context_tracks_the_clock() {
        // 2024-07-06 is a Saturday.
        let c = classify_at("anything", at(2024, 7, 6, 19));
        assert_eq!(c.temporal.season, Season::Summer);
        assert_eq!(c.temporal.time_of_day, TimeOfDay::Dinner);
        assert!(c.temporal.weekend);
        assert!(!c.temporal.seasonal_cue);
    }

    #[test]
    fn seasonal_cue_is_detected() {
        let c = classify_at("something with seasonal vegetables", at(2024, 7, 1, 12));
        assert!(c.temporal.seasonal_cue);
    }
}
