//! Shared test fixtures: fully-populated sample profiles and recipe
//! contexts used by integration tests across crates.

use palate_core::model::{
    CuisineRating, Demographics, EquipmentSet, PreferenceProfile, RecipeContext, SkillLevel,
};

/// A realistic, fully-populated profile: a peanut allergy as the hard
/// constraint, a few stated likes and dislikes, and two rated cuisines.
pub fn sample_profile() -> PreferenceProfile {
    PreferenceProfile {
        demographics: Demographics {
            age_band: Some("30-39".to_string()),
            household_size: Some(2),
        },
        skill_level: SkillLevel::Intermediate,
        liked_foods: vec!["garlic".to_string(), "mushroom".to_string()],
        disliked_foods: vec!["celery".to_string()],
        cuisine_ratings: vec![
            CuisineRating {
                name: "Italian".to_string(),
                rating: 4,
                note: String::new(),
                learned: false,
            },
            CuisineRating {
                name: "Thai".to_string(),
                rating: 5,
                note: "loves the heat".to_string(),
                learned: false,
            },
        ],
        equipment: EquipmentSet {
            available: vec!["oven".to_string(), "blender".to_string()],
            sometimes: vec!["grill".to_string()],
            unavailable: vec!["deep fryer".to_string()],
        },
        health_goals: vec!["more vegetables".to_string()],
        dietary_restrictions: vec!["peanut allergy".to_string()],
        recent_trends: Vec::new(),
    }
}

/// Profile with only the safety-critical field set. Useful for tight-budget
/// tests where every other fragment should be dropped.
pub fn allergy_only_profile() -> PreferenceProfile {
    PreferenceProfile {
        dietary_restrictions: vec!["peanut allergy".to_string()],
        ..PreferenceProfile::default()
    }
}

/// Generation context for a rated Italian recipe.
pub fn tomato_soup_context() -> RecipeContext {
    RecipeContext {
        ingredients: vec![
            "tomato".to_string(),
            "basil".to_string(),
            "garlic".to_string(),
        ],
        cuisine: Some("Italian".to_string()),
    }
}
