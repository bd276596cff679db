use serde::{Deserialize, Serialize};

use super::profile::{CuisineRating, Demographics, EquipmentSet, PreferenceProfile, SkillLevel};

/// The merged preference view: base profile plus confidence-gated adaptive
/// signal. Recomputed per context build; cacheable with a short TTL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectivePreferences {
    pub demographics: Demographics,
    pub skill_level: SkillLevel,
    pub liked_foods: Vec<String>,
    pub disliked_foods: Vec<String>,
    pub cuisine_ratings: Vec<CuisineRating>,
    pub equipment: EquipmentSet,
    pub health_goals: Vec<String>,
    pub dietary_restrictions: Vec<String>,
    pub recent_trends: Vec<String>,
}

impl From<&PreferenceProfile> for EffectivePreferences {
    /// A view with no adaptive signal applied: the profile as stated.
    fn from(profile: &PreferenceProfile) -> Self {
        Self {
            demographics: profile.demographics.clone(),
            skill_level: profile.skill_level,
            liked_foods: profile.liked_foods.clone(),
            disliked_foods: profile.disliked_foods.clone(),
            cuisine_ratings: profile.cuisine_ratings.clone(),
            equipment: profile.equipment.clone(),
            health_goals: profile.health_goals.clone(),
            dietary_restrictions: profile.dietary_restrictions.clone(),
            recent_trends: profile.recent_trends.clone(),
        }
    }
}
