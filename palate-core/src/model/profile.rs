use serde::{Deserialize, Serialize};

/// Self-reported cooking skill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    Novice,
    Intermediate,
    Advanced,
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::Novice
    }
}

/// Coarse demographic attributes used for the basic-profile fragment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Demographics {
    pub age_band: Option<String>,
    pub household_size: Option<u8>,
}

/// A rated cuisine. `learned` marks entries synthesized by the merge from
/// adaptive signal rather than stated by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuisineRating {
    pub name: String,
    /// 1..=5, 5 is best.
    pub rating: u8,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub learned: bool,
}

/// Cooking equipment grouped by availability.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EquipmentSet {
    pub available: Vec<String>,
    pub sometimes: Vec<String>,
    pub unavailable: Vec<String>,
}

/// The user's declarative preference record. Immutable per load; learned
/// signal overlays it through the merge, never edits it in place.
///
/// `Default` is the documented empty profile used when storage has no
/// record: no foods, no ratings, novice skill.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceProfile {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_empty_novice() {
        let p = PreferenceProfile::default();
        assert!(p.disliked_foods.is_empty());
        assert!(p.cuisine_ratings.is_empty());
        assert_eq!(p.skill_level, SkillLevel::Novice);
    }

    #[test]
    fn deserializes_partial_record() {
        let p: PreferenceProfile =
            serde_json::from_str(r#"{"disliked_foods": ["celery"]}"#).unwrap();
        assert_eq!(p.disliked_foods, vec!["celery"]);
        assert!(p.health_goals.is_empty());
    }
}
