use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::confidence::Confidence;

/// The kind of feedback event. Mirrors the payload variants so storage can
/// filter without deserializing payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    RecipeRating,
    IngredientPreference,
    CuisinePreference,
    Interaction,
}

/// Explicit like/neutral/dislike signal for a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreferenceSignal {
    Like,
    Neutral,
    Dislike,
}

impl PreferenceSignal {
    /// Score delta contributed by this signal.
    pub fn score(self) -> f64 {
        match self {
            PreferenceSignal::Like => 0.8,
            PreferenceSignal::Neutral => 0.0,
            PreferenceSignal::Dislike => -0.8,
        }
    }
}

/// Typed feedback payload: per-kind struct, serialized as a tagged enum
/// so the kind survives round-trips through storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
#[serde(rename_all = "snake_case")]
pub enum FeedbackPayload {
    RecipeRating {
        recipe_name: String,
        rating: u8,
        comments: String,
    },
    IngredientPreference {
        ingredient: String,
        signal: PreferenceSignal,
        reason: String,
    },
    CuisinePreference {
        cuisine: String,
        signal: PreferenceSignal,
        reason: String,
    },
    Interaction {
        interaction: String,
        details: String,
    },
}

impl FeedbackPayload {
    pub fn kind(&self) -> FeedbackKind {
        match self {
            FeedbackPayload::RecipeRating { .. } => FeedbackKind::RecipeRating,
            FeedbackPayload::IngredientPreference { .. } => FeedbackKind::IngredientPreference,
            FeedbackPayload::CuisinePreference { .. } => FeedbackKind::CuisinePreference,
            FeedbackPayload::Interaction { .. } => FeedbackKind::Interaction,
        }
    }
}

/// Situation surrounding a recipe at feedback time. Drives score
/// propagation: ingredients and cuisine mentioned here receive deltas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeContext {
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub cuisine: Option<String>,
}

/// Append-only feedback record. Immutable once written; the ledger is an
/// audit trail, never edited in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub kind: FeedbackKind,
    pub payload: FeedbackPayload,
    #[serde(default)]
    pub context: RecipeContext,
    pub confidence: Confidence,
}

impl FeedbackEvent {
    pub fn new(payload: FeedbackPayload, context: RecipeContext, confidence: Confidence) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            kind: payload.kind(),
            payload,
            context,
            confidence,
        }
    }
}
