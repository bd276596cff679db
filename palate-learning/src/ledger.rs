//! AdaptiveLedger: append-only feedback log plus the derived per-item
//! score map, updated online as feedback arrives.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use palate_core::constants::{MAX_PROPAGATION_INGREDIENTS, MAX_RATING, MIN_RATING};
use palate_core::errors::FeedbackError;
use palate_core::model::LearningSummary;
use palate_core::traits::LearningStore;
use palate_core::{
    AdaptiveEntry, Confidence, FeedbackEvent, FeedbackPayload, ItemKind, LearningConfig,
    PalateResult, PreferenceSignal, RecipeContext, Score, Trend,
};

/// Confidence attached to explicit single-item preference feedback.
/// Slightly below a recipe rating: one-off statements get revised more often.
const ITEM_FEEDBACK_CONFIDENCE: f64 = 0.9;

/// The adaptive preference ledger for one user.
///
/// Writes are read-modify-write on per-item entries and must be serialized
/// by the owner (the engine holds this behind a mutex). The ledger itself
/// never talks to the network; its only collaborator is the learning store.
pub struct AdaptiveLedger {
    /// Durable backing. `None` keeps the ledger purely in memory.
    store: Option<Arc<dyn LearningStore>>,
    events: Vec<FeedbackEvent>,
    entries: HashMap<String, AdaptiveEntry>,
    config: LearningConfig,
}

impl AdaptiveLedger {
    /// An empty in-memory ledger (tests, ephemeral sessions).
    pub fn new(config: LearningConfig) -> Self {
        Self {
            store: None,
            events: Vec::new(),
            entries: HashMap::new(),
            config,
        }
    }

    /// Load from storage. Missing or corrupt state is not fatal: the store
    /// contract returns empty collections and the system continues with
    /// zero history.
    pub fn load(store: Arc<dyn LearningStore>, config: LearningConfig) -> Self {
        let events = store.load_events();
        let entries = store.load_entries();
        info!(
            events = events.len(),
            entries = entries.len(),
            "adaptive ledger loaded"
        );
        Self {
            store: Some(store),
            events,
            entries,
            config,
        }
    }

    /// Record one feedback event. Validates the payload, appends it to the
    /// durable log, then applies the learning side effects:
    /// recipe ratings propagate to ingredients and cuisine, explicit item
    /// preferences update that single item, interactions are audit-only.
    ///
    /// Write failures surface as `StorageError`; the in-memory state is not
    /// advanced when the append fails.
    pub fn record_feedback(
        &mut self,
        payload: FeedbackPayload,
        context: RecipeContext,
        confidence: Confidence,
    ) -> PalateResult<Uuid> {
        self.validate(&payload)?;

        let event = FeedbackEvent::new(payload, context, confidence);
        if let Some(store) = &self.store {
            store.append_event(&event)?;
        }
        let id = event.id;
        let kind = event.kind;

        let scores_moved = match &event.payload {
            FeedbackPayload::RecipeRating { rating, .. } => {
                self.propagate_rating(*rating, &event.context);
                true
            }
            FeedbackPayload::IngredientPreference {
                ingredient, signal, ..
            } => {
                let (ingredient, delta) = (ingredient.clone(), signal.score());
                self.apply_delta(&ingredient, ItemKind::Ingredient, delta, "ingredient_feedback");
                true
            }
            FeedbackPayload::CuisinePreference { cuisine, signal, .. } => {
                let (cuisine, delta) = (cuisine.clone(), signal.score());
                self.apply_delta(&cuisine, ItemKind::Cuisine, delta, "cuisine_feedback");
                true
            }
            FeedbackPayload::Interaction { .. } => false,
        };
        self.events.push(event);
        if scores_moved {
            self.persist_entries()?;
        }

        info!(feedback_id = %id, kind = ?kind, "feedback recorded");
        Ok(id)
    }

    /// Record a 1..=5 recipe rating with its generation context.
    pub fn record_recipe_rating(
        &mut self,
        recipe_name: &str,
        rating: u8,
        comments: &str,
        context: RecipeContext,
    ) -> PalateResult<Uuid> {
        self.record_feedback(
            FeedbackPayload::RecipeRating {
                recipe_name: recipe_name.to_string(),
                rating,
                comments: comments.to_string(),
            },
            context,
            Confidence::new(1.0),
        )
    }

    /// Record an explicit like/neutral/dislike for a single ingredient.
    pub fn record_ingredient_preference(
        &mut self,
        ingredient: &str,
        signal: PreferenceSignal,
        reason: &str,
    ) -> PalateResult<Uuid> {
        self.record_feedback(
            FeedbackPayload::IngredientPreference {
                ingredient: ingredient.to_string(),
                signal,
                reason: reason.to_string(),
            },
            RecipeContext::default(),
            Confidence::new(ITEM_FEEDBACK_CONFIDENCE),
        )
    }

    /// Record an explicit like/neutral/dislike for a cuisine.
    pub fn record_cuisine_preference(
        &mut self,
        cuisine: &str,
        signal: PreferenceSignal,
        reason: &str,
    ) -> PalateResult<Uuid> {
        self.record_feedback(
            FeedbackPayload::CuisinePreference {
                cuisine: cuisine.to_string(),
                signal,
                reason: reason.to_string(),
            },
            RecipeContext::default(),
            Confidence::new(ITEM_FEEDBACK_CONFIDENCE),
        )
    }

    /// Record an implicit interaction. Audit-only: extends the event log
    /// without moving any scores.
    pub fn record_interaction(&mut self, interaction: &str, details: &str) -> PalateResult<Uuid> {
        self.record_feedback(
            FeedbackPayload::Interaction {
                interaction: interaction.to_string(),
                details: details.to_string(),
            },
            RecipeContext::default(),
            Confidence::new(1.0),
        )
    }

    /// Core online-learning primitive: apply a score delta to one item and
    /// persist. Exposed for callers with out-of-band signal.
    pub fn update_item_score(
        &mut self,
        item: &str,
        kind: ItemKind,
        delta: f64,
        source: &str,
    ) -> PalateResult<()> {
        if item.trim().is_empty() {
            return Err(FeedbackError::EmptyItemName.into());
        }
        self.apply_delta(item, kind, delta, source);
        self.persist_entries()
    }

    fn validate(&self, payload: &FeedbackPayload) -> Result<(), FeedbackError> {
        match payload {
            FeedbackPayload::RecipeRating {
                recipe_name, rating, ..
            } => {
                if recipe_name.trim().is_empty() {
                    return Err(FeedbackError::EmptyRecipeName);
                }
                if !(MIN_RATING..=MAX_RATING).contains(rating) {
                    return Err(FeedbackError::RatingOutOfRange { rating: *rating });
                }
            }
            FeedbackPayload::IngredientPreference { ingredient, .. } => {
                if ingredient.trim().is_empty() {
                    return Err(FeedbackError::EmptyItemName);
                }
            }
            FeedbackPayload::CuisinePreference { cuisine, .. } => {
                if cuisine.trim().is_empty() {
                    return Err(FeedbackError::EmptyItemName);
                }
            }
            FeedbackPayload::Interaction { .. } => {}
        }
        Ok(())
    }

    /// Score propagation from a recipe rating: every mentioned ingredient
    /// receives a weighted share of the signal, the cuisine a heavier one.
    fn propagate_rating(&mut self, rating: u8, context: &RecipeContext) {
        let score = Score::from_rating(rating).value();
        for ingredient in context
            .ingredients
            .iter()
            .take(MAX_PROPAGATION_INGREDIENTS)
        {
            if ingredient.trim().is_empty() {
                continue;
            }
            self.apply_delta(
                ingredient,
                ItemKind::Ingredient,
                score * self.config.ingredient_weight,
                "recipe_rating",
            );
        }
        if let Some(cuisine) = &context.cuisine {
            if !cuisine.trim().is_empty() {
                self.apply_delta(
                    cuisine,
                    ItemKind::Cuisine,
                    score * self.config.cuisine_weight,
                    "recipe_rating",
                );
            }
        }
    }

    /// The decaying-learning-rate update. Early feedback moves a fresh
    /// entry quickly; later feedback refines slowly, so one noisy rating
    /// cannot swing an established score.
    fn apply_delta(&mut self, item: &str, kind: ItemKind, delta: f64, source: &str) {
        let now = Utc::now();
        let config = &self.config;
        let entry = self
            .entries
            .entry(item.to_string())
            .or_insert_with(|| AdaptiveEntry::new(item, kind, now));

        let weight = config
            .max_step_weight
            .min(1.0 / f64::from(entry.update_count + 1));
        let old_score = entry.score.value();
        entry.score = Score::new(old_score + delta * weight);
        entry.trend = Trend::from_delta(entry.score.value() - old_score, config.trend_threshold);
        entry.confidence = entry.confidence.bump(config.confidence_step);
        entry.update_count += 1;
        entry.last_updated = now;

        debug!(
            item,
            source,
            delta,
            weight,
            score = entry.score.value(),
            trend = ?entry.trend,
            "item score updated"
        );
    }

    fn persist_entries(&self) -> PalateResult<()> {
        if let Some(store) = &self.store {
            store.save_entries(&self.entries)?;
        }
        Ok(())
    }

    /// Snapshot of what has been learned so far.
    pub fn summary(&self) -> LearningSummary {
        LearningSummary {
            total_feedback_count: self.events.len(),
            total_entries: self.entries.len(),
            last_feedback_timestamp: self.events.last().map(|e| e.timestamp),
            stability_score: self.stability(),
        }
    }

    /// 1.0 − churn ratio. An empty ledger is maximally stable by
    /// convention: no data, no churn.
    pub fn stability(&self) -> f64 {
        if self.entries.is_empty() {
            return 1.0;
        }
        let moving = self
            .entries
            .values()
            .filter(|e| e.trend != Trend::Stable)
            .count();
        (1.0 - moving as f64 / self.entries.len() as f64).max(0.0)
    }

    pub fn events(&self) -> &[FeedbackEvent] {
        &self.events
    }

    pub fn entries(&self) -> &HashMap<String, AdaptiveEntry> {
        &self.entries
    }

    pub fn entry(&self, item: &str) -> Option<&AdaptiveEntry> {
        self.entries.get(item)
    }

    pub fn feedback_count(&self) -> usize {
        self.events.len()
    }

    pub fn config(&self) -> &LearningConfig {
        &self.config
    }
}
