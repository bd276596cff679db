//! The engine: one handle per user, dependency-injected stores, serialized
//! ledger writes, and a TTL cache over the merged preference view that is
//! invalidated synchronously on every write.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use moka::sync::Cache;
use tracing::{info, warn};
use uuid::Uuid;

use palate_context::{assemble, classify, ContextCollector, LearningSnapshot};
use palate_core::errors::CompletionError;
use palate_core::model::{LearningSummary, TrendReport};
use palate_core::traits::{CompletionClient, LearningStore, ProfileStore};
use palate_core::{
    Confidence, ContextConfig, EffectivePreferences, FeedbackPayload, ItemKind, LearningConfig,
    PalateResult, PreferenceProfile, PreferenceSignal, RecipeContext, RequestKind,
};
use palate_learning::{merge_preferences, trends, AdaptiveLedger};
use palate_tokens::TokenCounter;

/// Result of a context build, handed back to the caller alongside the
/// prompt text for observability.
#[derive(Debug, Clone)]
pub struct BuiltContext {
    pub text: String,
    pub classification: palate_context::Classification,
    pub selected_fragment_names: Vec<String>,
    pub estimated_tokens: usize,
}

/// Per-user core engine. Not a process-wide singleton: callers create one
/// per user and key them however their session layer does.
///
/// Reads go through a short-TTL cache of the merged preference view;
/// every successful write invalidates it before returning, so a caller
/// never sees stale safety-critical constraints after their own update.
pub struct Engine {
    profile_store: Arc<dyn ProfileStore>,
    ledger: Mutex<AdaptiveLedger>,
    completion: Option<Arc<dyn CompletionClient>>,
    tokens: TokenCounter,
    context_config: ContextConfig,
    preference_cache: Cache<(), EffectivePreferences>,
}

impl Engine {
    pub fn new(profile_store: Arc<dyn ProfileStore>, learning_store: Arc<dyn LearningStore>) -> Self {
        Self::with_configs(
            profile_store,
            learning_store,
            LearningConfig::default(),
            ContextConfig::default(),
        )
    }

    pub fn with_configs(
        profile_store: Arc<dyn ProfileStore>,
        learning_store: Arc<dyn LearningStore>,
        learning_config: LearningConfig,
        context_config: ContextConfig,
    ) -> Self {
        let preference_cache = Cache::builder()
            .max_capacity(1)
            .time_to_live(Duration::from_secs(context_config.preference_cache_ttl_secs))
            .build();
        Self {
            profile_store,
            ledger: Mutex::new(AdaptiveLedger::load(learning_store, learning_config)),
            completion: None,
            tokens: TokenCounter::default(),
            context_config,
            preference_cache,
        }
    }

    /// Attach the completion collaborator used by [`Engine::suggest`].
    pub fn with_completion(mut self, client: Arc<dyn CompletionClient>) -> Self {
        self.completion = Some(client);
        self
    }

    /// Build the prompt context for a request.
    ///
    /// Never fails due to missing history or a missing profile; the only
    /// error is a budget below the critical floor.
    pub fn build_context(
        &self,
        request: &str,
        max_tokens: Option<usize>,
        kind_hint: Option<RequestKind>,
    ) -> PalateResult<BuiltContext> {
        let budget = max_tokens.unwrap_or(self.context_config.max_context_tokens);

        let mut classification = classify(request);
        if let Some(kind) = kind_hint {
            classification.kind = kind;
        }

        let prefs = self.effective_preferences();
        let snapshot = self.learning_snapshot();

        let collector = ContextCollector::new(&self.tokens, &self.context_config);
        let candidates = collector.collect(&classification, &prefs, &snapshot);
        let selected = palate_context::select(candidates, budget)?;

        let text = assemble(&selected, &classification);
        let estimated_tokens = selected.iter().map(|f| f.estimated_tokens).sum();
        let selected_fragment_names = selected.into_iter().map(|f| f.name).collect();

        info!(
            kind = %classification.kind,
            budget,
            estimated_tokens,
            "context built"
        );
        Ok(BuiltContext {
            text,
            classification,
            selected_fragment_names,
            estimated_tokens,
        })
    }

    /// Build context for the request and hand it to the completion
    /// collaborator. Any backend failure means "no text produced".
    pub fn suggest(&self, request: &str, max_tokens: Option<usize>) -> PalateResult<String> {
        let client = self
            .completion
            .as_ref()
            .ok_or_else(|| CompletionError::Backend("no completion client configured".into()))?;
        let built = self.build_context(request, max_tokens, None)?;
        let text = client.complete(&built.text, built.estimated_tokens)?;
        Ok(text)
    }

    /// Record a 1..=5 recipe rating. The rating propagates to every
    /// ingredient in the context and, more heavily, to its cuisine.
    pub fn record_recipe_rating(
        &self,
        recipe_name: &str,
        rating: u8,
        context: RecipeContext,
    ) -> PalateResult<Uuid> {
        self.write(|ledger| ledger.record_recipe_rating(recipe_name, rating, "", context))
    }

    /// Record an explicit like/neutral/dislike for an ingredient.
    pub fn record_ingredient_preference(
        &self,
        ingredient: &str,
        signal: PreferenceSignal,
        reason: &str,
    ) -> PalateResult<Uuid> {
        self.write(|ledger| ledger.record_ingredient_preference(ingredient, signal, reason))
    }

    /// Record an explicit like/neutral/dislike for a cuisine.
    pub fn record_cuisine_preference(
        &self,
        cuisine: &str,
        signal: PreferenceSignal,
        reason: &str,
    ) -> PalateResult<Uuid> {
        self.write(|ledger| ledger.record_cuisine_preference(cuisine, signal, reason))
    }

    /// Record an implicit interaction (audit-only).
    pub fn record_interaction(&self, interaction: &str, details: &str) -> PalateResult<Uuid> {
        self.write(|ledger| ledger.record_interaction(interaction, details))
    }

    /// Record a pre-built feedback event.
    pub fn record_feedback(
        &self,
        payload: FeedbackPayload,
        context: RecipeContext,
        confidence: Confidence,
    ) -> PalateResult<Uuid> {
        self.write(|ledger| ledger.record_feedback(payload, context, confidence))
    }

    /// Apply an out-of-band score delta to a single item.
    pub fn update_item_score(
        &self,
        item: &str,
        kind: ItemKind,
        delta: f64,
        source: &str,
    ) -> PalateResult<()> {
        self.write(|ledger| ledger.update_item_score(item, kind, delta, source))
    }

    pub fn get_learning_summary(&self) -> LearningSummary {
        self.lock_ledger().summary()
    }

    pub fn analyze_trends(&self, window_days: u32) -> TrendReport {
        trends::analyze(&self.lock_ledger(), window_days, chrono::Utc::now())
    }

    /// The merged preference view, served from the TTL cache.
    pub fn effective_preferences(&self) -> EffectivePreferences {
        self.preference_cache.get_with((), || {
            let profile = self.load_profile_or_default();
            let ledger = self.lock_ledger();
            merge_preferences(&profile, ledger.entries(), ledger.config())
        })
    }

    /// Serialized write path: take the ledger lock, run the mutation, and
    /// on success invalidate the preference cache before returning.
    fn write<T>(
        &self,
        op: impl FnOnce(&mut AdaptiveLedger) -> PalateResult<T>,
    ) -> PalateResult<T> {
        let result = op(&mut self.lock_ledger());
        if result.is_ok() {
            self.preference_cache.invalidate_all();
        }
        result
    }

    fn lock_ledger(&self) -> std::sync::MutexGuard<'_, AdaptiveLedger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Profile reads degrade, never fail: a missing or unreadable record
    /// becomes the documented empty default.
    fn load_profile_or_default(&self) -> PreferenceProfile {
        match self.profile_store.load_profile() {
            Ok(Some(profile)) => profile,
            Ok(None) => PreferenceProfile::default(),
            Err(e) => {
                warn!(error = %e, "profile load failed, using empty default");
                PreferenceProfile::default()
            }
        }
    }

    fn learning_snapshot(&self) -> LearningSnapshot {
        let ledger = self.lock_ledger();
        if ledger.feedback_count() == 0 {
            return LearningSnapshot::default();
        }
        let report = trends::analyze(
            &ledger,
            self.context_config.learned_fragment_window_days,
            chrono::Utc::now(),
        );
        LearningSnapshot {
            feedback_count: ledger.feedback_count(),
            average_rating: report.average_rating,
            recommendations: report.recommendations,
        }
    }
}
