use serde::{Deserialize, Serialize};

use super::defaults;

/// Context-building configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContextConfig {
    /// Default token budget when the caller passes none.
    pub max_context_tokens: usize,
    /// Feedback count past which the learned fragment is high priority.
    pub learned_fragment_promote_after: usize,
    /// Window the learned fragment's trend analysis looks back over (days).
    pub learned_fragment_window_days: u32,
    /// TTL for the effective-preference cache (seconds). Writes invalidate
    /// synchronously; this only bounds staleness between reads.
    pub preference_cache_ttl_secs: u64,
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            max_context_tokens: defaults::MAX_CONTEXT_TOKENS,
            learned_fragment_promote_after: defaults::LEARNED_FRAGMENT_PROMOTE_AFTER,
            learned_fragment_window_days: defaults::LEARNED_FRAGMENT_WINDOW_DAYS,
            preference_cache_ttl_secs: defaults::PREFERENCE_CACHE_TTL_SECS,
        }
    }
}
