//! # palate-tokens
//!
//! Token estimation for fragment sizing and budget enforcement.
//! Uses the cl100k BPE when it loads, a chars/4 heuristic otherwise, with
//! a moka cache in front for repeated fragment texts.

use moka::sync::Cache;
use tiktoken_rs::CoreBPE;
use tracing::warn;

/// Bytes-per-token heuristic used when the BPE is unavailable.
const HEURISTIC_CHARS_PER_TOKEN: usize = 4;

/// Cached entries for repeated fragment texts.
const CACHE_CAPACITY: u64 = 4096;

/// Token counter backing all fragment size estimates.
pub struct TokenCounter {
    bpe: Option<CoreBPE>,
    cache: Cache<String, usize>,
}

impl TokenCounter {
    pub fn new() -> Self {
        let bpe = match tiktoken_rs::cl100k_base() {
            Ok(bpe) => Some(bpe),
            Err(e) => {
                warn!(error = %e, "cl100k BPE unavailable, falling back to heuristic");
                None
            }
        };
        Self {
            bpe,
            cache: Cache::new(CACHE_CAPACITY),
        }
    }

    /// Count tokens in `text` without touching the cache.
    pub fn count(&self, text: &str) -> usize {
        match &self.bpe {
            Some(bpe) => bpe.encode_with_special_tokens(text).len(),
            None => text.len().div_ceil(HEURISTIC_CHARS_PER_TOKEN),
        }
    }

    /// Count tokens, memoizing by text.
    pub fn count_cached(&self, text: &str) -> usize {
        if let Some(count) = self.cache.get(text) {
            return count;
        }
        let count = self.count(text);
        self.cache.insert(text.to_string(), count);
        count
    }
}

impl Default for TokenCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_is_zero_tokens() {
        let counter = TokenCounter::default();
        assert_eq!(counter.count(""), 0);
    }

    #[test]
    fn longer_text_costs_more() {
        let counter = TokenCounter::default();
        let short = counter.count("tomato");
        let long = counter.count("tomato basil garlic onion rosemary thyme oregano");
        assert!(long > short);
    }

    #[test]
    fn cache_is_transparent() {
        let counter = TokenCounter::default();
        let text = "no peanuts, no shellfish";
        assert_eq!(counter.count_cached(text), counter.count(text));
        // Second read hits the cache and must agree.
        assert_eq!(counter.count_cached(text), counter.count(text));
    }
}
