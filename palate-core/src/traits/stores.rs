use std::collections::HashMap;

use crate::errors::StorageError;
use crate::model::{AdaptiveEntry, FeedbackEvent, PreferenceProfile};

/// Durable source of the declarative preference profile. Read-mostly.
pub trait ProfileStore: Send + Sync {
    /// Load the profile. `Ok(None)` means no record exists yet; callers
    /// fall back to `PreferenceProfile::default()`.
    fn load_profile(&self) -> Result<Option<PreferenceProfile>, StorageError>;
}

/// Durable backing for the adaptive ledger: the append-only event log and
/// the derived per-item entries.
///
/// Load methods return empty collections on missing or corrupt state; the
/// system must stay usable with zero history. Write failures are surfaced:
/// silently losing a learning signal is a correctness bug.
pub trait LearningStore: Send + Sync {
    fn append_event(&self, event: &FeedbackEvent) -> Result<(), StorageError>;
    fn load_events(&self) -> Vec<FeedbackEvent>;
    fn load_entries(&self) -> HashMap<String, AdaptiveEntry>;
    fn save_entries(&self, entries: &HashMap<String, AdaptiveEntry>) -> Result<(), StorageError>;
}
