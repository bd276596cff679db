use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use palate_core::errors::StorageError;
use palate_core::model::{AdaptiveEntry, FeedbackEvent, PreferenceProfile};
use palate_core::traits::{LearningStore, ProfileStore};

/// In-memory store for tests and ephemeral sessions.
///
/// `fail_writes` flips every write into an error, for exercising the
/// write-failure paths without a filesystem.
#[derive(Default)]
pub struct MemoryStore {
    profile: Mutex<Option<PreferenceProfile>>,
    events: Mutex<Vec<FeedbackEvent>>,
    entries: Mutex<HashMap<String, AdaptiveEntry>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: PreferenceProfile) -> Self {
        let store = Self::default();
        *store.profile.lock().unwrap_or_else(PoisonError::into_inner) = Some(profile);
        store
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self, record: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::WriteFailed {
                record: record.to_string(),
                reason: "writes disabled".to_string(),
            });
        }
        Ok(())
    }
}

impl ProfileStore for MemoryStore {
    fn load_profile(&self) -> Result<Option<PreferenceProfile>, StorageError> {
        Ok(self
            .profile
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }
}

impl LearningStore for MemoryStore {
    fn append_event(&self, event: &FeedbackEvent) -> Result<(), StorageError> {
        self.check_writable("feedback_events")?;
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event.clone());
        Ok(())
    }

    fn load_events(&self) -> Vec<FeedbackEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn load_entries(&self) -> HashMap<String, AdaptiveEntry> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn save_entries(&self, entries: &HashMap<String, AdaptiveEntry>) -> Result<(), StorageError> {
        self.check_writable("adaptive_entries")?;
        *self.entries.lock().unwrap_or_else(PoisonError::into_inner) = entries.clone();
        Ok(())
    }
}
