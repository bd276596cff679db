use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use palate_core::errors::StorageError;
use palate_core::model::{AdaptiveEntry, FeedbackEvent, PreferenceProfile};
use palate_core::traits::{LearningStore, ProfileStore};

const PROFILE_FILE: &str = "profile.json";
const EVENTS_FILE: &str = "feedback_events.json";
const ENTRIES_FILE: &str = "adaptive_entries.json";

/// Per-user JSON files in a single directory.
///
/// The event log is rewritten whole on append; one user's feedback
/// history stays small enough for that.
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StorageError::WriteFailed {
            record: dir.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { dir })
    }

    fn path(&self, file: &str) -> PathBuf {
        self.dir.join(file)
    }

    /// Missing file is normal (no history yet); a corrupt file is warned
    /// about and treated as empty so one bad write never bricks a user.
    fn read_or_default<T: Default + serde::de::DeserializeOwned>(&self, file: &str) -> T {
        let path = self.path(file);
        if !path.exists() {
            return T::default();
        }
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(value) => value,
                Err(e) => {
                    warn!(file = %path.display(), error = %e, "corrupt store file, starting empty");
                    T::default()
                }
            },
            Err(e) => {
                warn!(file = %path.display(), error = %e, "unreadable store file, starting empty");
                T::default()
            }
        }
    }

    fn write_json<T: serde::Serialize>(&self, file: &str, value: &T) -> Result<(), StorageError> {
        let json =
            serde_json::to_string_pretty(value).map_err(|e| StorageError::SerializationFailed {
                record: file.to_string(),
                reason: e.to_string(),
            })?;
        write_atomic(&self.path(file), &json).map_err(|e| StorageError::WriteFailed {
            record: file.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Write to a sibling temp file and rename over the target, so a crash
/// mid-write never leaves a truncated file behind.
fn write_atomic(path: &Path, contents: &str) -> std::io::Result<()> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}

impl ProfileStore for JsonFileStore {
    fn load_profile(&self) -> Result<Option<PreferenceProfile>, StorageError> {
        let path = self.path(PROFILE_FILE);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(&path).map_err(|e| StorageError::ReadFailed {
            record: PROFILE_FILE.to_string(),
            reason: e.to_string(),
        })?;
        let profile =
            serde_json::from_str(&raw).map_err(|e| StorageError::SerializationFailed {
                record: PROFILE_FILE.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Some(profile))
    }
}

impl LearningStore for JsonFileStore {
    fn append_event(&self, event: &FeedbackEvent) -> Result<(), StorageError> {
        let mut events: Vec<FeedbackEvent> = self.read_or_default(EVENTS_FILE);
        events.push(event.clone());
        self.write_json(EVENTS_FILE, &events)
    }

    fn load_events(&self) -> Vec<FeedbackEvent> {
        self.read_or_default(EVENTS_FILE)
    }

    fn load_entries(&self) -> HashMap<String, AdaptiveEntry> {
        self.read_or_default(ENTRIES_FILE)
    }

    fn save_entries(&self, entries: &HashMap<String, AdaptiveEntry>) -> Result<(), StorageError> {
        self.write_json(ENTRIES_FILE, entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palate_core::{Confidence, FeedbackPayload, RecipeContext};

    fn event(name: &str) -> FeedbackEvent {
        FeedbackEvent::new(
            FeedbackPayload::RecipeRating {
                recipe_name: name.to_string(),
                rating: 4,
                comments: String::new(),
            },
            RecipeContext::default(),
            Confidence::new(1.0),
        )
    }

    #[test]
    fn missing_files_load_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        assert!(store.load_profile().unwrap().is_none());
        assert!(store.load_events().is_empty());
        assert!(store.load_entries().is_empty());
    }

    #[test]
    fn events_round_trip_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        store.append_event(&event("Pad Thai")).unwrap();
        store.append_event(&event("Ramen")).unwrap();

        let reopened = JsonFileStore::new(dir.path()).unwrap();
        let events = reopened.load_events();
        assert_eq!(events.len(), 2);
        match &events[0].payload {
            FeedbackPayload::RecipeRating { recipe_name, .. } => {
                assert_eq!(recipe_name, "Pad Thai")
            }
            other => panic!("unexpected payload: {other:?}"),
        }
    }

    #[test]
    fn corrupt_event_file_loads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        fs::write(dir.path().join(EVENTS_FILE), "{not json").unwrap();
        assert!(store.load_events().is_empty());
    }

    #[test]
    fn corrupt_profile_is_a_read_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path()).unwrap();
        fs::write(dir.path().join(PROFILE_FILE), "{not json").unwrap();
        assert!(matches!(
            store.load_profile(),
            Err(StorageError::SerializationFailed { .. })
        ));
    }
}
