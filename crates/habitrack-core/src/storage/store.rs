//! Whole-collection persistence for tracked habits.
//!
//! The store is a single JSON document holding every [`UserHabit`] in
//! insertion order. Each save rewrites the document completely; there is
//! no incremental persistence and no transaction log. Statuses round-trip
//! as their integer codes, dates as `YYYY-MM-DD` keys.

use std::io::ErrorKind;
use std::path::PathBuf;

use log::warn;

use super::data_dir;
use crate::error::StoreError;
use crate::habit::UserHabit;

const STORE_FILE: &str = "habits.json";

/// File-backed habit collection store.
pub struct HabitStore {
    path: PathBuf,
}

impl HabitStore {
    /// Store at the default location inside the data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self, StoreError> {
        let dir = data_dir().map_err(|source| StoreError::DataDir {
            path: PathBuf::from("~/.config/habitrack"),
            source,
        })?;
        Ok(Self {
            path: dir.join(STORE_FILE),
        })
    }

    /// Store at an explicit path. Used by tests.
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the stored collection.
    ///
    /// `Ok(None)` means no collection has ever been saved -- the caller is
    /// expected to route to the first-run selection flow. Malformed content
    /// fails soft: the diagnostic is logged and an empty collection is
    /// returned so the user is never interrupted.
    ///
    /// # Errors
    /// Returns an error only for I/O failures other than absence.
    pub fn load(&self) -> Result<Option<Vec<UserHabit>>, StoreError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => {
                return Err(StoreError::ReadFailed {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        match serde_json::from_str(&content) {
            Ok(habits) => Ok(Some(habits)),
            Err(e) => {
                warn!(
                    "corrupt habit collection at {}: {e}; starting from an empty collection",
                    self.path.display()
                );
                Ok(Some(Vec::new()))
            }
        }
    }

    /// Replace the stored collection with `habits`.
    ///
    /// # Errors
    /// Returns an error if serialization or the write fails.
    pub fn save(&self, habits: &[UserHabit]) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(habits)?;
        std::fs::write(&self.path, content).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::{catalog, DailyStatus, UserHabit};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn store_in(dir: &tempfile::TempDir) -> HabitStore {
        HabitStore::at_path(dir.path().join(STORE_FILE))
    }

    #[test]
    fn absent_file_signals_first_run() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn collection_round_trips_completely() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut habit = UserHabit::from_definition(&catalog::definitions()[0]);
        habit.apply_status(date("2026-03-13"), DailyStatus::Success);
        habit.apply_status(date("2026-03-14"), DailyStatus::Partial);
        habit.set_note(date("2026-03-14"), "late start");
        let habits = vec![
            habit,
            UserHabit::from_definition(&catalog::definitions()[1]),
        ];

        store.save(&habits).unwrap();
        let loaded = store.load().unwrap().unwrap();

        assert_eq!(loaded, habits);
    }

    #[test]
    fn statuses_persist_as_integer_codes() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut habit = UserHabit::from_definition(&catalog::definitions()[0]);
        habit.apply_status(date("2026-03-14"), DailyStatus::Partial);
        store.save(&[habit]).unwrap();

        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(raw.contains("\"2026-03-14\": 2"));
    }

    #[test]
    fn malformed_content_recovers_to_empty_collection() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        std::fs::write(store.path(), "{ not json at all").unwrap();
        let loaded = store.load().unwrap();
        assert_eq!(loaded, Some(Vec::new()));
    }

    #[test]
    fn save_replaces_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let first = vec![UserHabit::from_definition(&catalog::definitions()[0])];
        store.save(&first).unwrap();
        let second = vec![UserHabit::from_definition(&catalog::definitions()[1])];
        store.save(&second).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name, second[0].name);
    }
}
