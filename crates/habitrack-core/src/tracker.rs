//! The habit repository: owns the tracked collection and mediates all
//! mutation.
//!
//! Single logical writer, no locking. Every mutating operation is followed
//! by a whole-collection save through [`HabitStore`] -- a write replaces
//! whatever was stored before.

use chrono::NaiveDate;
use uuid::Uuid;

use crate::error::Result;
use crate::habit::{DailyStatus, HabitDefinition, UserHabit};
use crate::storage::HabitStore;

/// Owns the ordered collection of tracked habits.
pub struct HabitTracker {
    habits: Vec<UserHabit>,
    store: HabitStore,
    first_run: bool,
}

impl HabitTracker {
    /// Open the tracker over the default store location.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn open() -> Result<Self> {
        Self::with_store(HabitStore::open()?)
    }

    /// Open the tracker over an explicit store. Used by tests.
    ///
    /// # Errors
    /// Returns an error if the store cannot be read.
    pub fn with_store(store: HabitStore) -> Result<Self> {
        let loaded = store.load()?;
        let first_run = loaded.is_none();
        Ok(Self {
            habits: loaded.unwrap_or_default(),
            store,
            first_run,
        })
    }

    /// True when no collection had ever been saved at open time. Callers
    /// route this to the first-run selection flow.
    pub fn is_first_run(&self) -> bool {
        self.first_run
    }

    /// Current collection, insertion order preserved.
    pub fn list(&self) -> &[UserHabit] {
        &self.habits
    }

    pub fn get(&self, id: Uuid) -> Option<&UserHabit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&UserHabit> {
        self.habits.iter().find(|h| h.name == name)
    }

    /// Start tracking a habit from a catalog definition.
    ///
    /// Adding a definition whose name is already tracked is a silent
    /// no-op: the collection is unchanged and `None` is returned.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn add(&mut self, definition: &HabitDefinition) -> Result<Option<Uuid>> {
        if self.find_by_name(definition.name).is_some() {
            return Ok(None);
        }

        let habit = UserHabit::from_definition(definition);
        let id = habit.id;
        self.habits.push(habit);
        self.persist()?;
        Ok(Some(id))
    }

    /// Delete a habit and all its logs and notes, irrecoverably.
    ///
    /// Unknown id is a no-op returning `false`. Callers must have obtained
    /// explicit confirmation before invoking this; the core does not
    /// re-confirm.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn remove(&mut self, id: Uuid) -> Result<bool> {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        if self.habits.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    /// Record an outcome for a day with toggle semantics: requesting the
    /// status the day already has clears it back to `None`.
    ///
    /// Returns the resulting status, or `None` for an unknown habit id
    /// (silent no-op).
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn set_day_status(
        &mut self,
        id: Uuid,
        date: NaiveDate,
        status: DailyStatus,
    ) -> Result<Option<DailyStatus>> {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return Ok(None);
        };
        let result = habit.apply_status(date, status);
        self.persist()?;
        Ok(Some(result))
    }

    /// Overwrite (or create) the note for a day, independent of status.
    /// Empty text is a valid stored value. Unknown id is a silent no-op.
    ///
    /// # Errors
    /// Returns an error if persisting the collection fails.
    pub fn set_day_note(&mut self, id: Uuid, date: NaiveDate, text: &str) -> Result<()> {
        let Some(habit) = self.habits.iter_mut().find(|h| h.id == id) else {
            return Ok(());
        };
        habit.set_note(date, text);
        self.persist()?;
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        self.store.save(&self.habits)?;
        Ok(())
    }
}
