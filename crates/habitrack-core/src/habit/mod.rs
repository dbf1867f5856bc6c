//! Habit data model: daily outcome statuses, the toggle reducer, and the
//! tracked-habit entity.
//!
//! A habit's history is a sparse map from calendar date to [`DailyStatus`].
//! Absence of a key means [`DailyStatus::None`]; `None` entries are never
//! materialized, so the persisted size stays proportional to actual activity.

pub mod catalog;

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome recorded for a habit on one calendar day.
///
/// Persisted as a small integer code; the mapping is stable across
/// save/load cycles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum DailyStatus {
    #[default]
    None,
    Success,
    Partial,
    Fail,
}

impl DailyStatus {
    /// Whether this status keeps a streak alive. `Partial` counts on
    /// purpose: a partial day continues the streak rather than breaking it.
    pub fn counts_toward_streak(&self) -> bool {
        matches!(self, DailyStatus::Success | DailyStatus::Partial)
    }

    /// Label used in advisory history summaries and CLI output.
    pub fn label(&self) -> &'static str {
        match self {
            DailyStatus::None => "No record",
            DailyStatus::Success => "Success",
            DailyStatus::Partial => "Partial Success",
            DailyStatus::Fail => "Fail",
        }
    }
}

impl From<DailyStatus> for u8 {
    fn from(status: DailyStatus) -> Self {
        match status {
            DailyStatus::None => 0,
            DailyStatus::Success => 1,
            DailyStatus::Partial => 2,
            DailyStatus::Fail => 3,
        }
    }
}

impl TryFrom<u8> for DailyStatus {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(DailyStatus::None),
            1 => Ok(DailyStatus::Success),
            2 => Ok(DailyStatus::Partial),
            3 => Ok(DailyStatus::Fail),
            other => Err(format!("unknown daily status code: {other}")),
        }
    }
}

/// Toggle rule for recording an outcome: requesting the status a day
/// already has clears the day back to `None`; anything else overwrites.
pub fn toggle(current: DailyStatus, requested: DailyStatus) -> DailyStatus {
    if current == requested {
        DailyStatus::None
    } else {
        requested
    }
}

/// Category a predefined habit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HabitCategory {
    Quitting,
    Health,
    Mental,
    Productivity,
    Lifestyle,
}

impl HabitCategory {
    pub const ALL: [HabitCategory; 5] = [
        HabitCategory::Quitting,
        HabitCategory::Health,
        HabitCategory::Mental,
        HabitCategory::Productivity,
        HabitCategory::Lifestyle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HabitCategory::Quitting => "quitting",
            HabitCategory::Health => "health",
            HabitCategory::Mental => "mental",
            HabitCategory::Productivity => "productivity",
            HabitCategory::Lifestyle => "lifestyle",
        }
    }
}

/// A predefined habit from the static catalog. Catalog data is read-only;
/// the tracker only consumes `name` when creating a [`UserHabit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HabitDefinition {
    pub id: &'static str,
    pub name: &'static str,
    pub category: HabitCategory,
}

/// Sparse per-day outcome history, keyed by calendar date.
pub type DailyLog = BTreeMap<NaiveDate, DailyStatus>;

/// A habit the user is tracking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserHabit {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub logs: DailyLog,
    #[serde(default)]
    pub notes: BTreeMap<NaiveDate, String>,
    pub created_at: DateTime<Utc>,
}

impl UserHabit {
    /// Create a fresh habit from a catalog definition. Starts with empty
    /// history and a newly assigned id.
    pub fn from_definition(definition: &HabitDefinition) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: definition.name.to_string(),
            logs: BTreeMap::new(),
            notes: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    /// Status for a date, defaulting to `None` when no entry exists.
    pub fn status_on(&self, date: NaiveDate) -> DailyStatus {
        self.logs.get(&date).copied().unwrap_or_default()
    }

    /// Note for a date, if one was ever stored. An empty string is a
    /// stored value, not absence.
    pub fn note_on(&self, date: NaiveDate) -> Option<&str> {
        self.notes.get(&date).map(String::as_str)
    }

    /// Apply the toggle rule for `date` and return the resulting status.
    /// A resulting `None` removes the entry instead of storing it.
    pub fn apply_status(&mut self, date: NaiveDate, requested: DailyStatus) -> DailyStatus {
        let next = toggle(self.status_on(date), requested);
        if next == DailyStatus::None {
            self.logs.remove(&date);
        } else {
            self.logs.insert(date, next);
        }
        next
    }

    /// Overwrite (or create) the note for `date`.
    pub fn set_note(&mut self, date: NaiveDate, text: impl Into<String>) {
        self.notes.insert(date, text.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn status_codes_are_stable() {
        assert_eq!(u8::from(DailyStatus::None), 0);
        assert_eq!(u8::from(DailyStatus::Success), 1);
        assert_eq!(u8::from(DailyStatus::Partial), 2);
        assert_eq!(u8::from(DailyStatus::Fail), 3);
        assert!(DailyStatus::try_from(4).is_err());
    }

    #[test]
    fn status_serializes_as_integer_code() {
        let json = serde_json::to_string(&DailyStatus::Partial).unwrap();
        assert_eq!(json, "2");
        let back: DailyStatus = serde_json::from_str("3").unwrap();
        assert_eq!(back, DailyStatus::Fail);
    }

    #[test]
    fn toggle_same_status_clears() {
        assert_eq!(
            toggle(DailyStatus::Success, DailyStatus::Success),
            DailyStatus::None
        );
    }

    #[test]
    fn toggle_different_status_overwrites() {
        assert_eq!(
            toggle(DailyStatus::Success, DailyStatus::Fail),
            DailyStatus::Fail
        );
        assert_eq!(
            toggle(DailyStatus::None, DailyStatus::Partial),
            DailyStatus::Partial
        );
    }

    #[test]
    fn apply_status_never_stores_none() {
        let def = catalog::definitions()[0];
        let mut habit = UserHabit::from_definition(&def);
        let d = date("2026-03-14");

        habit.apply_status(d, DailyStatus::Success);
        assert_eq!(habit.status_on(d), DailyStatus::Success);
        assert_eq!(habit.logs.len(), 1);

        // Same status again toggles the day back to empty.
        habit.apply_status(d, DailyStatus::Success);
        assert_eq!(habit.status_on(d), DailyStatus::None);
        assert!(habit.logs.is_empty());
    }

    #[test]
    fn notes_are_independent_of_logs() {
        let def = catalog::definitions()[0];
        let mut habit = UserHabit::from_definition(&def);
        let d = date("2026-03-14");

        habit.set_note(d, "rough day");
        assert_eq!(habit.note_on(d), Some("rough day"));
        assert_eq!(habit.status_on(d), DailyStatus::None);

        // Empty text is a stored value, not a deletion.
        habit.set_note(d, "");
        assert_eq!(habit.note_on(d), Some(""));
    }

    fn any_status() -> impl Strategy<Value = DailyStatus> {
        prop_oneof![
            Just(DailyStatus::None),
            Just(DailyStatus::Success),
            Just(DailyStatus::Partial),
            Just(DailyStatus::Fail),
        ]
    }

    proptest! {
        // Toggling the same status twice always returns the day to None.
        #[test]
        fn toggle_is_an_involution_on_equal_input(s in any_status()) {
            let once = toggle(DailyStatus::None, s);
            prop_assert_eq!(toggle(once, s), DailyStatus::None);
        }

        // A different requested status always wins over the current one.
        #[test]
        fn toggle_overwrites_on_unequal_input(a in any_status(), b in any_status()) {
            prop_assume!(a != b);
            prop_assert_eq!(toggle(a, b), b);
        }
    }
}
