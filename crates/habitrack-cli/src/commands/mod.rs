pub mod advice;
pub mod auth;
pub mod calendar;
pub mod catalog;
pub mod config;
pub mod habit;
pub mod log;
pub mod note;
pub mod streak;

use chrono::{Local, NaiveDate};
use habitrack_core::{DailyStatus, HabitTracker};
use uuid::Uuid;

/// Resolve a habit selector (id or display name) against the collection.
pub fn resolve_habit_id(
    tracker: &HabitTracker,
    selector: &str,
) -> Result<Uuid, Box<dyn std::error::Error>> {
    if let Ok(id) = selector.parse::<Uuid>() {
        if tracker.get(id).is_some() {
            return Ok(id);
        }
    }
    if let Some(habit) = tracker.find_by_name(selector) {
        return Ok(habit.id);
    }
    Err(format!("no tracked habit matches '{selector}' (see `habitrack habit list`)").into())
}

/// The ambient reference date. Core computations take it as an explicit
/// parameter; only this caller boundary reads the clock.
pub fn effective_date(date: Option<NaiveDate>) -> NaiveDate {
    date.unwrap_or_else(|| Local::now().date_naive())
}

/// clap value parser for daily statuses.
pub fn parse_status(s: &str) -> Result<DailyStatus, String> {
    match s.to_ascii_lowercase().as_str() {
        "success" => Ok(DailyStatus::Success),
        "partial" => Ok(DailyStatus::Partial),
        "fail" => Ok(DailyStatus::Fail),
        other => Err(format!(
            "unknown status '{other}' (expected success, partial or fail)"
        )),
    }
}
