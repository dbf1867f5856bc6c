use chrono::NaiveDate;
use habitrack_core::{current_streak, HabitTracker};
use serde_json::json;

use super::{effective_date, resolve_habit_id};

pub fn run(habit: &str, date: Option<NaiveDate>) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = HabitTracker::open()?;
    let id = resolve_habit_id(&tracker, habit)?;
    let date = effective_date(date);

    if let Some(h) = tracker.get(id) {
        let summary = json!({
            "habit": h.name,
            "date": date,
            "streak": current_streak(&h.logs, date),
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
    }
    Ok(())
}
