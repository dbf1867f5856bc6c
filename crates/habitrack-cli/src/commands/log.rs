use chrono::NaiveDate;
use habitrack_core::{DailyStatus, HabitTracker};

use super::{effective_date, resolve_habit_id};

pub fn run(
    habit: &str,
    status: DailyStatus,
    date: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = HabitTracker::open()?;
    let id = resolve_habit_id(&tracker, habit)?;
    let date = effective_date(date);

    if let Some(result) = tracker.set_day_status(id, date, status)? {
        match result {
            DailyStatus::None => println!("{date}: cleared"),
            other => println!("{date}: {}", other.label()),
        }
    }
    Ok(())
}
