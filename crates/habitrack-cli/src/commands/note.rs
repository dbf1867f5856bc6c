use chrono::NaiveDate;
use habitrack_core::HabitTracker;

use super::{effective_date, resolve_habit_id};

pub fn run(
    habit: &str,
    text: &str,
    date: Option<NaiveDate>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = HabitTracker::open()?;
    let id = resolve_habit_id(&tracker, habit)?;
    let date = effective_date(date);

    tracker.set_day_note(id, date, text)?;
    println!("Note saved for {date}");
    Ok(())
}
