use chrono::NaiveDate;
use habitrack_core::calendar::{history_grid, render_text};
use habitrack_core::HabitTracker;

use super::{effective_date, resolve_habit_id};

pub fn run(
    habit: &str,
    date: Option<NaiveDate>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = HabitTracker::open()?;
    let id = resolve_habit_id(&tracker, habit)?;
    let date = effective_date(date);

    if let Some(h) = tracker.get(id) {
        let months = history_grid(&h.logs, date);
        if json {
            println!("{}", serde_json::to_string_pretty(&months)?);
        } else {
            println!("{} (last 12 months)", h.name);
            print!("{}", render_text(&months));
        }
    }
    Ok(())
}
