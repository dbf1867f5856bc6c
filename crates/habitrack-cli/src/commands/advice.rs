use habitrack_core::advisor::seven_day_history;
use habitrack_core::{Config, GeminiAdvisor, HabitTracker};

use super::{effective_date, resolve_habit_id};

pub fn run(habit: &str) -> Result<(), Box<dyn std::error::Error>> {
    let tracker = HabitTracker::open()?;
    let id = resolve_habit_id(&tracker, habit)?;
    let today = effective_date(None);

    if let Some(h) = tracker.get(id) {
        let config = Config::load_or_default();
        let advisor = GeminiAdvisor::new(&config.advisor);
        let history = seven_day_history(&h.logs, today);

        // One request at a time from the CLI; the stale-response token
        // guard only comes into play for concurrent front ends.
        let rt = tokio::runtime::Runtime::new()?;
        let text = rt.block_on(advisor.motivation(&h.name, &history));
        println!("{text}");
    }
    Ok(())
}
