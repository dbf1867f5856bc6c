use chrono::NaiveDate;
use clap::Subcommand;
use habitrack_core::habit::catalog;
use habitrack_core::{current_streak, HabitTracker};
use serde_json::json;

use super::{effective_date, resolve_habit_id};

#[derive(Subcommand)]
pub enum HabitAction {
    /// Start tracking a habit from the catalog
    Add {
        /// Catalog definition id (see `habitrack catalog`)
        definition_id: String,
    },
    /// List tracked habits with today's status and streak
    List {
        /// Emit as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one habit's detail for a day
    Show {
        /// Habit id or name
        habit: String,
        /// Day to inspect (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Delete a habit and all its logs and notes. Irreversible.
    Remove {
        /// Habit id or name
        habit: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(action: HabitAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut tracker = HabitTracker::open()?;

    match action {
        HabitAction::Add { definition_id } => {
            let def = catalog::find(&definition_id).ok_or_else(|| {
                format!("unknown catalog id '{definition_id}' (see `habitrack catalog`)")
            })?;
            match tracker.add(def)? {
                Some(id) => println!("Tracking '{}' ({id})", def.name),
                None => println!("Already tracking '{}'", def.name),
            }
        }
        HabitAction::List { json } => {
            if tracker.is_first_run() {
                eprintln!(
                    "No habits tracked yet. Browse `habitrack catalog` and start one with \
                     `habitrack habit add <id>`."
                );
            }
            let today = effective_date(None);
            if json {
                let rows: Vec<_> = tracker
                    .list()
                    .iter()
                    .map(|h| {
                        json!({
                            "id": h.id,
                            "name": h.name,
                            "today": h.status_on(today).label(),
                            "streak": current_streak(&h.logs, today),
                            "created_at": h.created_at,
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for h in tracker.list() {
                    println!(
                        "{}  {}  today: {}  streak: {}",
                        h.id,
                        h.name,
                        h.status_on(today).label(),
                        current_streak(&h.logs, today)
                    );
                }
            }
        }
        HabitAction::Show { habit, date } => {
            let id = resolve_habit_id(&tracker, &habit)?;
            let date = effective_date(date);
            if let Some(h) = tracker.get(id) {
                println!("{} ({})", h.name, h.id);
                println!("{date}: {}", h.status_on(date).label());
                println!("streak: {}", current_streak(&h.logs, date));
                if let Some(note) = h.note_on(date) {
                    println!("note: {note}");
                }
            }
        }
        HabitAction::Remove { habit, yes } => {
            let id = resolve_habit_id(&tracker, &habit)?;
            if !yes {
                return Err(
                    "removing a habit deletes all its data irrecoverably; \
                     pass --yes to confirm"
                        .into(),
                );
            }
            if tracker.remove(id)? {
                println!("Removed");
            }
        }
    }
    Ok(())
}
