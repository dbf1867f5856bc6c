//! Twelve-month history grid.
//!
//! Builds the week-aligned day grid used to visualize a habit's history:
//! the current month plus the eleven before it, oldest first, every month
//! padded to a fixed 7-column week structure starting on Sunday.
//!
//! Construction is pure and total over `(logs, today)` -- identical inputs
//! always yield an identical grid, no I/O, no ambient clock.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::habit::{DailyLog, DailyStatus};

/// Number of months in the history window, current month inclusive.
pub const HISTORY_MONTHS: u32 = 12;

/// One day in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub status: DailyStatus,
    /// Strictly after the reference date, at day granularity. Future
    /// cells always carry `status = None`, whatever the log contains.
    pub is_future: bool,
}

/// One month of the grid. `cells` starts with `None` placeholders so that
/// index 0 of every week row is a Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u32,
    pub cells: Vec<Option<DayCell>>,
}

impl MonthGrid {
    /// Three-letter month label for rendering.
    pub fn label(&self) -> &'static str {
        match self.month {
            1 => "Jan",
            2 => "Feb",
            3 => "Mar",
            4 => "Apr",
            5 => "May",
            6 => "Jun",
            7 => "Jul",
            8 => "Aug",
            9 => "Sep",
            10 => "Oct",
            11 => "Nov",
            _ => "Dec",
        }
    }

    /// Number of real (non-placeholder) day cells.
    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

/// Build the 12-month grid for one habit's log, oldest month first.
pub fn history_grid(logs: &DailyLog, today: NaiveDate) -> Vec<MonthGrid> {
    (0..HISTORY_MONTHS as i32)
        .rev()
        .map(|back| month_grid(logs, today, back))
        .collect()
}

fn month_grid(logs: &DailyLog, today: NaiveDate, months_back: i32) -> MonthGrid {
    let (year, month) = month_anchor(today, months_back);
    let mut cells = Vec::with_capacity(37);

    if let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) {
        for _ in 0..first.weekday().num_days_from_sunday() {
            cells.push(None);
        }
        for day in 1..=days_in_month(year, month) {
            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                let is_future = date > today;
                let status = if is_future {
                    DailyStatus::None
                } else {
                    logs.get(&date).copied().unwrap_or_default()
                };
                cells.push(Some(DayCell {
                    date,
                    status,
                    is_future,
                }));
            }
        }
    }

    MonthGrid { year, month, cells }
}

/// `(year, month)` of the reference date shifted back by whole months.
fn month_anchor(today: NaiveDate, months_back: i32) -> (i32, u32) {
    let total = today.year() * 12 + today.month0() as i32 - months_back;
    (total.div_euclid(12), total.rem_euclid(12) as u32 + 1)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

fn cell_char(cell: Option<&DayCell>) -> char {
    match cell {
        None => ' ',
        Some(c) if c.is_future => ' ',
        Some(c) => match c.status {
            DailyStatus::None => '·',
            DailyStatus::Success => '█',
            DailyStatus::Partial => '▒',
            DailyStatus::Fail => '░',
        },
    }
}

/// Render the grid as plain text, one mini-calendar per month.
pub fn render_text(months: &[MonthGrid]) -> String {
    let mut output = String::new();

    for grid in months {
        output.push_str(&format!("{} {}\n", grid.label(), grid.year));
        output.push_str("Su Mo Tu We Th Fr Sa\n");
        for week in grid.cells.chunks(7) {
            let row: Vec<String> = week
                .iter()
                .map(|cell| format!("{} ", cell_char(cell.as_ref())))
                .collect();
            output.push_str(row.join(" ").trim_end());
            output.push('\n');
        }
        output.push('\n');
    }

    output.push_str("Legend: █ success  ▒ partial  ░ fail  · no record\n");
    output
}
