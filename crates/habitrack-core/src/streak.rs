//! Current-streak calculation over a habit's daily log.

use chrono::{Days, NaiveDate};

use crate::habit::{DailyLog, DailyStatus};

/// Count the unbroken run of qualifying days ending at `today`.
///
/// Anchor rule: when `today` has no entry yet, the walk starts at
/// yesterday -- an unset today is excluded from the count but does not
/// break the streak. When `today` has an entry, the walk starts at
/// `today` itself. The walk then steps backward one day at a time while
/// the status qualifies (`Success` or `Partial`); `Fail` or a missing
/// entry stops it.
///
/// Pure over `(logs, today)`; the reference date is an explicit parameter
/// so results are deterministic under test.
pub fn current_streak(logs: &DailyLog, today: NaiveDate) -> u32 {
    let mut day = if logs.get(&today).copied().unwrap_or_default() == DailyStatus::None {
        match today.checked_sub_days(Days::new(1)) {
            Some(yesterday) => yesterday,
            None => return 0,
        }
    } else {
        today
    };

    let mut streak = 0;
    loop {
        let status = logs.get(&day).copied().unwrap_or_default();
        if !status.counts_toward_streak() {
            break;
        }
        streak += 1;
        day = match day.checked_sub_days(Days::new(1)) {
            Some(prev) => prev,
            None => break,
        };
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::DailyLog;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn logs(entries: &[(&str, DailyStatus)]) -> DailyLog {
        entries.iter().map(|(d, s)| (date(d), *s)).collect()
    }

    #[test]
    fn unset_today_starts_walk_at_yesterday() {
        let logs = logs(&[
            ("2026-03-13", DailyStatus::Success),
            ("2026-03-12", DailyStatus::Success),
        ]);
        assert_eq!(current_streak(&logs, date("2026-03-14")), 2);
    }

    #[test]
    fn logged_today_is_included() {
        let logs = logs(&[
            ("2026-03-14", DailyStatus::Success),
            ("2026-03-13", DailyStatus::Success),
        ]);
        assert_eq!(current_streak(&logs, date("2026-03-14")), 2);
    }

    #[test]
    fn partial_continues_the_streak() {
        let logs = logs(&[
            ("2026-03-14", DailyStatus::Partial),
            ("2026-03-13", DailyStatus::Success),
            ("2026-03-12", DailyStatus::Fail),
        ]);
        assert_eq!(current_streak(&logs, date("2026-03-14")), 2);
    }

    #[test]
    fn fail_today_breaks_immediately() {
        let logs = logs(&[("2026-03-14", DailyStatus::Fail)]);
        assert_eq!(current_streak(&logs, date("2026-03-14")), 0);
    }

    #[test]
    fn gap_stops_the_walk() {
        let logs = logs(&[
            ("2026-03-14", DailyStatus::Success),
            // 2026-03-13 missing
            ("2026-03-12", DailyStatus::Success),
        ]);
        assert_eq!(current_streak(&logs, date("2026-03-14")), 1);
    }

    #[test]
    fn empty_log_has_zero_streak() {
        assert_eq!(current_streak(&DailyLog::new(), date("2026-03-14")), 0);
    }

    #[test]
    fn walk_crosses_month_and_year_boundaries() {
        let logs = logs(&[
            ("2026-01-02", DailyStatus::Success),
            ("2026-01-01", DailyStatus::Partial),
            ("2025-12-31", DailyStatus::Success),
        ]);
        assert_eq!(current_streak(&logs, date("2026-01-02")), 3);
    }
}
