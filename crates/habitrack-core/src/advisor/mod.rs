//! Advisory gateway: turns a habit's recent history into a short
//! motivational message via an external text-generation service.
//!
//! The gateway never fails from the caller's point of view -- every
//! failure mode collapses to a fixed, non-empty fallback string.

mod gemini;

pub use gemini::{
    keyring_store, GeminiAdvisor, EMPTY_RESPONSE_ADVICE, FALLBACK_ADVICE, KEY_MISSING_ADVICE,
};

use chrono::{Days, NaiveDate};

use crate::habit::{DailyLog, DailyStatus};

/// The exact history window the gateway consumes: the 7 days ending at
/// `today` inclusive, most recent first.
pub fn seven_day_history(logs: &DailyLog, today: NaiveDate) -> Vec<(NaiveDate, DailyStatus)> {
    (0..7)
        .filter_map(|back| today.checked_sub_days(Days::new(back)))
        .map(|date| (date, logs.get(&date).copied().unwrap_or_default()))
        .collect()
}

/// Token identifying one advisory request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

/// Holder for the most recent advisory text.
///
/// Overlapping requests resolve newest-wins by issue order, not by
/// completion order: a completion is accepted only if it carries the most
/// recently issued token, so a slow earlier response can never overwrite
/// a newer one.
#[derive(Debug, Default)]
pub struct AdviceSlot {
    issued: u64,
    text: Option<String>,
}

impl AdviceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new in-flight request. Issuing a token implicitly
    /// invalidates every earlier one.
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        RequestToken(self.issued)
    }

    /// Deliver a completed response. Returns `false` (and drops the text)
    /// when the token is stale.
    pub fn complete(&mut self, token: RequestToken, text: String) -> bool {
        if token.0 != self.issued {
            return false;
        }
        self.text = Some(text);
        true
    }

    /// The latest accepted advisory text, if any.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::habit::DailyLog;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn history_covers_exactly_seven_days_most_recent_first() {
        let mut logs = DailyLog::new();
        logs.insert(date("2026-03-14"), DailyStatus::Success);
        logs.insert(date("2026-03-10"), DailyStatus::Fail);

        let history = seven_day_history(&logs, date("2026-03-14"));

        assert_eq!(history.len(), 7);
        assert_eq!(history[0], (date("2026-03-14"), DailyStatus::Success));
        assert_eq!(history[4], (date("2026-03-10"), DailyStatus::Fail));
        assert_eq!(history[6], (date("2026-03-08"), DailyStatus::None));
    }

    #[test]
    fn stale_completion_is_rejected() {
        let mut slot = AdviceSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        // The older request resolves last -- it must not win.
        assert!(slot.complete(second, "fresh".into()));
        assert!(!slot.complete(first, "stale".into()));
        assert_eq!(slot.text(), Some("fresh"));
    }

    #[test]
    fn completion_in_issue_order_is_accepted() {
        let mut slot = AdviceSlot::new();
        let token = slot.begin();
        assert!(slot.complete(token, "advice".into()));
        assert_eq!(slot.text(), Some("advice"));
    }
}
