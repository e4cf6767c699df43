//! Calendar event values and their idempotency key.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// Identity of a calendar event: one per window per civil day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct EventKey {
    pub date: NaiveDate,
    pub label: &'static str,
}

impl std::fmt::Display for EventKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date.format("%Y-%m-%d"), self.label)
    }
}

/// What a calendar store is asked to hold for one window.
///
/// Times are local wall-clock values in `timezone_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarEvent {
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub description: String,
    pub location: String,
    pub timezone_id: String,
}

/// Result of a single upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    Created,
    Updated,
    Unchanged,
}
