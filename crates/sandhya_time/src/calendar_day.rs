//! A civil date bound to the timezone its local clock is read in.

use chrono::{Datelike, NaiveDate};

/// Civil date with the IANA timezone used for local-clock conversions.
///
/// Carries no time of day.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub timezone_id: String,
}

impl CalendarDay {
    pub fn new(date: NaiveDate, timezone_id: impl Into<String>) -> Self {
        Self {
            date,
            timezone_id: timezone_id.into(),
        }
    }

    /// 1-based ordinal day within the date's year (1..=366).
    pub fn day_of_year(&self) -> u32 {
        self.date.ordinal()
    }
}

impl std::fmt::Display for CalendarDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]", self.date.format("%Y-%m-%d"), self.timezone_id)
    }
}
