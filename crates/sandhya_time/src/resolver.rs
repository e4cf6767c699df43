//! Timezone resolution: the UTC offset in effect on a civil date.
//!
//! The solar calculator never reads host timezone tables. It is handed a
//! [`TimezoneResolver`] and asks it for the offset of one date.

use chrono::{NaiveDate, Offset, TimeZone};
use chrono_tz::Tz;
use tracing::trace;

use crate::error::TimeError;

/// Local clock time at which the offset of a date is sampled.
///
/// DST transitions happen in the small hours, so noon sees the offset that
/// governs the daylight part of the day.
const SAMPLE_HOUR: u32 = 12;

/// Capability: resolve the UTC offset (minutes east of Greenwich) that a
/// timezone applies on a given civil date, daylight saving included.
pub trait TimezoneResolver {
    fn offset_minutes_for(&self, date: NaiveDate, timezone_id: &str) -> Result<i32, TimeError>;
}

impl<R: TimezoneResolver + ?Sized> TimezoneResolver for &R {
    fn offset_minutes_for(&self, date: NaiveDate, timezone_id: &str) -> Result<i32, TimeError> {
        (**self).offset_minutes_for(date, timezone_id)
    }
}

/// Parse an IANA timezone identifier into a `Tz`.
pub fn parse_timezone(timezone_id: &str) -> Result<Tz, TimeError> {
    timezone_id
        .parse::<Tz>()
        .map_err(|_| TimeError::UnresolvableTimezone(timezone_id.to_string()))
}

/// Resolver backed by the IANA tz database compiled into `chrono-tz`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabaseResolver;

impl TimezoneResolver for TzDatabaseResolver {
    fn offset_minutes_for(&self, date: NaiveDate, timezone_id: &str) -> Result<i32, TimeError> {
        let tz = parse_timezone(timezone_id)?;
        let local = date
            .and_hms_opt(SAMPLE_HOUR, 0, 0)
            .ok_or(TimeError::DateOutOfRange)?;
        // A skipped local noon (whole-day zone shifts) falls back to the
        // offset in force at that UTC instant.
        let offset = match tz.offset_from_local_datetime(&local).earliest() {
            Some(o) => o.fix(),
            None => tz.offset_from_utc_datetime(&local).fix(),
        };
        let minutes = offset.local_minus_utc() / 60;
        trace!(%date, timezone_id, minutes, "resolved utc offset");
        Ok(minutes)
    }
}

/// Resolver with a single named zone at a constant offset.
///
/// Useful where the tz database is not wanted, such as a fixed "UTC+05:30"
/// deployment or tests that pin the offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedOffsetResolver {
    timezone_id: String,
    offset_minutes: i32,
}

impl FixedOffsetResolver {
    pub fn new(timezone_id: impl Into<String>, offset_minutes: i32) -> Self {
        Self {
            timezone_id: timezone_id.into(),
            offset_minutes,
        }
    }

    /// The "UTC" zone at offset zero.
    pub fn utc() -> Self {
        Self::new("UTC", 0)
    }
}

impl TimezoneResolver for FixedOffsetResolver {
    fn offset_minutes_for(&self, _date: NaiveDate, timezone_id: &str) -> Result<i32, TimeError> {
        if timezone_id == self.timezone_id {
            Ok(self.offset_minutes)
        } else {
            Err(TimeError::UnresolvableTimezone(timezone_id.to_string()))
        }
    }
}
