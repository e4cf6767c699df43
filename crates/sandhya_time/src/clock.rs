//! Minute-of-day to local wall-clock conversion.
//!
//! Solar events are first computed as fractional minutes after local
//! midnight. Those values can be negative (the event falls on the previous
//! civil day) or exceed one day (it falls on the next one). Conversion
//! floors to a whole minute and then adds that offset to midnight, so the
//! calendar date rolls over instead of the hour field wrapping.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::error::TimeError;

/// Minutes in one civil day.
pub const MINUTES_PER_DAY: f64 = 1440.0;

/// Convert fractional minutes after `date`'s local midnight to a wall-clock
/// timestamp, truncating the sub-minute part toward negative infinity.
///
/// `-1.7` becomes 23:58 on the previous day, `1441.3` becomes 00:01 on the
/// next day.
pub fn wall_clock_from_minutes(date: NaiveDate, minutes: f64) -> Result<NaiveDateTime, TimeError> {
    if !minutes.is_finite() {
        return Err(TimeError::DateOutOfRange);
    }
    let whole = minutes.floor() as i64;
    let offset = TimeDelta::try_minutes(whole).ok_or(TimeError::DateOutOfRange)?;
    date.and_time(NaiveTime::MIN)
        .checked_add_signed(offset)
        .ok_or(TimeError::DateOutOfRange)
}

/// Whole minutes between `date`'s local midnight and `t`. Negative when `t`
/// falls on an earlier day.
pub fn minutes_since_midnight(date: NaiveDate, t: NaiveDateTime) -> i64 {
    (t - date.and_time(NaiveTime::MIN)).num_minutes()
}
