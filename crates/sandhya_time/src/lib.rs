//! Civil-date and local-clock support for the sandhya workspace.
//!
//! This crate provides:
//! - `CalendarDay`, a civil date paired with an IANA timezone identifier
//! - The `TimezoneResolver` capability (tz database or fixed offset)
//! - Minute-of-day to wall-clock conversion with day rollover

pub mod calendar_day;
pub mod clock;
pub mod error;
pub mod resolver;

pub use calendar_day::CalendarDay;
pub use clock::{MINUTES_PER_DAY, minutes_since_midnight, wall_clock_from_minutes};
pub use error::TimeError;
pub use resolver::{FixedOffsetResolver, TimezoneResolver, TzDatabaseResolver, parse_timezone};
