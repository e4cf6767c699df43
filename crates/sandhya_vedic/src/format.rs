//! Rendering of wall-clock times for window descriptions.

use chrono::NaiveDateTime;

/// Turns a local wall-clock timestamp into display text.
pub trait TimeFormatter {
    fn format_time(&self, t: NaiveDateTime) -> String;
}

/// `HH:MM` on a 24-hour clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockFormatter;

impl TimeFormatter for ClockFormatter {
    fn format_time(&self, t: NaiveDateTime) -> String {
        t.format("%H:%M").to_string()
    }
}
