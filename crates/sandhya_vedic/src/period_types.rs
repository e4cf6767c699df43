//! Types for the daily Vedic windows.
//!
//! Provides the window kinds, their tunable parameters, the derived window
//! value and the per-call configuration bundle.

use chrono::{NaiveDateTime, TimeDelta};
use sandhya_solar::GeoLocation;
use serde::{Deserialize, Serialize};

use crate::format::TimeFormatter;

/// Default lead of the Brahma-muhurta start before sunrise (two muhurtas).
pub const DEFAULT_MINUTES_BEFORE_SUNRISE_FOR_DAWN_PERIOD: u32 = 96;
/// Default Brahma-muhurta length (one muhurta).
pub const DEFAULT_DAWN_PERIOD_DURATION_MINUTES: u32 = 48;
/// Default half-width of each sandhya around its anchor.
pub const DEFAULT_SANDHYA_HALF_WIDTH_MINUTES: u32 = 24;

/// Tunable offsets and widths for window derivation.
///
/// Minutes are unsigned, so every derived window has `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PeriodConfig {
    /// How long before sunrise the Brahma-muhurta starts.
    pub minutes_before_sunrise_for_dawn_period: u32,
    /// Length of the Brahma-muhurta.
    pub dawn_period_duration_minutes: u32,
    /// Half-width of the morning, midday and evening sandhya.
    pub sandhya_half_width_minutes: u32,
}

impl Default for PeriodConfig {
    fn default() -> Self {
        Self {
            minutes_before_sunrise_for_dawn_period: DEFAULT_MINUTES_BEFORE_SUNRISE_FOR_DAWN_PERIOD,
            dawn_period_duration_minutes: DEFAULT_DAWN_PERIOD_DURATION_MINUTES,
            sandhya_half_width_minutes: DEFAULT_SANDHYA_HALF_WIDTH_MINUTES,
        }
    }
}

impl PeriodConfig {
    pub(crate) fn dawn_lead(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.minutes_before_sunrise_for_dawn_period))
    }

    pub(crate) fn dawn_duration(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.dawn_period_duration_minutes))
    }

    pub(crate) fn half_width(&self) -> TimeDelta {
        TimeDelta::minutes(i64::from(self.sandhya_half_width_minutes))
    }
}

/// The four daily windows, in derivation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VedicWindowKind {
    /// Pre-dawn period reserved for spiritual practice.
    BrahmaMuhurta,
    /// Sandhya centred on sunrise.
    MorningSandhya,
    /// Sandhya centred on solar noon.
    MiddaySandhya,
    /// Sandhya centred on sunset.
    EveningSandhya,
}

impl VedicWindowKind {
    /// All kinds in the order `derive_periods` emits them.
    pub const ALL: [Self; 4] = [
        Self::BrahmaMuhurta,
        Self::MorningSandhya,
        Self::MiddaySandhya,
        Self::EveningSandhya,
    ];

    /// Fixed display label. Also the second half of an event key.
    pub fn label(self) -> &'static str {
        match self {
            Self::BrahmaMuhurta => "Brahma Muhurta",
            Self::MorningSandhya => "Morning Sandhya",
            Self::MiddaySandhya => "Midday Sandhya",
            Self::EveningSandhya => "Evening Sandhya",
        }
    }

    /// Name of the solar event the window is anchored on.
    pub fn anchor_name(self) -> &'static str {
        match self {
            Self::BrahmaMuhurta | Self::MorningSandhya => "sunrise",
            Self::MiddaySandhya => "solar noon",
            Self::EveningSandhya => "sunset",
        }
    }

    /// Configured length of this window in minutes.
    pub fn duration_minutes(self, config: &PeriodConfig) -> i64 {
        match self {
            Self::BrahmaMuhurta => i64::from(config.dawn_period_duration_minutes),
            _ => 2 * i64::from(config.sandhya_half_width_minutes),
        }
    }
}

impl std::fmt::Display for VedicWindowKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One derived time window on the local wall clock.
///
/// Invariant: `start <= end`. The anchor lies inside the window for the
/// sandhyas and after it for the Brahma-muhurta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VedicWindow {
    pub kind: VedicWindowKind,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub anchor: NaiveDateTime,
}

impl VedicWindow {
    pub fn label(&self) -> &'static str {
        self.kind.label()
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether `t` falls in `[start, end]`.
    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t <= self.end
    }

    /// `"<label>: <start>-<end> (<anchor name> at <anchor>)"`.
    pub fn describe<F: TimeFormatter + ?Sized>(&self, formatter: &F) -> String {
        format!(
            "{}: {}-{} ({} at {})",
            self.kind.label(),
            formatter.format_time(self.start),
            formatter.format_time(self.end),
            self.kind.anchor_name(),
            formatter.format_time(self.anchor),
        )
    }
}

/// Everything a daily computation needs besides the date.
///
/// Built once and passed by reference into every call. Several values can
/// coexist for different observers.
#[derive(Debug, Clone, PartialEq)]
pub struct Configuration {
    pub location: GeoLocation,
    /// IANA identifier of the zone the windows are reported in.
    pub timezone_id: String,
    pub periods: PeriodConfig,
}

impl Configuration {
    pub fn new(location: GeoLocation, timezone_id: impl Into<String>) -> Self {
        Self {
            location,
            timezone_id: timezone_id.into(),
            periods: PeriodConfig::default(),
        }
    }

    pub fn with_periods(mut self, periods: PeriodConfig) -> Self {
        self.periods = periods;
        self
    }
}
