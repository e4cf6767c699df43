//! Daily Vedic time windows anchored on sunrise, solar noon and sunset.
//!
//! This crate provides:
//! - `PeriodConfig`, the tunable offsets and widths of the windows
//! - `derive_periods`, the fixed offset rules applied to solar instants
//! - `compute_daily_vedic_windows`, the end-to-end entry point
//! - `TimeFormatter`, kept apart from the window data for rendering

pub mod format;
pub mod period_types;
pub mod periods;

pub use format::{ClockFormatter, TimeFormatter};
pub use period_types::{Configuration, PeriodConfig, VedicWindow, VedicWindowKind};
pub use periods::{DailyWindows, compute_daily_schedule, compute_daily_vedic_windows, derive_periods};
