//! Derivation of the four daily windows from sunrise, noon and sunset.
//!
//! Every window is fixed minute arithmetic on a solar instant. Nothing here
//! goes back to the solar geometry.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use sandhya_solar::{SolarError, SolarInstants, compute_solar_instants};
use sandhya_time::{CalendarDay, TimeError, TimezoneResolver};
use tracing::trace;

use crate::period_types::{Configuration, PeriodConfig, VedicWindow, VedicWindowKind};

/// Derive the Brahma-muhurta, morning, midday and evening windows.
///
/// | Window | start | end |
/// |---|---|---|
/// | Brahma-muhurta | sunrise − lead | start + duration |
/// | Morning sandhya | sunrise − half | sunrise + half |
/// | Midday sandhya | noon − half | start + 2 × half |
/// | Evening sandhya | sunset − half | sunset + half |
///
/// The midday end is taken from its start, not from noon.
///
/// # Errors
/// `TimeError::DateOutOfRange` if a shifted timestamp leaves chrono's
/// representable range.
pub fn derive_periods(
    instants: &SolarInstants,
    config: &PeriodConfig,
) -> Result<[VedicWindow; 4], TimeError> {
    let half = config.half_width();

    let dawn_start = earlier(instants.sunrise, config.dawn_lead())?;
    let brahma = VedicWindow {
        kind: VedicWindowKind::BrahmaMuhurta,
        start: dawn_start,
        end: later(dawn_start, config.dawn_duration())?,
        anchor: instants.sunrise,
    };

    let morning = VedicWindow {
        kind: VedicWindowKind::MorningSandhya,
        start: earlier(instants.sunrise, half)?,
        end: later(instants.sunrise, half)?,
        anchor: instants.sunrise,
    };

    let midday_start = earlier(instants.solar_noon, half)?;
    let midday = VedicWindow {
        kind: VedicWindowKind::MiddaySandhya,
        start: midday_start,
        end: later(midday_start, half * 2)?,
        anchor: instants.solar_noon,
    };

    let evening = VedicWindow {
        kind: VedicWindowKind::EveningSandhya,
        start: earlier(instants.sunset, half)?,
        end: later(instants.sunset, half)?,
        anchor: instants.sunset,
    };

    let windows = [brahma, morning, midday, evening];
    for w in &windows {
        trace!(kind = %w.kind, start = %w.start, end = %w.end, "derived window");
    }
    Ok(windows)
}

fn earlier(t: NaiveDateTime, by: TimeDelta) -> Result<NaiveDateTime, TimeError> {
    t.checked_sub_signed(by).ok_or(TimeError::DateOutOfRange)
}

fn later(t: NaiveDateTime, by: TimeDelta) -> Result<NaiveDateTime, TimeError> {
    t.checked_add_signed(by).ok_or(TimeError::DateOutOfRange)
}

/// Solar instants and derived windows for one civil day.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyWindows {
    pub day: CalendarDay,
    pub instants: SolarInstants,
    pub windows: [VedicWindow; 4],
}

/// Run the solar calculation and window derivation for `date`, keeping the
/// intermediate instants.
pub fn compute_daily_schedule<R>(
    date: NaiveDate,
    config: &Configuration,
    resolver: &R,
) -> Result<DailyWindows, SolarError>
where
    R: TimezoneResolver + ?Sized,
{
    let day = CalendarDay::new(date, config.timezone_id.clone());
    let instants = compute_solar_instants(&day, &config.location, resolver)?;
    let windows = derive_periods(&instants, &config.periods)?;
    Ok(DailyWindows {
        day,
        instants,
        windows,
    })
}

/// The four Vedic windows for `date` at the configured location and zone.
///
/// Pure: identical inputs give identical outputs, so callers may retry the
/// whole pipeline freely.
pub fn compute_daily_vedic_windows<R>(
    date: NaiveDate,
    config: &Configuration,
    resolver: &R,
) -> Result<[VedicWindow; 4], SolarError>
where
    R: TimezoneResolver + ?Sized,
{
    Ok(compute_daily_schedule(date, config, resolver)?.windows)
}
