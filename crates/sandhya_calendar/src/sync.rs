//! One pass of the daily pipeline: compute, build events, upsert.

use chrono::{DateTime, NaiveDate, Utc};
use sandhya_solar::SolarError;
use sandhya_time::{TimeError, TimezoneResolver, parse_timezone};
use sandhya_vedic::{Configuration, TimeFormatter, VedicWindow, compute_daily_vedic_windows};
use thiserror::Error;
use tracing::info;

use crate::event::{CalendarEvent, EventKey, UpsertOutcome};
use crate::sink::EventSink;

/// Errors from a sync pass.
#[derive(Debug, Error)]
pub enum SyncError<E>
where
    E: std::error::Error + 'static,
{
    /// The windows could not be computed. Retrying will not help.
    #[error("window computation failed: {0}")]
    Solar(#[from] SolarError),
    /// The store rejected an upsert. Re-running the whole pass is safe.
    #[error("calendar store rejected {key}: {source}")]
    Sink {
        key: EventKey,
        #[source]
        source: E,
    },
}

/// Per-key outcomes of one sync pass, in window order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    pub date: NaiveDate,
    pub outcomes: Vec<(EventKey, UpsertOutcome)>,
}

impl SyncReport {
    pub fn count(&self, outcome: UpsertOutcome) -> usize {
        self.outcomes.iter().filter(|(_, o)| *o == outcome).count()
    }
}

/// Keyed calendar events for one day's windows.
pub fn build_events<F>(
    date: NaiveDate,
    windows: &[VedicWindow],
    config: &Configuration,
    formatter: &F,
) -> Vec<(EventKey, CalendarEvent)>
where
    F: TimeFormatter + ?Sized,
{
    windows
        .iter()
        .map(|w| {
            let key = EventKey {
                date,
                label: w.label(),
            };
            let event = CalendarEvent {
                title: w.label().to_string(),
                start: w.start,
                end: w.end,
                description: w.describe(formatter),
                location: config.location.to_string(),
                timezone_id: config.timezone_id.clone(),
            };
            (key, event)
        })
        .collect()
}

/// Compute `date`'s windows and upsert one event per window into `sink`.
///
/// Stops at the first store failure. Events already written stay written;
/// a retry re-upserts them as `Unchanged`.
pub fn sync_day<S, R, F>(
    sink: &mut S,
    date: NaiveDate,
    config: &Configuration,
    resolver: &R,
    formatter: &F,
) -> Result<SyncReport, SyncError<S::Error>>
where
    S: EventSink,
    S::Error: std::error::Error + 'static,
    R: TimezoneResolver + ?Sized,
    F: TimeFormatter + ?Sized,
{
    let windows = compute_daily_vedic_windows(date, config, resolver)?;
    let mut outcomes = Vec::with_capacity(windows.len());
    for (key, event) in build_events(date, &windows, config, formatter) {
        let outcome = sink
            .upsert_event(key, event)
            .map_err(|source| SyncError::Sink { key, source })?;
        outcomes.push((key, outcome));
    }

    let report = SyncReport { date, outcomes };
    info!(
        %date,
        created = report.count(UpsertOutcome::Created),
        updated = report.count(UpsertOutcome::Updated),
        unchanged = report.count(UpsertOutcome::Unchanged),
        "calendar sync"
    );
    Ok(report)
}

/// The civil date after `now`, as seen on the clock of `timezone_id`.
pub fn tomorrow_in(now: DateTime<Utc>, timezone_id: &str) -> Result<NaiveDate, TimeError> {
    let tz = parse_timezone(timezone_id)?;
    now.with_timezone(&tz)
        .date_naive()
        .succ_opt()
        .ok_or(TimeError::DateOutOfRange)
}
