//! Daily sync against in-memory and failing stores.

use chrono::NaiveDate;
use sandhya_calendar::{
    CalendarEvent, EventKey, EventSink, InMemoryCalendar, SyncError, UpsertOutcome, build_events,
    sync_day,
};
use sandhya_solar::GeoLocation;
use sandhya_time::TzDatabaseResolver;
use sandhya_vedic::{
    ClockFormatter, Configuration, PeriodConfig, VedicWindowKind, compute_daily_vedic_windows,
};

fn tallinn() -> Configuration {
    Configuration::new(GeoLocation::new(59.4369, 24.7536), "Europe/Tallinn")
}

fn solstice() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 21).unwrap()
}

#[test]
fn second_sync_changes_nothing() {
    let mut cal = InMemoryCalendar::new();
    let first = sync_day(&mut cal, solstice(), &tallinn(), &TzDatabaseResolver, &ClockFormatter)
        .unwrap();
    assert_eq!(first.count(UpsertOutcome::Created), 4);

    let second = sync_day(&mut cal, solstice(), &tallinn(), &TzDatabaseResolver, &ClockFormatter)
        .unwrap();
    assert_eq!(second.count(UpsertOutcome::Unchanged), 4);
    assert_eq!(cal.len(), 4);
}

#[test]
fn consecutive_days_accumulate() {
    let mut cal = InMemoryCalendar::new();
    let next = solstice().succ_opt().unwrap();
    for date in [solstice(), next] {
        sync_day(&mut cal, date, &tallinn(), &TzDatabaseResolver, &ClockFormatter).unwrap();
    }
    assert_eq!(cal.len(), 8);
}

#[test]
fn config_change_updates_in_place() {
    let mut cal = InMemoryCalendar::new();
    sync_day(&mut cal, solstice(), &tallinn(), &TzDatabaseResolver, &ClockFormatter).unwrap();

    let wider = tallinn().with_periods(PeriodConfig {
        sandhya_half_width_minutes: 30,
        ..Default::default()
    });
    let report =
        sync_day(&mut cal, solstice(), &wider, &TzDatabaseResolver, &ClockFormatter).unwrap();
    assert_eq!(report.count(UpsertOutcome::Unchanged), 1);
    assert_eq!(report.count(UpsertOutcome::Updated), 3);
    assert_eq!(cal.len(), 4);

    let key = EventKey {
        date: solstice(),
        label: VedicWindowKind::EveningSandhya.label(),
    };
    let evening = cal.get(&key).unwrap();
    assert_eq!(evening.description, "Evening Sandhya: 22:12-23:12 (sunset at 22:42)");
}

#[test]
fn events_carry_location_and_zone() {
    let config = tallinn();
    let windows = compute_daily_vedic_windows(solstice(), &config, &TzDatabaseResolver).unwrap();
    let events = build_events(solstice(), &windows, &config, &ClockFormatter);
    assert_eq!(events.len(), 4);
    for (key, event) in &events {
        assert_eq!(key.date, solstice());
        assert_eq!(key.label, event.title);
        assert_eq!(event.location, "59.4369, 24.7536");
        assert_eq!(event.timezone_id, "Europe/Tallinn");
    }
}

#[test]
fn events_serialize_as_local_times() {
    let config = tallinn();
    let windows = compute_daily_vedic_windows(solstice(), &config, &TzDatabaseResolver).unwrap();
    let events = build_events(solstice(), &windows, &config, &ClockFormatter);
    let json = serde_json::to_value(&events[0].1).unwrap();
    assert_eq!(json["title"], "Brahma Muhurta");
    assert_eq!(json["start"], "2024-06-21T02:26:00");
    assert_eq!(json["end"], "2024-06-21T03:14:00");
}

#[derive(Debug, thiserror::Error)]
#[error("quota exceeded")]
struct QuotaExceeded;

/// Accepts a fixed number of writes, then fails.
struct FlakyCalendar {
    inner: InMemoryCalendar,
    remaining: usize,
}

impl EventSink for FlakyCalendar {
    type Error = QuotaExceeded;

    fn upsert_event(
        &mut self,
        key: EventKey,
        event: CalendarEvent,
    ) -> Result<UpsertOutcome, QuotaExceeded> {
        if self.remaining == 0 {
            return Err(QuotaExceeded);
        }
        self.remaining -= 1;
        Ok(self.inner.upsert_event(key, event).unwrap_or_else(|e| match e {}))
    }
}

#[test]
fn sink_failure_then_retry() {
    let mut cal = FlakyCalendar {
        inner: InMemoryCalendar::new(),
        remaining: 2,
    };
    let err = sync_day(&mut cal, solstice(), &tallinn(), &TzDatabaseResolver, &ClockFormatter)
        .unwrap_err();
    match &err {
        SyncError::Sink { key, .. } => assert_eq!(key.label, "Midday Sandhya"),
        other => panic!("expected sink error, got {other:?}"),
    }
    assert!(err.to_string().contains("quota exceeded"));

    cal.remaining = 10;
    let report = sync_day(&mut cal, solstice(), &tallinn(), &TzDatabaseResolver, &ClockFormatter)
        .unwrap();
    assert_eq!(report.count(UpsertOutcome::Unchanged), 2);
    assert_eq!(report.count(UpsertOutcome::Created), 2);
    assert_eq!(cal.inner.len(), 4);
}

#[test]
fn bad_location_never_touches_store() {
    let mut cal = InMemoryCalendar::new();
    let config = Configuration::new(GeoLocation::new(0.0, 200.0), "UTC");
    let err =
        sync_day(&mut cal, solstice(), &config, &TzDatabaseResolver, &ClockFormatter).unwrap_err();
    assert!(matches!(err, SyncError::Solar(_)));
    assert!(cal.is_empty());
}
