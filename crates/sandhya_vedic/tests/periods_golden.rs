//! End-to-end window derivation against the real tz database.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use sandhya_solar::{GeoLocation, SolarError, SunPath};
use sandhya_time::{FixedOffsetResolver, TzDatabaseResolver};
use sandhya_vedic::{
    ClockFormatter, Configuration, PeriodConfig, VedicWindowKind, compute_daily_schedule,
    compute_daily_vedic_windows,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn tallinn() -> Configuration {
    Configuration::new(GeoLocation::new(59.4369, 24.7536), "Europe/Tallinn")
}

#[test]
fn tallinn_solstice_windows() {
    let s = compute_daily_schedule(date(2024, 6, 21), &tallinn(), &TzDatabaseResolver).unwrap();
    let sunrise = s.instants.sunrise;
    let noon = s.instants.solar_noon;
    let sunset = s.instants.sunset;
    assert_eq!(sunrise, at(2024, 6, 21, 4, 2));

    let [brahma, morning, midday, evening] = s.windows;
    let m = TimeDelta::minutes;
    assert_eq!((brahma.start, brahma.end), (sunrise - m(96), sunrise - m(48)));
    assert_eq!((morning.start, morning.end), (sunrise - m(24), sunrise + m(24)));
    assert_eq!((midday.start, midday.end), (noon - m(24), noon + m(24)));
    assert_eq!((evening.start, evening.end), (sunset - m(24), sunset + m(24)));
}

#[test]
fn tallinn_descriptions() {
    let w = compute_daily_vedic_windows(date(2024, 6, 21), &tallinn(), &TzDatabaseResolver)
        .unwrap();
    let text: Vec<String> = w.iter().map(|w| w.describe(&ClockFormatter)).collect();
    assert_eq!(
        text,
        [
            "Brahma Muhurta: 02:26-03:14 (sunrise at 04:02)",
            "Morning Sandhya: 03:38-04:26 (sunrise at 04:02)",
            "Midday Sandhya: 12:58-13:46 (solar noon at 13:22)",
            "Evening Sandhya: 22:18-23:06 (sunset at 22:42)",
        ]
    );
}

#[test]
fn half_width_override() {
    let config = tallinn().with_periods(PeriodConfig {
        sandhya_half_width_minutes: 30,
        ..Default::default()
    });
    let w = compute_daily_vedic_windows(date(2024, 6, 21), &config, &TzDatabaseResolver).unwrap();
    assert_eq!(w[0].duration_minutes(), 48);
    assert_eq!(w[0].start, at(2024, 6, 21, 2, 26));
    for window in &w[1..] {
        assert_eq!(window.duration_minutes(), 60);
    }
}

#[test]
fn durations_hold_for_every_day_and_latitude() {
    let resolver = FixedOffsetResolver::utc();
    let periods = PeriodConfig {
        minutes_before_sunrise_for_dawn_period: 90,
        dawn_period_duration_minutes: 45,
        sandhya_half_width_minutes: 18,
    };
    let mut day = date(2024, 1, 1);
    while day < date(2025, 1, 1) {
        for lat in (-90..=90).step_by(15) {
            let config = Configuration::new(GeoLocation::new(f64::from(lat), 77.0), "UTC")
                .with_periods(periods);
            let w = compute_daily_vedic_windows(day, &config, &resolver).unwrap();
            for window in &w {
                assert!(window.start <= window.end);
                assert_eq!(
                    window.duration_minutes(),
                    window.kind.duration_minutes(&periods),
                    "{day} lat {lat} {}",
                    window.kind
                );
            }
            assert_eq!(w[0].end - w[0].anchor, TimeDelta::minutes(-45));
        }
        day = day.succ_opt().unwrap();
    }
}

#[test]
fn identical_inputs_identical_outputs() {
    let a = compute_daily_vedic_windows(date(2024, 9, 1), &tallinn(), &TzDatabaseResolver);
    let b = compute_daily_vedic_windows(date(2024, 9, 1), &tallinn(), &TzDatabaseResolver);
    assert_eq!(a, b);
}

#[test]
fn pole_does_not_fail() {
    let config = Configuration::new(GeoLocation::new(90.0, 0.0), "UTC");
    let s = compute_daily_schedule(date(2024, 6, 21), &config, &TzDatabaseResolver).unwrap();
    assert_eq!(s.instants.sun_path, SunPath::NeverSets);
    assert_eq!(s.windows.len(), 4);
    assert_eq!(s.windows[0].kind, VedicWindowKind::BrahmaMuhurta);
}

#[test]
fn invalid_location_propagates() {
    let config = Configuration::new(GeoLocation::new(91.0, 0.0), "UTC");
    let r = compute_daily_vedic_windows(date(2024, 6, 21), &config, &TzDatabaseResolver);
    assert!(matches!(r, Err(SolarError::InvalidLocation(_))));
}

#[test]
fn unknown_zone_propagates() {
    let config = Configuration::new(GeoLocation::new(10.0, 0.0), "Atlantis/Capital");
    let r = compute_daily_vedic_windows(date(2024, 6, 21), &config, &TzDatabaseResolver);
    assert!(r.unwrap_err().is_unresolvable_timezone());
}

#[test]
fn two_locations_in_parallel() {
    let delhi = Configuration::new(GeoLocation::new(28.6139, 77.209), "Asia/Kolkata");
    let handles: Vec<_> = [tallinn(), delhi]
        .into_iter()
        .map(|config| {
            std::thread::spawn(move || {
                compute_daily_vedic_windows(date(2024, 3, 20), &config, &TzDatabaseResolver)
            })
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap().unwrap()).collect();
    assert_ne!(results[0], results[1]);
    assert_eq!(results[1][1].anchor, at(2024, 3, 20, 6, 25));
}
