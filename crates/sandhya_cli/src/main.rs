mod cli;
mod config;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{NaiveDate, Utc};
use clap::Parser;
use sandhya_calendar::{
    CalendarEvent, EventKey, InMemoryCalendar, SyncReport, UpsertOutcome, sync_day, tomorrow_in,
};
use sandhya_time::TzDatabaseResolver;
use sandhya_vedic::{
    ClockFormatter, Configuration, TimeFormatter, compute_daily_schedule,
    compute_daily_vedic_windows,
};
use serde::Serialize;
use tracing::info;

use crate::cli::{Cli, Command, DateArgs};
use crate::config::SandhyaToml;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let file = match &cli.config {
        Some(path) => SandhyaToml::load(path)?,
        None => SandhyaToml::default(),
    };
    let config = file.into_configuration(&cli.overrides)?;
    info!(location = %config.location, tz = %config.timezone_id, "configuration loaded");

    match cli.command {
        Command::Solar(args) => solar(&config, &args),
        Command::Windows(args) => windows(&config, &args),
        Command::Events(args) => events(&config, &args),
    }
}

fn target_date(config: &Configuration, args: &DateArgs) -> Result<NaiveDate> {
    match args.date {
        Some(d) => Ok(d),
        None => tomorrow_in(Utc::now(), &config.timezone_id).context("cannot determine tomorrow"),
    }
}

fn solar(config: &Configuration, args: &DateArgs) -> Result<()> {
    let date = target_date(config, args)?;
    let s = compute_daily_schedule(date, config, &TzDatabaseResolver)?;
    let fmt = ClockFormatter;
    println!("{} at {}", s.day, config.location);
    println!("  Sunrise:    {}", fmt.format_time(s.instants.sunrise));
    println!("  Solar noon: {}", fmt.format_time(s.instants.solar_noon));
    println!("  Sunset:     {}", fmt.format_time(s.instants.sunset));
    println!("  Daylight:   {} min ({:?})", s.instants.day_length_minutes(), s.instants.sun_path);
    Ok(())
}

fn windows(config: &Configuration, args: &DateArgs) -> Result<()> {
    let date = target_date(config, args)?;
    let windows = compute_daily_vedic_windows(date, config, &TzDatabaseResolver)?;
    println!("{date} [{}] at {}", config.timezone_id, config.location);
    for w in &windows {
        println!("  {}", w.describe(&ClockFormatter));
    }
    Ok(())
}

#[derive(Serialize)]
struct SyncedEvent<'a> {
    key: &'a EventKey,
    outcome: UpsertOutcome,
    event: &'a CalendarEvent,
}

fn events(config: &Configuration, args: &DateArgs) -> Result<()> {
    let date = target_date(config, args)?;
    let mut calendar = InMemoryCalendar::new();
    let report = sync_day(&mut calendar, date, config, &TzDatabaseResolver, &ClockFormatter)?;
    println!("{}", render_events(&calendar, &report)?);
    eprintln!("{}", sync_summary(&report));
    Ok(())
}

/// JSON array of the synced events in window order, each with its upsert outcome.
fn render_events(calendar: &InMemoryCalendar, report: &SyncReport) -> Result<String> {
    let out: Vec<SyncedEvent<'_>> = report
        .outcomes
        .iter()
        .filter_map(|(key, outcome)| {
            calendar.get(key).map(|event| SyncedEvent {
                key,
                outcome: *outcome,
                event,
            })
        })
        .collect();
    serde_json::to_string_pretty(&out).context("failed to serialize events")
}

fn sync_summary(report: &SyncReport) -> String {
    format!(
        "synced {}: {} created, {} updated, {} unchanged",
        report.date,
        report.count(UpsertOutcome::Created),
        report.count(UpsertOutcome::Updated),
        report.count(UpsertOutcome::Unchanged),
    )
}
