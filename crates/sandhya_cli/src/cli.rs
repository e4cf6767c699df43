use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

/// Daily Vedic time windows from sunrise, solar noon and sunset.
#[derive(Parser)]
#[command(name = "sandhya", version, about = "Daily Vedic window calculator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: Overrides,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Values that take precedence over the configuration file.
#[derive(Args, Debug, Default, Clone)]
pub struct Overrides {
    /// Latitude in degrees, north positive.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude in degrees, east positive.
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub lon: Option<f64>,

    /// IANA timezone identifier (e.g. Europe/Tallinn).
    #[arg(long, global = true)]
    pub tz: Option<String>,

    /// Minutes before sunrise at which the Brahma-muhurta starts.
    #[arg(long, global = true)]
    pub dawn_lead: Option<u32>,

    /// Length of the Brahma-muhurta in minutes.
    #[arg(long, global = true)]
    pub dawn_duration: Option<u32>,

    /// Half-width of each sandhya in minutes.
    #[arg(long, global = true)]
    pub half_width: Option<u32>,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print sunrise, solar noon and sunset.
    Solar(DateArgs),
    /// Print the four Vedic windows with descriptions.
    Windows(DateArgs),
    /// Print calendar events for the windows as JSON.
    Events(DateArgs),
}

#[derive(Args)]
pub struct DateArgs {
    /// Civil date (YYYY-MM-DD). Defaults to tomorrow in the configured zone.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,
}
