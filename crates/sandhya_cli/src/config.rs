use std::path::Path;

use anyhow::{Context, Result, bail};
use sandhya_solar::GeoLocation;
use sandhya_vedic::{Configuration, PeriodConfig};
use serde::Deserialize;

use crate::cli::Overrides;

/// Top-level sandhya configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SandhyaToml {
    /// Observer settings.
    #[serde(default)]
    pub location: LocationToml,

    /// Window offsets and widths.
    #[serde(default)]
    pub periods: PeriodConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocationToml {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

impl SandhyaToml {
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::parse(&toml_str)
    }

    pub fn parse(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("failed to parse TOML config")
    }

    /// Merge command-line overrides and build a validated `Configuration`.
    pub fn into_configuration(mut self, overrides: &Overrides) -> Result<Configuration> {
        if let Some(lat) = overrides.lat {
            self.location.latitude = Some(lat);
        }
        if let Some(lon) = overrides.lon {
            self.location.longitude = Some(lon);
        }
        if let Some(tz) = &overrides.tz {
            self.location.timezone = Some(tz.clone());
        }
        if let Some(m) = overrides.dawn_lead {
            self.periods.minutes_before_sunrise_for_dawn_period = m;
        }
        if let Some(m) = overrides.dawn_duration {
            self.periods.dawn_period_duration_minutes = m;
        }
        if let Some(m) = overrides.half_width {
            self.periods.sandhya_half_width_minutes = m;
        }

        let LocationToml {
            latitude,
            longitude,
            timezone,
        } = self.location;
        let (Some(lat), Some(lon), Some(tz)) = (latitude, longitude, timezone) else {
            bail!("latitude, longitude and timezone are required (config file or --lat/--lon/--tz)");
        };
        let location = GeoLocation::validated(lat, lon)?;
        sandhya_time::parse_timezone(&tz)?;

        Ok(Configuration::new(location, tz).with_periods(self.periods))
    }
}
