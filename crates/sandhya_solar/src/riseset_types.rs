//! Types for sunrise, solar noon and sunset calculations.
//!
//! Provides the observer location, the raw minute-of-day event values and
//! the wall-clock result type.

use chrono::NaiveDateTime;

use crate::error::SolarError;

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location without validating it. See [`GeoLocation::validated`].
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
        }
    }

    /// Create a location, rejecting out-of-range or non-finite coordinates.
    pub fn validated(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SolarError> {
        let loc = Self::new(latitude_deg, longitude_deg);
        loc.validate()?;
        Ok(loc)
    }

    /// Check both coordinates against their ranges.
    pub fn validate(&self) -> Result<(), SolarError> {
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(SolarError::InvalidLocation(
                "latitude must be within [-90, 90] degrees",
            ));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(SolarError::InvalidLocation(
                "longitude must be within [-180, 180] degrees",
            ));
        }
        Ok(())
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}

impl std::fmt::Display for GeoLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude_deg, self.longitude_deg)
    }
}

/// How the Sun's daily path relates to the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SunPath {
    /// The Sun crosses the horizon twice.
    RisesAndSets,
    /// Midnight sun: hour-angle cosine below -1, clamped to a full day.
    NeverSets,
    /// Polar night: hour-angle cosine above 1, events collapse onto noon.
    NeverRises,
}

impl SunPath {
    /// Classify an unclamped hour-angle cosine.
    pub fn from_cosine(cos_h: f64) -> Self {
        if cos_h > 1.0 {
            Self::NeverRises
        } else if cos_h < -1.0 {
            Self::NeverSets
        } else {
            Self::RisesAndSets
        }
    }
}

/// Solar events as fractional minutes after local midnight.
///
/// Values may be negative or exceed 1440 when an event falls on the
/// neighbouring civil day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEventMinutes {
    pub sunrise: f64,
    pub solar_noon: f64,
    pub sunset: f64,
    pub sun_path: SunPath,
}

/// Sunrise, solar noon and sunset on the local wall clock, floored to the
/// minute.
///
/// Invariant: `sunrise <= solar_noon <= sunset`. At polar latitudes the
/// three may coincide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SolarInstants {
    pub sunrise: NaiveDateTime,
    pub solar_noon: NaiveDateTime,
    pub sunset: NaiveDateTime,
    pub sun_path: SunPath,
}

impl SolarInstants {
    /// Minutes of daylight between sunrise and sunset.
    pub fn day_length_minutes(&self) -> i64 {
        (self.sunset - self.sunrise).num_minutes()
    }
}
