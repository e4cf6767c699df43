//! Solar event times for a fixed observer.
//!
//! This crate provides:
//! - Equation of time and solar declination from NOAA Fourier series
//! - Hour angle at sunrise/sunset with a fixed refraction correction
//! - Sunrise, solar noon and sunset as local wall-clock timestamps
//!
//! Everything here is a pure function of its inputs. Timezone rules come
//! in through a [`sandhya_time::TimezoneResolver`].

pub mod error;
pub mod noaa;
pub mod riseset;
pub mod riseset_types;

pub use error::SolarError;
pub use noaa::{
    EOT_SCALE_MINUTES, equation_of_time_minutes, fractional_year_rad, solar_declination_rad,
};
pub use riseset::{
    MINUTES_PER_DEGREE, SUNRISE_ZENITH_DEG, compute_solar_instants, hour_angle_cosine,
    hour_angle_minutes, solar_event_minutes, solar_noon_minutes,
};
pub use riseset_types::{GeoLocation, SolarEventMinutes, SolarInstants, SunPath};
