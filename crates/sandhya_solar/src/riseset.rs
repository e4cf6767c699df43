//! Sunrise, solar noon and sunset from closed-form solar geometry.
//!
//! Solar noon follows from the observer's longitude, the equation of time
//! and the local UTC offset. Sunrise and sunset sit symmetrically around
//! noon at the hour angle where the Sun's centre is 0.833 deg below the
//! horizon (34' refraction plus 16' semidiameter).

use sandhya_time::{CalendarDay, TimezoneResolver, wall_clock_from_minutes};
use tracing::debug;

use crate::error::SolarError;
use crate::noaa::{equation_of_time_minutes, fractional_year_rad, solar_declination_rad};
use crate::riseset_types::{GeoLocation, SolarEventMinutes, SolarInstants, SunPath};

/// Zenith angle of the Sun's centre at apparent sunrise/sunset, in degrees.
pub const SUNRISE_ZENITH_DEG: f64 = 90.833;

/// Minutes of clock time per degree of Earth rotation.
pub const MINUTES_PER_DEGREE: f64 = 4.0;

/// Solar noon in fractional minutes after local midnight.
///
/// `noon = 720 − 4 × longitude − eot + utc_offset`
pub fn solar_noon_minutes(longitude_deg: f64, eot_minutes: f64, utc_offset_minutes: i32) -> f64 {
    720.0 - MINUTES_PER_DEGREE * longitude_deg - eot_minutes + f64::from(utc_offset_minutes)
}

/// Unclamped cosine of the sunrise hour angle.
///
/// `cos H = cos(90.833°) / (cos φ · cos δ) − tan φ · tan δ`
///
/// Falls outside [-1, 1] when the Sun never crosses the horizon that day.
pub fn hour_angle_cosine(latitude_rad: f64, declination_rad: f64) -> f64 {
    SUNRISE_ZENITH_DEG.to_radians().cos() / (latitude_rad.cos() * declination_rad.cos())
        - latitude_rad.tan() * declination_rad.tan()
}

/// Half the day length in minutes for a given hour-angle cosine.
///
/// The cosine is clamped to [-1, 1] first: polar night yields 0, midnight
/// sun yields 720.
pub fn hour_angle_minutes(cos_h: f64) -> f64 {
    cos_h.clamp(-1.0, 1.0).acos().to_degrees() * MINUTES_PER_DEGREE
}

/// Sunrise, solar noon and sunset as fractional minutes after local midnight.
pub fn solar_event_minutes(
    day_of_year: u32,
    location: &GeoLocation,
    utc_offset_minutes: i32,
) -> SolarEventMinutes {
    let gamma = fractional_year_rad(day_of_year);
    let eot = equation_of_time_minutes(gamma);
    let decl = solar_declination_rad(gamma);

    let noon = solar_noon_minutes(location.longitude_deg, eot, utc_offset_minutes);
    let cos_h = hour_angle_cosine(location.latitude_rad(), decl);
    let ha = hour_angle_minutes(cos_h);

    debug!(
        day_of_year,
        eot_min = eot,
        decl_deg = decl.to_degrees(),
        cos_h,
        noon_min = noon,
        "solar geometry"
    );

    SolarEventMinutes {
        sunrise: noon - ha,
        solar_noon: noon,
        sunset: noon + ha,
        sun_path: SunPath::from_cosine(cos_h),
    }
}

/// Compute sunrise, solar noon and sunset for one civil day.
///
/// # Arguments
/// * `day` - the civil date and the timezone its clock is read in
/// * `location` - observer position, validated here
/// * `resolver` - source of the UTC offset (DST aware) for `day`
///
/// # Errors
/// * `SolarError::InvalidLocation` for out-of-range coordinates
/// * `SolarError::Time(TimeError::UnresolvableTimezone)` for an unknown zone
///
/// Events outside the civil day roll over onto the neighbouring date.
pub fn compute_solar_instants<R>(
    day: &CalendarDay,
    location: &GeoLocation,
    resolver: &R,
) -> Result<SolarInstants, SolarError>
where
    R: TimezoneResolver + ?Sized,
{
    location.validate()?;
    let offset = resolver.offset_minutes_for(day.date, &day.timezone_id)?;
    let minutes = solar_event_minutes(day.day_of_year(), location, offset);

    let instants = SolarInstants {
        sunrise: wall_clock_from_minutes(day.date, minutes.sunrise)?,
        solar_noon: wall_clock_from_minutes(day.date, minutes.solar_noon)?,
        sunset: wall_clock_from_minutes(day.date, minutes.sunset)?,
        sun_path: minutes.sun_path,
    };
    debug!(
        %day,
        %location,
        sunrise = %instants.sunrise,
        solar_noon = %instants.solar_noon,
        sunset = %instants.sunset,
        "solar instants"
    );
    Ok(instants)
}
