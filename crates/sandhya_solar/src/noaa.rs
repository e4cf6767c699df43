//! NOAA Fourier-series approximations for the Sun's apparent motion.
//!
//! Both series are driven by the fractional-year angle `γ` and are accurate
//! to well under a minute of time over the modern era. Coefficients are the
//! empirical values published with the NOAA solar calculator.

use std::f64::consts::TAU;

/// Days in the year used by the fractional-year angle (leap years included).
const YEAR_DAYS: f64 = 365.0;

/// Scale from the radian-valued series to minutes of time.
pub const EOT_SCALE_MINUTES: f64 = 229.18;

/// Fractional-year angle in radians for a 1-based day of year.
///
/// `γ = 2π/365 × (day_of_year − 1)`
///
/// Day 366 of a leap year maps to exactly `2π`, the same point on the cycle
/// as January 1st.
pub fn fractional_year_rad(day_of_year: u32) -> f64 {
    TAU / YEAR_DAYS * (f64::from(day_of_year) - 1.0)
}

/// Equation of time in minutes (apparent minus mean solar time).
///
/// Positive when the sundial runs ahead of the clock (early November),
/// negative when it lags (mid February).
pub fn equation_of_time_minutes(gamma: f64) -> f64 {
    EOT_SCALE_MINUTES
        * (0.000_075 + 0.001_868 * gamma.cos()
            - 0.032_077 * gamma.sin()
            - 0.014_615 * (2.0 * gamma).cos()
            - 0.040_849 * (2.0 * gamma).sin())
}

/// Solar declination in radians.
pub fn solar_declination_rad(gamma: f64) -> f64 {
    0.006_918 - 0.399_912 * gamma.cos() + 0.070_257 * gamma.sin()
        - 0.006_758 * (2.0 * gamma).cos()
        + 0.000_907 * (2.0 * gamma).sin()
        - 0.002_697 * (3.0 * gamma).cos()
        + 0.001_48 * (3.0 * gamma).sin()
}
