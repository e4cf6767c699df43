//! Error types for solar event calculations.

use sandhya_time::TimeError;
use thiserror::Error;

/// Errors from solar event calculations.
///
/// Polar day and polar night are not errors: the hour angle is clamped and
/// the events collapse onto solar noon or spread to a full day.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SolarError {
    /// Latitude or longitude outside its valid range, or not finite.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Timezone resolution or wall-clock conversion failed.
    #[error(transparent)]
    Time(#[from] TimeError),
}

impl SolarError {
    /// Whether the failure came from an unknown timezone identifier.
    pub fn is_unresolvable_timezone(&self) -> bool {
        matches!(self, Self::Time(TimeError::UnresolvableTimezone(_)))
    }
}
