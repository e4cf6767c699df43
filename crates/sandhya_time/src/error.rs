//! Error types for date and timezone handling.

use thiserror::Error;

/// Errors from timezone resolution or wall-clock arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The timezone identifier is not known to the resolver.
    #[error("unresolvable timezone: {0}")]
    UnresolvableTimezone(String),
    /// Date arithmetic left the representable calendar range.
    #[error("date outside the supported calendar range")]
    DateOutOfRange,
}
