use std::time::Duration;
use thiserror::Error;

/// Failures of a temperature load.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WeatherError {
    #[error("Weather service unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("Weather request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
}
