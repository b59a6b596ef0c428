use thiserror::Error;

/// Errors that may occur when building or updating an [`AirState`](super::AirState).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum PsychroError {
    /// A humidity ratio (%) or absolute humidity was negative or `NaN`.
    #[error("invalid humidity: {value}")]
    InvalidHumidity { value: f64 },

    /// The temperature is at or below absolute zero, or is `NaN`.
    #[error("temperature {temperature} °C is at or below absolute zero")]
    BelowAbsoluteZero { temperature: f64 },
}
