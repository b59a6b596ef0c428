use thiserror::Error;

/// Errors returned when a heat exchange relation cannot be inverted.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ExchangeError {
    /// A volumetric flow used as a divisor was zero, negative or `NaN`.
    #[error("volumetric flow must be strictly positive, got {flow}")]
    NonPositiveFlow { flow: f64 },

    /// Inlet and outlet temperatures are equal (or `NaN`), so no flow can carry the power.
    #[error("inlet and outlet temperatures must differ")]
    ZeroTemperatureDifference,

    /// The result is infinite or `NaN`, typically from a temperature at absolute zero.
    #[error("non-finite result: {context}")]
    NonFinite { context: &'static str },
}
