use thiserror::Error;

use crate::support::numeric::NumericError;

/// Errors that can occur while working with a fan curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FanError {
    /// The performance table is invalid, or a query fell outside it.
    #[error("fan curve error")]
    Curve(#[from] NumericError),

    /// The system curve does not cross the fan curve within the tabulated flows.
    #[error("system curve does not cross the fan curve")]
    NoDutyPoint,
}
