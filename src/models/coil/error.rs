use thiserror::Error;

use crate::support::{constraint::ConstraintError, exchange::ExchangeError, psychro::PsychroError};

use super::CoilMode;

/// Errors that can occur while computing a coil duty.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoilError {
    /// A heat exchange calculation failed.
    #[error("heat exchange failed")]
    Exchange(#[from] ExchangeError),

    /// The outlet air state could not be built.
    #[error("invalid air state")]
    Psychro(#[from] PsychroError),

    /// The air flow is zero, negative or `NaN`.
    #[error("air flow must be strictly positive")]
    NonPositiveAirFlow(#[source] ConstraintError),

    /// A heating coil was asked to cool the air, or the other way round.
    #[error("a {mode} coil cannot take air from {inlet} °C to {outlet} °C")]
    WrongDirection {
        /// How the coil's water circuit works.
        mode: CoilMode,
        /// Inlet air temperature, °C.
        inlet: f64,
        /// Requested outlet air temperature, °C.
        outlet: f64,
    },

    /// The requested outlet air temperature reaches or passes the supply water.
    #[error("outlet air at {outlet} °C is not reachable with supply water at {supply} °C")]
    BeyondSupply {
        /// Supply water temperature, °C.
        supply: f64,
        /// Requested outlet air temperature, °C.
        outlet: f64,
    },
}
