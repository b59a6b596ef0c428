//! Heat exchange between air and water streams.
//!
//! Power relations for heating or cooling an air stream, the water circuit
//! that supplies that power, and the condensate a cooler produces.
//!
//! # Units
//!
//! | Quantity          | Unit                       |
//! |-------------------|----------------------------|
//! | Temperature       | °C                         |
//! | Power             | kW                         |
//! | Air flow          | m³/h                       |
//! | Water flow        | dm³/h (L/h)                |
//! | Humidity          | kg vapor / kg dry air      |
//! | Vapor content     | kg/m³                      |
//! | Condensate        | kg/h and L/h               |
//!
//! Power relations use the absolute temperature difference, so the same
//! function covers heating and cooling. The inverse relations divide by a
//! flow or a temperature difference and return [`ExchangeError`] instead of
//! an infinite or `NaN` result.

mod air;
mod condensation;
mod error;
mod water;

pub use air::{air_heat_outgoing_temperature, air_heat_power};
pub use condensation::{
    Condensate, SATURATION_MARGIN, cooling_condensation_flowrate,
    steam_to_water_phase_transition_power,
};
pub use error::ExchangeError;
pub use water::{
    water_density, water_heat_capacity, water_heat_power, water_heat_temperature,
    water_heat_volumetric_flow_rate,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    real::Real,
};

/// Checks that a flow can be used as a divisor.
fn check_flow(flow: f64) -> Result<(), ExchangeError> {
    StrictlyPositive::check(&flow).map_err(|_| ExchangeError::NonPositiveFlow { flow })
}

/// Narrows a result, rejecting infinities and `NaN`.
fn finite<T: Real>(value: f64, context: &'static str) -> Result<T, ExchangeError> {
    if value.is_finite() {
        Ok(T::narrow(value))
    } else {
        Err(ExchangeError::NonFinite { context })
    }
}
