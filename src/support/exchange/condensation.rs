use crate::support::{
    psychro::{
        constants::{ENTHALPY_OF_VAPORIZATION, SECONDS_PER_HOUR},
        vapor_density,
    },
    real::Real,
};

use super::water::water_density;

/// Fraction of the saturated vapor density the air keeps after cooling.
///
/// Cooled air leaves the coil slightly below saturation.
pub const SATURATION_MARGIN: f64 = 0.95;

/// Condensate produced by a cooling coil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Condensate<T> {
    /// Mass flow, kg/h.
    pub mass_flow: T,
    /// Volumetric flow, L/h.
    pub volumetric_flow: T,
}

/// Returns the condensate from cooling `volumetric_flow` (m³/h) of air
/// carrying `inlet_humidity` (kg of vapor per m³) down to
/// `outgoing_temperature` (°C).
///
/// The outgoing air holds [`SATURATION_MARGIN`] of the saturated vapor
/// density. When the inlet air holds less than that nothing condenses and
/// both flows are zero.
pub fn cooling_condensation_flowrate<T: Real>(
    inlet_humidity: T,
    outgoing_temperature: T,
    volumetric_flow: T,
) -> Condensate<T> {
    let t_out = outgoing_temperature.widen();
    let excess = inlet_humidity.widen() - SATURATION_MARGIN * vapor_density(t_out);
    let mass_flow = (excess * volumetric_flow.widen()).max(0.0);
    let volumetric_flow = 1000.0 * mass_flow / water_density(t_out);

    Condensate {
        mass_flow: T::narrow(mass_flow),
        volumetric_flow: T::narrow(volumetric_flow),
    }
}

/// Returns the latent power (kW) released or absorbed when `mass_flow`
/// (kg/h) of water changes phase between vapor and liquid.
pub fn steam_to_water_phase_transition_power<T: Real>(mass_flow: T) -> T {
    T::narrow(mass_flow.widen() * ENTHALPY_OF_VAPORIZATION / SECONDS_PER_HOUR)
}
