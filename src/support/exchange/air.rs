use crate::support::{
    psychro::{
        air_density,
        constants::{DRY_AIR_HEAT_CAPACITY, SECONDS_PER_HOUR, WATER_STEAM_HEAT_CAPACITY},
    },
    real::Real,
};

use super::{ExchangeError, check_flow, finite};

/// Volumetric heat capacity rate per m³/h of moist air at `inlet_temperature`, kW/K.
fn capacity_per_flow(inlet_temperature: f64, humidity: f64) -> f64 {
    air_density(inlet_temperature)
        * (DRY_AIR_HEAT_CAPACITY + humidity * WATER_STEAM_HEAT_CAPACITY)
        / SECONDS_PER_HOUR
}

/// Returns the power (kW) to bring `volumetric_flow` (m³/h) of air from
/// `inlet_temperature` to `outgoing_temperature` (°C).
///
/// Heating and cooling are symmetric: only `|T_out − T_in|` matters. Air
/// density is taken at the inlet.
pub fn air_heat_power<T: Real>(
    inlet_temperature: T,
    humidity: T,
    outgoing_temperature: T,
    volumetric_flow: T,
) -> T {
    let delta = (outgoing_temperature.widen() - inlet_temperature.widen()).abs();
    T::narrow(
        delta
            * volumetric_flow.widen()
            * capacity_per_flow(inlet_temperature.widen(), humidity.widen()),
    )
}

/// Returns the outgoing air temperature (°C) after `power` (kW) is added to
/// `volumetric_flow` (m³/h) of air entering at `inlet_temperature`.
///
/// Positive power heats, negative power cools. The result is the inlet
/// temperature plus the power-implied change.
///
/// # Errors
///
/// - [`ExchangeError::NonPositiveFlow`] if the flow is not strictly positive.
/// - [`ExchangeError::NonFinite`] if the result is not finite.
pub fn air_heat_outgoing_temperature<T: Real>(
    power: T,
    volumetric_flow: T,
    inlet_temperature: T,
    humidity: T,
) -> Result<T, ExchangeError> {
    let flow = volumetric_flow.widen();
    check_flow(flow)?;

    let t_in = inlet_temperature.widen();
    let delta = power.widen() / (flow * capacity_per_flow(t_in, humidity.widen()));
    finite(t_in + delta, "air outgoing temperature")
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn winter_heating_power() {
        // 1000 m³/h of dry air from -20 °C to 20 °C.
        let power = air_heat_power(-20.0, 0.0, 20.0, 1000.0);
        assert_relative_eq!(power, 15.6095, max_relative = 1e-4);
    }

    #[test]
    fn heating_and_cooling_are_symmetric() {
        let heating = air_heat_power(10.0, 0.005, 30.0, 2500.0);
        let cooling = air_heat_power(10.0, 0.005, -10.0, 2500.0);
        assert_relative_eq!(heating, cooling);
    }

    #[test]
    fn humidity_raises_capacity() {
        let dry = air_heat_power(25.0, 0.0, 15.0, 1000.0);
        let humid = air_heat_power(25.0, 0.012, 15.0, 1000.0);
        assert!(humid > dry);
    }

    #[test]
    fn outgoing_temperature_includes_inlet() {
        let power = air_heat_power(-20.0, 0.001, 18.0, 3200.0);
        let outlet = air_heat_outgoing_temperature(power, 3200.0, -20.0, 0.001).unwrap();
        assert_relative_eq!(outlet, 18.0, max_relative = 1e-12);
    }

    #[test]
    fn negative_power_cools() {
        let power = air_heat_power(28.0, 0.01, 16.0, 1500.0);
        let outlet = air_heat_outgoing_temperature(-power, 1500.0, 28.0, 0.01).unwrap();
        assert_relative_eq!(outlet, 16.0, max_relative = 1e-12);
    }

    #[test]
    fn single_precision() {
        let power = air_heat_power(-20.0_f32, 0.0, 20.0, 1000.0);
        assert_relative_eq!(power, 15.6095, max_relative = 1e-4);
    }

    #[test]
    fn zero_flow_is_rejected() {
        assert_eq!(
            air_heat_outgoing_temperature(5.0, 0.0, 20.0, 0.0),
            Err(ExchangeError::NonPositiveFlow { flow: 0.0 })
        );
        assert!(air_heat_outgoing_temperature(5.0, -10.0, 20.0, 0.0).is_err());
    }
}
