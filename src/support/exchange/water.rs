use crate::support::{
    constraint::{Constraint, NonZero},
    psychro::constants::SECONDS_PER_HOUR,
    real::Real,
};

use super::{ExchangeError, check_flow, finite};

/// Density of liquid water, kg/m³, as a quartic in °C (least-squares fit, 0–100 °C).
const DENSITY_COEFFICIENTS: [f64; 5] = [
    9.998_706_040_7e2,
    5.106_935_717_1e-2,
    -7.493_089_157_8e-3,
    4.115_655_917_5e-5,
    -1.286_040_211_0e-7,
];

/// Isobaric heat capacity of liquid water, kJ/(kg·K), as a 9th-degree
/// polynomial in °C (least-squares fit, 0–100 °C).
const HEAT_CAPACITY_COEFFICIENTS: [f64; 10] = [
    4.219_885_413_0,
    -3.764_254_450_2e-3,
    1.918_003_862_4e-4,
    -8.351_214_324_8e-6,
    2.872_369_953_7e-7,
    -6.647_536_776_9e-9,
    9.772_236_403_8e-11,
    -8.712_085_935_0e-13,
    4.290_553_136_1e-15,
    -8.949_921_612_6e-18,
];

/// Water flows are in L/h while density is per m³.
const LITRES_PER_CUBIC_METRE: f64 = 1000.0;

/// Evaluates a polynomial with ascending coefficients using Horner's scheme.
fn polynomial(coefficients: &[f64], x: f64) -> f64 {
    coefficients.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

/// Returns the density of liquid water (kg/m³) at `temperature` (°C).
///
/// Fitted over 0–100 °C; values outside that range are extrapolated.
pub fn water_density<T: Real>(temperature: T) -> T {
    T::narrow(polynomial(&DENSITY_COEFFICIENTS, temperature.widen()))
}

/// Returns the specific heat capacity of liquid water (kJ/(kg·K)) at `temperature` (°C).
///
/// Fitted over 0–100 °C; values outside that range are extrapolated.
pub fn water_heat_capacity<T: Real>(temperature: T) -> T {
    T::narrow(polynomial(&HEAT_CAPACITY_COEFFICIENTS, temperature.widen()))
}

/// Heat carried per L/h of water per kelvin at `inlet_temperature`, kW/K.
fn capacity_per_flow(inlet_temperature: f64) -> f64 {
    water_density(inlet_temperature) * water_heat_capacity(inlet_temperature)
        / (SECONDS_PER_HOUR * LITRES_PER_CUBIC_METRE)
}

/// Returns the power (kW) exchanged by `volumetric_flow` (L/h) of water
/// moving from `inlet_temperature` to `outgoing_temperature` (°C).
///
/// Density and heat capacity are evaluated at the inlet temperature.
pub fn water_heat_power<T: Real>(
    inlet_temperature: T,
    outgoing_temperature: T,
    volumetric_flow: T,
) -> T {
    let t_in = inlet_temperature.widen();
    let delta = (outgoing_temperature.widen() - t_in).abs();
    T::narrow(delta * volumetric_flow.widen() * capacity_per_flow(t_in))
}

/// Returns the temperature change (K) of `volumetric_flow` (L/h) of water
/// entering at `inlet_temperature` (°C) that exchanges `power` (kW).
///
/// The result is a magnitude. Whether the water warms or cools is up to the
/// caller, who knows if the circuit heats or cools the air.
///
/// # Errors
///
/// - [`ExchangeError::NonPositiveFlow`] if the flow is not strictly positive.
/// - [`ExchangeError::NonFinite`] if the result is not finite.
pub fn water_heat_temperature<T: Real>(
    power: T,
    volumetric_flow: T,
    inlet_temperature: T,
) -> Result<T, ExchangeError> {
    let flow = volumetric_flow.widen();
    check_flow(flow)?;

    let delta = power.widen() / (flow * capacity_per_flow(inlet_temperature.widen()));
    finite(delta, "water temperature change")
}

/// Returns the water flow (L/h) needed to exchange `power` (kW) between
/// `inlet_temperature` and `outgoing_temperature` (°C).
///
/// # Errors
///
/// - [`ExchangeError::ZeroTemperatureDifference`] if the temperatures are equal.
/// - [`ExchangeError::NonFinite`] if the result is not finite.
pub fn water_heat_volumetric_flow_rate<T: Real>(
    power: T,
    inlet_temperature: T,
    outgoing_temperature: T,
) -> Result<T, ExchangeError> {
    let t_in = inlet_temperature.widen();
    let delta = (outgoing_temperature.widen() - t_in).abs();
    NonZero::check(&delta).map_err(|_| ExchangeError::ZeroTemperatureDifference)?;

    finite(
        power.widen() / (delta * capacity_per_flow(t_in)),
        "water volumetric flow",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn density_matches_reference_values() {
        assert_relative_eq!(water_density(4.0), 999.97, max_relative = 1e-4);
        assert_relative_eq!(water_density(20.0), 998.20, max_relative = 1e-4);
        assert_relative_eq!(water_density(50.0), 988.04, max_relative = 1e-4);
        assert_relative_eq!(water_density(80.0), 971.80, max_relative = 1e-4);
    }

    #[test]
    fn heat_capacity_matches_reference_values() {
        assert_relative_eq!(water_heat_capacity(0.0), 4.2199, max_relative = 1e-4);
        assert_relative_eq!(water_heat_capacity(35.0), 4.1795, max_relative = 1e-4);
        assert_relative_eq!(water_heat_capacity(70.0), 4.1902, max_relative = 1e-4);
        assert_relative_eq!(water_heat_capacity(100.0), 4.2157, max_relative = 1e-4);
    }

    #[test]
    fn heating_circuit_power() {
        // 1000 L/h cooled from 70 °C to 50 °C.
        let power = water_heat_power(70.0, 50.0, 1000.0);
        assert_relative_eq!(power, 22.761, max_relative = 1e-4);
    }

    #[test]
    fn chilled_water_power_is_symmetric() {
        let warming = water_heat_power(7.0, 12.0, 2000.0);
        assert_relative_eq!(warming, 11.667, max_relative = 1e-4);
        assert_relative_eq!(water_heat_power(7.0, 2.0, 2000.0), warming);
    }

    #[test]
    fn inverses_recover_the_held_variable() {
        let power = water_heat_power(70.0, 50.0, 850.0);

        let delta = water_heat_temperature(power, 850.0, 70.0).unwrap();
        assert_relative_eq!(delta, 20.0, max_relative = 1e-12);

        let flow = water_heat_volumetric_flow_rate(power, 70.0, 50.0).unwrap();
        assert_relative_eq!(flow, 850.0, max_relative = 1e-12);
    }

    #[test]
    fn divisions_by_zero_are_rejected() {
        assert_eq!(
            water_heat_temperature(10.0, 0.0, 70.0),
            Err(ExchangeError::NonPositiveFlow { flow: 0.0 })
        );
        assert_eq!(
            water_heat_volumetric_flow_rate(10.0, 60.0, 60.0),
            Err(ExchangeError::ZeroTemperatureDifference)
        );
    }

    #[test]
    fn horner_matches_naive_evaluation() {
        let x = 37.5_f64;
        let naive: f64 = HEAT_CAPACITY_COEFFICIENTS
            .iter()
            .zip(0..)
            .map(|(c, power)| c * x.powi(power))
            .sum();
        assert_relative_eq!(water_heat_capacity(x), naive, max_relative = 1e-12);
    }
}
