//! Moist-air properties at standard pressure.
//!
//! The free functions evaluate saturation properties from temperature alone.
//! [`AirState`] pairs a temperature with a humidity and exposes the same
//! properties for that condition.
//!
//! # Saturation vapor pressure
//!
//! [`vapor_pressure`] uses two Buck-type exponential fits: a liquid-water
//! curve for `T > 0 °C` and an ice curve for `T ≤ 0 °C`. The curves do not
//! meet exactly at `0 °C`, and that seam is part of the model:
//!
//! ```
//! use hvac_engine::support::psychro::vapor_pressure;
//!
//! let ice = vapor_pressure(0.0_f64);
//! let liquid = vapor_pressure(1e-9_f64);
//! assert!((ice - 0.61115).abs() < 1e-12);
//! assert!((liquid - 0.61121).abs() < 1e-6);
//! ```
//!
//! # Precision
//!
//! All functions are generic over [`Real`] but evaluate in `f64`, the
//! precision the fit coefficients were tuned for.

pub mod constants;
mod error;
mod state;

pub use error::PsychroError;
pub use state::AirState;

use crate::support::real::Real;

use constants::{
    AIR_MOLAR_MASS, CELSIUS_TO_KELVIN, MOLAR_GAS_CONSTANT, STANDARD_PRESSURE, WATER_MOLAR_MASS,
};

/// Returns the saturation vapor pressure of water (kPa) at `temperature` (°C).
pub fn vapor_pressure<T: Real>(temperature: T) -> T {
    let t = temperature.widen();
    let p = if t > 0.0 {
        0.61121 * ((18.678 - t / 234.5) * (t / (257.14 + t))).exp()
    } else {
        0.61115 * ((23.036 - t / 333.7) * (t / (279.82 + t))).exp()
    };
    T::narrow(p)
}

/// Returns the density of saturated water vapor (kg/m³) at `temperature` (°C).
pub fn vapor_density<T: Real>(temperature: T) -> T {
    let t = temperature.widen();
    let p = vapor_pressure(t);
    T::narrow(p * WATER_MOLAR_MASS / ((t + CELSIUS_TO_KELVIN) * MOLAR_GAS_CONSTANT))
}

/// Returns the density of dry air (kg/m³) at `temperature` (°C) and standard pressure.
pub fn air_density<T: Real>(temperature: T) -> T {
    let t = temperature.widen();
    T::narrow(
        (STANDARD_PRESSURE * AIR_MOLAR_MASS)
            / ((t + CELSIUS_TO_KELVIN) * MOLAR_GAS_CONSTANT * 1000.0),
    )
}

/// Returns the partial pressure of water vapor (kPa) at `temperature` (°C)
/// and `humidity_ratio` (% of saturation).
pub fn partial_pressure<T: Real>(temperature: T, humidity_ratio: T) -> T {
    let p = vapor_pressure(temperature.widen());
    T::narrow(humidity_ratio.widen() * 0.01 * p)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn liquid_branch_above_freezing() {
        assert_relative_eq!(vapor_pressure(20.0), 2.3385, max_relative = 1e-3);
        assert_relative_eq!(vapor_pressure(100.0), 101.4, max_relative = 1e-2);
    }

    #[test]
    fn ice_branch_at_and_below_freezing() {
        assert_relative_eq!(vapor_pressure(-10.0), 0.2599, max_relative = 1e-3);

        let t = -5.0_f64;
        let expected = 0.61115 * ((23.036 - t / 333.7) * (t / (279.82 + t))).exp();
        assert_relative_eq!(vapor_pressure(t), expected);
    }

    #[test]
    fn seam_at_zero_is_preserved() {
        let eps = 1e-9;
        assert_relative_eq!(vapor_pressure(0.0), 0.61115);
        assert_relative_eq!(vapor_pressure(eps), 0.61121, max_relative = 1e-8);
        assert_relative_eq!(vapor_pressure(-eps), 0.61115, max_relative = 1e-8);
        assert!(vapor_pressure(eps) - vapor_pressure(0.0) > 5e-5);
    }

    #[test]
    fn densities_at_room_temperature() {
        assert_relative_eq!(air_density(20.0), 1.2047, max_relative = 1e-4);
        assert_relative_eq!(vapor_density(20.0), 0.017_28, max_relative = 1e-3);
    }

    #[test]
    fn single_precision_matches_double() {
        let single = vapor_density(35.0_f32);
        let double = vapor_density(35.0_f64);
        assert_relative_eq!(f64::from(single), double, max_relative = 1e-6);
    }

    #[test]
    fn partial_pressure_scales_with_ratio() {
        assert_relative_eq!(partial_pressure(20.0, 0.0), 0.0);
        assert_relative_eq!(partial_pressure(20.0, 100.0), vapor_pressure(20.0));
        assert_relative_eq!(partial_pressure(20.0, 50.0), 0.5 * vapor_pressure(20.0));
    }
}
