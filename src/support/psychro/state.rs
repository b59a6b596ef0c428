use crate::support::{
    constraint::{Constraint, NonNegative},
    real::Real,
};

use super::{PsychroError, air_density, constants::CELSIUS_TO_KELVIN, vapor_density, vapor_pressure};

/// A moist-air condition: temperature and water content.
///
/// The humidity is stored as an absolute mass ratio of water vapor to dry
/// air, derived from the percentage humidity ratio as
/// `humidity = (ratio / 100) · ρ_vapor(T) / ρ_air(T)`.
/// [`AirState::humidity_ratio`] is the exact algebraic inverse.
///
/// # Example
///
/// ```
/// use hvac_engine::support::psychro::AirState;
///
/// let outdoor = AirState::with_humidity_ratio(-18.0_f64, 90.0)?;
/// assert!((outdoor.humidity_ratio() - 90.0).abs() < 1e-9);
/// # Ok::<(), hvac_engine::support::psychro::PsychroError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirState<T: Real = f64> {
    temperature: T,
    humidity: T,
}

impl<T: Real> AirState<T> {
    /// Creates a state from a temperature (°C) and an absolute humidity.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::InvalidHumidity`] if `humidity` is negative or `NaN`,
    /// or [`PsychroError::BelowAbsoluteZero`] for a non-physical temperature.
    pub fn new(temperature: T, humidity: T) -> Result<Self, PsychroError> {
        check_temperature(temperature)?;
        if NonNegative::check(&humidity).is_err() {
            return Err(PsychroError::InvalidHumidity {
                value: humidity.widen(),
            });
        }
        Ok(Self {
            temperature,
            humidity,
        })
    }

    /// Creates a dry state (zero humidity) at `temperature` (°C).
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::BelowAbsoluteZero`] for a non-physical temperature.
    pub fn dry(temperature: T) -> Result<Self, PsychroError> {
        Self::new(temperature, T::zero())
    }

    /// Creates a state from a temperature (°C) and a humidity ratio (%).
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::InvalidHumidity`] if `ratio` is negative or `NaN`,
    /// or [`PsychroError::BelowAbsoluteZero`] for a non-physical temperature.
    pub fn with_humidity_ratio(temperature: T, ratio: T) -> Result<Self, PsychroError> {
        let mut state = Self::dry(temperature)?;
        state.set_humidity_ratio(ratio)?;
        Ok(state)
    }

    /// Temperature, °C.
    pub fn temperature(&self) -> T {
        self.temperature
    }

    /// Absolute humidity as a mass ratio of vapor to dry air.
    pub fn humidity(&self) -> T {
        self.humidity
    }

    /// Replaces the humidity with the one implied by `ratio` (%) at this temperature.
    ///
    /// The state is left unchanged on error.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::InvalidHumidity`] if `ratio` is negative or `NaN`.
    pub fn set_humidity_ratio(&mut self, ratio: T) -> Result<(), PsychroError> {
        if NonNegative::check(&ratio).is_err() {
            return Err(PsychroError::InvalidHumidity {
                value: ratio.widen(),
            });
        }

        let t = self.temperature.widen();
        let humidity = (ratio.widen() / 100.0) * vapor_density(t) / air_density(t);
        self.humidity = T::narrow(humidity);
        Ok(())
    }

    /// Returns the humidity ratio, % of the saturation-derived humidity.
    pub fn humidity_ratio(&self) -> T {
        let t = self.temperature.widen();
        T::narrow(self.humidity.widen() * 100.0 * air_density(t) / vapor_density(t))
    }

    /// Saturation vapor pressure at this temperature, kPa.
    pub fn vapor_pressure(&self) -> T {
        vapor_pressure(self.temperature)
    }

    /// Saturated vapor density at this temperature, kg/m³.
    pub fn vapor_density(&self) -> T {
        vapor_density(self.temperature)
    }

    /// Dry-air density at this temperature and standard pressure, kg/m³.
    pub fn air_density(&self) -> T {
        air_density(self.temperature)
    }

    /// Partial pressure of the water vapor, kPa.
    pub fn partial_pressure(&self) -> T {
        T::narrow(self.humidity_ratio().widen() * 0.01 * self.vapor_pressure().widen())
    }

    /// Returns a state at `temperature` with the same absolute humidity.
    ///
    /// Sensible heating and cooling without condensation keep the water
    /// content, so the humidity ratio changes with temperature.
    ///
    /// # Errors
    ///
    /// Returns [`PsychroError::BelowAbsoluteZero`] for a non-physical temperature.
    pub fn at_temperature(&self, temperature: T) -> Result<Self, PsychroError> {
        Self::new(temperature, self.humidity)
    }
}

fn check_temperature<T: Real>(temperature: T) -> Result<(), PsychroError> {
    let t = temperature.widen();
    if t + CELSIUS_TO_KELVIN > 0.0 {
        Ok(())
    } else {
        Err(PsychroError::BelowAbsoluteZero { temperature: t })
    }
}
