//! Fans described by a tabulated performance curve.
//!
//! Catalogs give a fan as static pressure and shaft power sampled at a few
//! flows, plus the octave-band noise it radiates to its inlet and outlet
//! ducts. [`FanCurve`] interpolates that table to find the operating point
//! at a required flow, the flow delivered against a required pressure, or
//! the duty point where it meets a duct [`SystemCurve`].
//!
//! # Example
//!
//! ```
//! use hvac_engine::{
//!     models::fan::{FanCurve, FanSample, SystemCurve},
//!     support::noise::NoiseSpectrum,
//! };
//! use uom::si::{
//!     f64::{Power, Pressure, VolumeRate},
//!     power::kilowatt,
//!     pressure::pascal,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! let sample = |flow, pressure, power| FanSample {
//!     flow: VolumeRate::new::<cubic_meter_per_hour>(flow),
//!     pressure: Pressure::new::<pascal>(pressure),
//!     shaft_power: Power::new::<kilowatt>(power),
//! };
//! let fan = FanCurve::new(
//!     [
//!         sample(0.0, 900.0, 0.20),
//!         sample(2000.0, 850.0, 0.60),
//!         sample(4000.0, 700.0, 0.95),
//!         sample(6000.0, 420.0, 1.20),
//!     ],
//!     NoiseSpectrum::new([74.0, 76.0, 73.0, 70.0, 67.0, 63.0, 58.0, 51.0]),
//!     NoiseSpectrum::new([77.0, 79.0, 76.0, 73.0, 70.0, 66.0, 61.0, 54.0]),
//! )?;
//!
//! let ducts = SystemCurve::quadratic(
//!     VolumeRate::new::<cubic_meter_per_hour>(4000.0),
//!     Pressure::new::<pascal>(700.0),
//! )?;
//! let duty = fan.duty_point(&ducts)?;
//! assert!((duty.flow.get::<cubic_meter_per_hour>() - 4000.0).abs() < 1e-3);
//! # Ok::<(), hvac_engine::models::fan::FanError>(())
//! ```

mod error;
mod system;

pub use error::FanError;
pub use system::SystemCurve;

use tracing::debug;
use uom::si::{
    f64::{Power, Pressure, Ratio, VolumeRate},
    power::kilowatt,
    pressure::pascal,
    ratio::ratio,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::{
    noise::NoiseSpectrum,
    numeric::{BisectionConfig, NumericError, SampledCurve, bisection_search_with},
};

/// Pressure series of the sampled curve.
const PRESSURE: usize = 0;

/// Pressure tolerance of the default solver configuration, Pa.
const DEFAULT_ACCURACY: f64 = 1e-6;

/// One row of a fan performance table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanSample {
    /// Air flow delivered.
    pub flow: VolumeRate,

    /// Static pressure developed at that flow.
    pub pressure: Pressure,

    /// Shaft power drawn at that flow.
    pub shaft_power: Power,
}

/// A fan working at one flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FanPoint {
    /// Air flow delivered.
    pub flow: VolumeRate,

    /// Static pressure developed.
    pub pressure: Pressure,

    /// Shaft power drawn.
    pub shaft_power: Power,

    /// Air power over shaft power, zero when no shaft power is drawn.
    pub efficiency: Ratio,
}

/// Upper bounds on the A-weighted noise a fan may radiate, dB(A).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseLimits {
    /// Limit for the inlet duct.
    pub inlet: f64,

    /// Limit for the outlet duct.
    pub outlet: f64,
}

/// A fan performance curve with its inlet and outlet noise.
#[derive(Debug, Clone, PartialEq)]
pub struct FanCurve {
    /// Flow (m³/h) against [pressure (Pa), shaft power (kW)].
    curve: SampledCurve<f64, 2>,
    inlet_noise: NoiseSpectrum,
    outlet_noise: NoiseSpectrum,
    config: BisectionConfig<f64>,
}

impl FanCurve {
    /// Creates a fan from its performance table, sorted by ascending flow.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::Curve`] if the table has fewer than two rows or
    /// its flows are not strictly ascending.
    pub fn new(
        table: impl IntoIterator<Item = FanSample>,
        inlet_noise: NoiseSpectrum,
        outlet_noise: NoiseSpectrum,
    ) -> Result<Self, FanError> {
        let curve = SampledCurve::from_points(table.into_iter().map(|sample| {
            (
                sample.flow.get::<cubic_meter_per_hour>(),
                [
                    sample.pressure.get::<pascal>(),
                    sample.shaft_power.get::<kilowatt>(),
                ],
            )
        }))?;

        Ok(Self {
            curve,
            inlet_noise,
            outlet_noise,
            config: BisectionConfig::new(DEFAULT_ACCURACY),
        })
    }

    /// Replaces the solver configuration used for inverse lookups.
    ///
    /// The accuracy is a pressure tolerance in pascals.
    #[must_use]
    pub fn with_config(self, config: BisectionConfig<f64>) -> Self {
        Self { config, ..self }
    }

    /// Returns the lowest and highest tabulated flows.
    #[must_use]
    pub fn flow_range(&self) -> (VolumeRate, VolumeRate) {
        let (low, high) = self.curve.span();
        (
            VolumeRate::new::<cubic_meter_per_hour>(low),
            VolumeRate::new::<cubic_meter_per_hour>(high),
        )
    }

    /// Returns the operating point at `flow`.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::Curve`] if `flow` is outside the table.
    pub fn operating_point(&self, flow: VolumeRate) -> Result<FanPoint, FanError> {
        self.point_at(flow.get::<cubic_meter_per_hour>())
    }

    /// Returns the flow the fan delivers against `pressure`.
    ///
    /// # Errors
    ///
    /// Returns [`FanError::Curve`] if the fan never develops `pressure`
    /// within the table, or if the solver fails.
    pub fn flow_at_pressure(&self, pressure: Pressure) -> Result<VolumeRate, FanError> {
        let flow = self
            .curve
            .solve_for(PRESSURE, pressure.get::<pascal>(), &self.config)?;
        Ok(VolumeRate::new::<cubic_meter_per_hour>(flow))
    }

    /// Returns the point where the fan pressure equals the system pressure drop.
    ///
    /// # Errors
    ///
    /// - [`FanError::NoDutyPoint`] if the curves do not cross within the table.
    /// - [`FanError::Curve`] if the solver fails otherwise.
    pub fn duty_point(&self, system: &SystemCurve) -> Result<FanPoint, FanError> {
        let (low, high) = self.curve.span();

        // The system curve rises and the fan curve falls, so their
        // difference increases with flow.
        let excess = |flow: f64| {
            self.curve.evaluate(flow).map_or(f64::NAN, |[pressure, _]| {
                system.pascals(flow) - pressure
            })
        };

        let flow = match bisection_search_with(excess, low, high, 0.0, &self.config) {
            Ok(flow) => flow,
            Err(NumericError::OutOfRange { .. }) => return Err(FanError::NoDutyPoint),
            Err(error) => return Err(error.into()),
        };

        debug!(flow_m3h = flow, "fan duty point");
        self.point_at(flow)
    }

    /// Noise radiated to the inlet duct.
    #[must_use]
    pub fn inlet_noise(&self) -> &NoiseSpectrum {
        &self.inlet_noise
    }

    /// Noise radiated to the outlet duct.
    #[must_use]
    pub fn outlet_noise(&self) -> &NoiseSpectrum {
        &self.outlet_noise
    }

    /// Inlet and outlet noise heard together.
    #[must_use]
    pub fn combined_noise(&self) -> NoiseSpectrum {
        self.inlet_noise + self.outlet_noise
    }

    /// Total A-weighted level of the combined noise, dB(A).
    #[must_use]
    pub fn a_weighted_noise(&self) -> f64 {
        self.combined_noise().a_weighted_total()
    }

    /// Returns `true` if either duct hears more than its limit.
    #[must_use]
    pub fn is_too_loud(&self, limits: &NoiseLimits) -> bool {
        self.inlet_noise.a_weighted_total() > limits.inlet
            || self.outlet_noise.a_weighted_total() > limits.outlet
    }

    fn point_at(&self, flow: f64) -> Result<FanPoint, FanError> {
        let [pressure, shaft_power] = self.curve.evaluate(flow)?;

        let flow = VolumeRate::new::<cubic_meter_per_hour>(flow);
        let pressure = Pressure::new::<pascal>(pressure);
        let shaft_power = Power::new::<kilowatt>(shaft_power);

        let efficiency = if shaft_power.get::<kilowatt>() > 0.0 {
            let air_power: Power = flow * pressure;
            air_power / shaft_power
        } else {
            Ratio::new::<ratio>(0.0)
        };

        Ok(FanPoint {
            flow,
            pressure,
            shaft_power,
            efficiency,
        })
    }
}
