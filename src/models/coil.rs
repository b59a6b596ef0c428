//! Water-fed air heating and cooling coils.
//!
//! A [`WaterCoil`] is defined by the supply and return temperatures of its
//! water circuit. Given the air entering it, the air flow and the outlet air
//! temperature the selection layer wants, [`WaterCoil::duty`] returns the
//! power, the water flow to circulate, the outlet air state and, for a
//! cooling coil, the condensate it drains.
//!
//! # Example
//!
//! ```
//! use hvac_engine::{models::coil::WaterCoil, support::psychro::AirState};
//! use uom::si::{
//!     f64::{ThermodynamicTemperature, VolumeRate},
//!     power::kilowatt,
//!     thermodynamic_temperature::degree_celsius,
//!     volume_rate::cubic_meter_per_hour,
//! };
//!
//! let celsius = |t| ThermodynamicTemperature::new::<degree_celsius>(t);
//! let heater = WaterCoil::new(celsius(70.0), celsius(50.0))?;
//!
//! let outdoor = AirState::with_humidity_ratio(-20.0_f64, 90.0)?;
//! let duty = heater.duty(
//!     &outdoor,
//!     VolumeRate::new::<cubic_meter_per_hour>(3000.0),
//!     celsius(18.0),
//! )?;
//!
//! assert!(duty.power.get::<kilowatt>() > 40.0);
//! assert!(duty.water_flow.get::<cubic_meter_per_hour>() > 1.5);
//! assert!(duty.drain.is_none());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod duty;
mod error;

pub use duty::{CoilDuty, CoilMode, Drain};
pub use error::CoilError;

use tracing::debug;
use uom::si::{
    f64::{MassRate, Power, TemperatureInterval, ThermodynamicTemperature, VolumeRate},
    mass_rate::kilogram_per_second,
    power::kilowatt,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
    volume_rate::cubic_meter_per_hour,
};

use crate::support::{
    constraint::{Constraint, NonZero, StrictlyPositive},
    exchange::{
        ExchangeError, SATURATION_MARGIN, air_heat_power, cooling_condensation_flowrate,
        steam_to_water_phase_transition_power, water_heat_volumetric_flow_rate,
    },
    psychro::{AirState, constants::SECONDS_PER_HOUR},
    units::TemperatureDifference,
};

/// A coil fed by a water circuit at fixed supply and return temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterCoil {
    supply: ThermodynamicTemperature,
    return_: ThermodynamicTemperature,
    capacity: Option<Power>,
}

impl WaterCoil {
    /// Creates a coil for a water circuit.
    ///
    /// Supply warmer than return makes a heating coil, colder a cooling coil.
    ///
    /// # Errors
    ///
    /// Returns [`CoilError::Exchange`] wrapping
    /// [`ExchangeError::ZeroTemperatureDifference`] if the two temperatures
    /// are equal, since no water flow could then carry any power.
    pub fn new(
        supply: ThermodynamicTemperature,
        return_: ThermodynamicTemperature,
    ) -> Result<Self, CoilError> {
        NonZero::check(&supply.minus(return_).get::<delta_kelvin>())
            .map_err(|_| ExchangeError::ZeroTemperatureDifference)?;

        Ok(Self {
            supply,
            return_,
            capacity: None,
        })
    }

    /// Sets the rated capacity used to flag undersized coils.
    #[must_use]
    pub fn with_capacity(self, capacity: Power) -> Self {
        Self {
            capacity: Some(capacity),
            ..self
        }
    }

    /// Supply minus return water temperature.
    #[must_use]
    pub fn water_temperature_drop(&self) -> TemperatureInterval {
        self.supply.minus(self.return_)
    }

    /// Whether the coil heats or cools.
    #[must_use]
    pub fn mode(&self) -> CoilMode {
        if self.water_temperature_drop().get::<delta_kelvin>() > 0.0 {
            CoilMode::Heating
        } else {
            CoilMode::Cooling
        }
    }

    /// Computes the duty of bringing `air_flow` of `inlet` air to `outlet_temperature`.
    ///
    /// Heating keeps the air's water content. Cooling condenses whatever the
    /// air holds above [`SATURATION_MARGIN`] of saturation at the outlet, and
    /// the outlet air is then at that margin. The water flow and the capacity
    /// check cover the sensible power plus the latent heat of any condensate.
    ///
    /// # Errors
    ///
    /// - [`CoilError::NonPositiveAirFlow`] if `air_flow` is not strictly positive.
    /// - [`CoilError::WrongDirection`] if the outlet temperature moves the
    ///   wrong way for the coil's mode.
    /// - [`CoilError::BeyondSupply`] if the outlet temperature reaches the
    ///   supply water temperature.
    /// - [`CoilError::Exchange`] or [`CoilError::Psychro`] if a toolkit
    ///   calculation fails.
    pub fn duty(
        &self,
        inlet: &AirState,
        air_flow: VolumeRate,
        outlet_temperature: ThermodynamicTemperature,
    ) -> Result<CoilDuty, CoilError> {
        let flow = StrictlyPositive::new(air_flow.get::<cubic_meter_per_hour>())
            .map_err(CoilError::NonPositiveAirFlow)?
            .into_inner();

        let mode = self.mode();
        let t_in = inlet.temperature();
        let t_out = outlet_temperature.get::<degree_celsius>();
        self.check_reachable(mode, t_in, t_out)?;

        let sensible = air_heat_power(t_in, inlet.humidity(), t_out, flow);
        let (outlet, drain) = match mode {
            CoilMode::Heating => (inlet.at_temperature(t_out)?, None),
            CoilMode::Cooling => dehumidify(inlet, t_out, flow)?,
        };

        let power = Power::new::<kilowatt>(sensible);
        let carried = drain.map_or(power, |drain| power + drain.latent_power);
        let water_flow = water_heat_volumetric_flow_rate(
            carried.get::<kilowatt>(),
            self.supply.get::<degree_celsius>(),
            self.return_.get::<degree_celsius>(),
        )?;

        let low_capacity = self.capacity.is_some_and(|capacity| carried > capacity);
        debug!(
            %mode,
            sensible_kw = sensible,
            total_kw = carried.get::<kilowatt>(),
            water_flow_lph = water_flow,
            low_capacity,
            "coil duty"
        );

        Ok(CoilDuty {
            mode,
            power,
            outlet,
            water_flow: liters_per_hour(water_flow),
            drain,
            low_capacity,
        })
    }

    fn check_reachable(&self, mode: CoilMode, t_in: f64, t_out: f64) -> Result<(), CoilError> {
        let supply = self.supply.get::<degree_celsius>();
        let (wrong_way, past_supply) = match mode {
            CoilMode::Heating => (t_out < t_in, t_out >= supply),
            CoilMode::Cooling => (t_out > t_in, t_out <= supply),
        };

        if wrong_way {
            return Err(CoilError::WrongDirection {
                mode,
                inlet: t_in,
                outlet: t_out,
            });
        }
        if past_supply {
            return Err(CoilError::BeyondSupply {
                supply,
                outlet: t_out,
            });
        }
        Ok(())
    }
}

/// Cools `inlet` air to `t_out` and drains the vapor above the saturation margin.
fn dehumidify(
    inlet: &AirState,
    t_out: f64,
    flow: f64,
) -> Result<(AirState, Option<Drain>), CoilError> {
    let vapor_content = inlet.humidity() * inlet.air_density();
    let condensate = cooling_condensation_flowrate(vapor_content, t_out, flow);

    if condensate.mass_flow <= 0.0 {
        return Ok((inlet.at_temperature(t_out)?, None));
    }

    let outlet = AirState::with_humidity_ratio(t_out, SATURATION_MARGIN * 100.0)?;
    let drain = Drain {
        mass_flow: MassRate::new::<kilogram_per_second>(condensate.mass_flow / SECONDS_PER_HOUR),
        volumetric_flow: liters_per_hour(condensate.volumetric_flow),
        latent_power: Power::new::<kilowatt>(steam_to_water_phase_transition_power(
            condensate.mass_flow,
        )),
    };
    Ok((outlet, Some(drain)))
}

fn liters_per_hour(value: f64) -> VolumeRate {
    VolumeRate::new::<cubic_meter_per_hour>(value / 1000.0)
}
