use std::fmt;

use uom::si::f64::{MassRate, Power, VolumeRate};

use crate::support::psychro::AirState;

/// Whether a coil's water circuit heats or cools the air.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoilMode {
    /// Supply water is warmer than return water.
    Heating,
    /// Supply water is colder than return water.
    Cooling,
}

impl fmt::Display for CoilMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Heating => "heating",
            Self::Cooling => "cooling",
        })
    }
}

/// Condensate drained from a cooling coil.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drain {
    /// Mass flow of condensed water.
    pub mass_flow: MassRate,

    /// Volumetric flow of condensed water.
    pub volumetric_flow: VolumeRate,

    /// Heat released by the vapor as it condenses.
    pub latent_power: Power,
}

/// The duty of a coil at one operating point.
#[derive(Debug, Clone, PartialEq)]
pub struct CoilDuty {
    /// How the coil works.
    pub mode: CoilMode,

    /// Sensible power exchanged with the air (always non-negative).
    pub power: Power,

    /// Air leaving the coil.
    pub outlet: AirState,

    /// Water flow through the coil, sized for [`CoilDuty::total_power`].
    pub water_flow: VolumeRate,

    /// Condensate, present only for a cooling coil that dehumidifies.
    pub drain: Option<Drain>,

    /// `true` if the total duty exceeds the coil's rated capacity.
    pub low_capacity: bool,
}

impl CoilDuty {
    /// Sensible plus latent power.
    #[must_use]
    pub fn total_power(&self) -> Power {
        self.drain
            .map_or(self.power, |drain| self.power + drain.latent_power)
    }
}
