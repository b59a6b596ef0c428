use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for computing temperature differences.
///
/// `uom` does not allow subtracting two [`ThermodynamicTemperature`] values,
/// see [#380](https://github.com/iliekturtles/uom/issues/380).
pub trait TemperatureDifference {
    /// Returns the temperature difference `self - other`.
    fn minus(self, other: Self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn minus(self, other: Self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(
            self.get::<abs_kelvin>() - other.get::<abs_kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        temperature_interval::degree_celsius as delta_celsius,
        thermodynamic_temperature::degree_celsius,
    };

    #[test]
    fn heating_and_cooling_deltas() {
        let outdoor = ThermodynamicTemperature::new::<degree_celsius>(-20.0);
        let supply = ThermodynamicTemperature::new::<degree_celsius>(18.0);

        assert_relative_eq!(
            supply.minus(outdoor).get::<delta_celsius>(),
            38.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(
            outdoor.minus(supply).get::<delta_kelvin>(),
            -38.0,
            epsilon = 1e-9
        );
    }
}
