//! Extensions to [`uom`] used by the typed models.
//!
//! The toolkits in [`crate::support`] work on primitive numbers in the
//! engineering units HVAC catalogs use (°C, m³/h, L/h, kW). The models in
//! [`crate::models`] accept and return [`uom`] quantities instead, converting
//! at the boundary.
//!
//! ## Temperature differences
//!
//! [`TemperatureDifference::minus`] subtracts two absolute temperatures and
//! returns a [`TemperatureInterval`](uom::si::f64::TemperatureInterval):
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use uom::si::temperature_interval::kelvin;
//! use hvac_engine::support::units::TemperatureDifference;
//!
//! let supply = ThermodynamicTemperature::new::<degree_celsius>(22.0);
//! let outdoor = ThermodynamicTemperature::new::<degree_celsius>(-18.0);
//! assert!((supply.minus(outdoor).get::<kelvin>() - 40.0).abs() < 1e-9);
//! ```

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
