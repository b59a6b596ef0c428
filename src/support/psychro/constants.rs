//! Physical constants shared by the psychrometric and heat exchange toolkits.

/// Enthalpy of vaporization of water, kJ/kg.
pub const ENTHALPY_OF_VAPORIZATION: f64 = 2300.0;

/// Standard atmospheric pressure, Pa.
pub const STANDARD_PRESSURE: f64 = 101_325.0;

/// Molar mass of dry air, g/mol.
pub const AIR_MOLAR_MASS: f64 = 28.98;

/// Offset between the Celsius and Kelvin scales.
pub const CELSIUS_TO_KELVIN: f64 = 273.15;

/// Molar gas constant, J/(K·mol).
pub const MOLAR_GAS_CONSTANT: f64 = 8.314_462_618_153_24;

/// Molar mass of water, g/mol.
pub const WATER_MOLAR_MASS: f64 = 18.015_28;

/// Specific heat capacity of dry air, kJ/(kg·K).
pub const DRY_AIR_HEAT_CAPACITY: f64 = 1.007;

/// Specific heat capacity of water vapor, kJ/(kg·K).
pub const WATER_STEAM_HEAT_CAPACITY: f64 = 2.0784;

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: f64 = 3600.0;
