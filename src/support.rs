//! Supporting toolkits used by the models.
//!
//! These modules are public because callers outside this crate (e.g. a
//! selection service) use them directly with primitive inputs.

pub mod constraint;
pub mod exchange;
pub mod noise;
pub mod numeric;
pub mod psychro;
pub mod real;
pub mod units;
