//! Typed component models.
//!
//! Models compose the primitive toolkits in [`crate::support`] into the
//! operating-point calculations a selection layer needs for one component.
//! They take and return [`uom`] quantities, so callers never deal with the
//! catalog units (m³/h, L/h, kW) the toolkits use internally.
//!
//! # Organization
//!
//! Each model lives in its own module with a small error enum wrapping the
//! toolkit errors it can surface:
//!
//! - [`coil`]: Water-fed heating and cooling coils.
//! - [`fan`]: Fans described by a tabulated performance curve.

pub mod coil;
pub mod fan;
