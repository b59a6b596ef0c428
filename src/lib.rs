//! # HVAC Engine
//!
//! Physical models for air handling units: moist-air state, heat exchange
//! between air and water streams, octave-band noise, and the numeric tools
//! used to evaluate tabulated component performance curves.
//!
//! ## Crate layout
//!
//! - [`support`]: Stateless toolkits operating on primitive numbers.
//!   - [`support::psychro`]: Moist-air state and vapor/air properties.
//!   - [`support::exchange`]: Heating/cooling power, temperatures and condensate.
//!   - [`support::noise`]: Logarithmic combination of octave-band spectra.
//!   - [`support::numeric`]: Bisection, interpolation and curve fitting.
//! - [`models`]: Typed ([`uom`]) compositions of the toolkits for a water coil
//!   and a fan, returning the quantities a selection layer decides on.
//!
//! Every function is pure. Nothing here holds state, performs I/O, or
//! rounds values for display.

pub mod models;
pub mod support;
