//! Numeric tools for evaluating tabulated performance data.
//!
//! Manufacturer data for fans, coils and attenuators arrives as sampled
//! curves and grids. This module provides the pieces needed to evaluate them:
//!
//! - [`bisection_search`]: Locate `x` such that `f(x)` hits a target.
//! - [`linear_interpolation`], [`bilinear_interpolation`]: Two-point and
//!   four-corner interpolation, tolerant of collapsed axes.
//! - [`nearest_bracket`]: Find the samples surrounding a value.
//! - [`bilinear_lookup`], [`bilinear_lookup_grid`]: Bracket and interpolate
//!   a tabulated surface.
//! - [`zero_anchored_quadratic_fit`]: Fit `y = a·x² + b·x` through two points.
//! - [`SampledCurve`]: A validated curve with one or more dependent series.
//!
//! Everything is generic over [`num_traits::Float`].

mod bisection;
mod bracket;
mod curve;
mod error;
mod interpolation;
mod lookup;
mod parabola;
mod scalar;

pub use bisection::{BisectionConfig, bisection_search, bisection_search_with};
pub use bracket::nearest_bracket;
pub use curve::SampledCurve;
pub use error::NumericError;
pub use interpolation::{bilinear_interpolation, linear_interpolation};
pub use lookup::{bilinear_lookup, bilinear_lookup_grid};
pub use parabola::{ZeroAnchoredParabola, zero_anchored_quadratic_fit};
pub use scalar::{logistic_sigmoid, round_to};

use num_traits::Float;

/// A result type alias for the numeric toolkit.
pub type NumericResult<T> = Result<T, NumericError>;

/// Widens a value for error reporting.
fn widen<T: Float>(value: T) -> f64 {
    value.to_f64().unwrap_or(f64::NAN)
}

/// Converts an `f64` literal into `T`.
///
/// Every `Float` type represents the small literals used in this module.
fn literal<T: Float>(value: f64) -> T {
    T::from(value).unwrap_or_else(T::nan)
}
