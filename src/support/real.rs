//! Floating-point widths accepted by the physical models.
//!
//! The empirical fits in this crate (vapor pressure, water properties) carry
//! coefficients tuned for double precision. Functions generic over [`Real`]
//! widen their inputs to `f64`, evaluate, and narrow the result back to the
//! caller's width, so an `f32` caller gets the `f64` answer rounded once.

use std::fmt::Debug;

use num_traits::Float;

mod sealed {
    pub trait Sealed {}

    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// A floating-point type with lossless widening to `f64`.
///
/// Implemented for `f32` and `f64` only.
pub trait Real: Float + Debug + sealed::Sealed {
    /// Narrows an `f64` into this width.
    fn narrow(value: f64) -> Self;

    /// Widens this value to `f64` without loss.
    fn widen(self) -> f64;
}

impl Real for f64 {
    #[inline]
    fn narrow(value: f64) -> Self {
        value
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }
}

impl Real for f32 {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn narrow(value: f64) -> Self {
        value as f32
    }

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_precision_round_trips_through_double() {
        let x = 21.5_f32;
        assert_eq!(f32::narrow(x.widen()), x);
    }

    #[test]
    fn narrowing_rounds_once() {
        let x = f32::narrow(0.1);
        assert_eq!(x, 0.1_f32);
    }
}
