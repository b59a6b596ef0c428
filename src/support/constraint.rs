//! Sign checks on physical inputs.
//!
//! Humidities, flows, solver accuracies and temperature differences used as
//! divisors are only meaningful on one side of zero. A [`Constraint`] marker
//! states which side, and [`Constrained<T, C>`] carries a value that was
//! checked against it.
//!
//! | Marker               | Accepts  | Used for                               |
//! |----------------------|----------|----------------------------------------|
//! | [`NonNegative`]      | `x >= 0` | humidity ratios and absolute humidity  |
//! | [`StrictlyPositive`] | `x > 0`  | air and water flows, solver accuracy   |
//! | [`NonZero`]          | `x != 0` | supply/return temperature differences  |
//!
//! `NaN` is rejected by every marker.

mod non_negative;
mod non_zero;
mod strictly_positive;

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::Zero;
use thiserror::Error;

pub use non_negative::NonNegative;
pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;

/// A sign rule a value must follow.
pub trait Constraint<T> {
    /// Checks `value` against the rule.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing how `value` breaks the rule.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// How a value broke a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value is negative")]
    Negative,
    #[error("value is zero")]
    Zero,
    #[error("value is NaN")]
    NotANumber,
}

/// A value known to satisfy the constraint `C`.
///
/// ```
/// use hvac_engine::support::constraint::{Constrained, StrictlyPositive};
///
/// let air_flow = Constrained::<f64, StrictlyPositive>::new(4500.0)?;
/// assert_eq!(air_flow.get(), 4500.0);
///
/// assert!(Constrained::<f64, StrictlyPositive>::new(0.0).is_err());
/// # Ok::<(), hvac_engine::support::constraint::ConstraintError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C> {
    value: T,
    constraint: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns the error reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value).map(|()| Self {
            value,
            constraint: PhantomData,
        })
    }

    /// Unwraps the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T: Copy, C> Constrained<T, C> {
    /// The checked value.
    #[must_use]
    pub fn get(&self) -> T {
        self.value
    }
}

/// Orders `value` against zero, failing for `NaN`.
fn sign<T: PartialOrd + Zero>(value: &T) -> Result<Ordering, ConstraintError> {
    value
        .partial_cmp(&T::zero())
        .ok_or(ConstraintError::NotANumber)
}
