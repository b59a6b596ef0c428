use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, sign};

/// Accepts any value other than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonZero;

impl NonZero {
    /// Shorthand for [`Constrained::<T, NonZero>::new`](Constrained::new).
    ///
    /// # Errors
    ///
    /// Fails for zero and `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign(value)? {
            Ordering::Equal => Err(ConstraintError::Zero),
            Ordering::Less | Ordering::Greater => Ok(()),
        }
    }
}
