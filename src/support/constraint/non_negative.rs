use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError, sign};

/// Accepts zero and positive values.
///
/// ```
/// use hvac_engine::support::constraint::NonNegative;
///
/// assert!(NonNegative::new(0.0).is_ok());
/// assert!(NonNegative::new(-0.5).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Shorthand for [`Constrained::<T, NonNegative>::new`](Constrained::new).
    ///
    /// # Errors
    ///
    /// Fails for negative values and `NaN`.
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, Self>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match sign(value)? {
            Ordering::Less => Err(ConstraintError::Negative),
            Ordering::Equal | Ordering::Greater => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humidity_ratio_range() {
        assert!(NonNegative::check(&0.0).is_ok());
        assert!(NonNegative::check(&100.0_f32).is_ok());
        assert!(NonNegative::check(&-0.0).is_ok());
        assert_eq!(NonNegative::check(&-1.0), Err(ConstraintError::Negative));
        assert_eq!(NonNegative::check(&f64::NAN), Err(ConstraintError::NotANumber));
    }

    #[test]
    fn wraps_absolute_humidity() {
        let humidity = NonNegative::new(0.0072).unwrap();
        assert_eq!(humidity.get(), 0.0072);
    }
}
