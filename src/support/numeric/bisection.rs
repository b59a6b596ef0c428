use num_traits::Float;
use tracing::{debug, trace, warn};

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{NumericError, NumericResult, widen};

/// Solver configuration for [`bisection_search_with`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionConfig<T> {
    /// Stop once `|f(x_high) - f(x_low)|` is at or below this value.
    pub accuracy: T,

    /// Maximum number of midpoint evaluations.
    ///
    /// Valid inputs converge in about `log2(span / accuracy)` steps. The limit
    /// only trips for functions with jumps larger than `accuracy`.
    pub max_iters: usize,
}

impl<T: Float> BisectionConfig<T> {
    /// Default iteration limit, enough to exhaust an `f64` interval.
    pub const DEFAULT_MAX_ITERS: usize = 200;

    /// Creates a configuration with the given accuracy and the default iteration limit.
    #[must_use]
    pub fn new(accuracy: T) -> Self {
        Self {
            accuracy,
            max_iters: Self::DEFAULT_MAX_ITERS,
        }
    }
}

impl<T: Float> Default for BisectionConfig<T> {
    /// Uses the square root of machine epsilon as accuracy.
    fn default() -> Self {
        Self::new(T::epsilon().sqrt())
    }
}

/// Finds `x` in `[x_min, x_max]` where `f(x)` reaches `target`.
///
/// Shorthand for [`bisection_search_with`] using [`BisectionConfig::new`].
///
/// # Example
///
/// ```
/// use hvac_engine::support::numeric::bisection_search;
///
/// let x = bisection_search(|x: f64| x * x, 0.0, 4.0, 2.0, 1e-9)?;
/// assert!((x - 2.0_f64.sqrt()).abs() < 1e-8);
/// # Ok::<(), hvac_engine::support::numeric::NumericError>(())
/// ```
///
/// # Errors
///
/// See [`bisection_search_with`].
pub fn bisection_search<T, F>(f: F, x_min: T, x_max: T, target: T, accuracy: T) -> NumericResult<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    bisection_search_with(f, x_min, x_max, target, &BisectionConfig::new(accuracy))
}

/// Finds `x` in `[x_min, x_max]` where `f(x)` reaches `target`.
///
/// `target` must lie between `f(x_min)` and `f(x_max)`, inclusive. Each step
/// evaluates the midpoint and moves the upper bound there when
/// `f(mid) > target`, otherwise the lower bound. Iteration stops once
/// `|f(x_high) - f(x_low)| <= accuracy` and the midpoint of the final bracket
/// is returned.
///
/// The update rule assumes `f` is increasing between the brackets. No
/// monotonicity check is performed, and the result for a decreasing or
/// non-monotonic `f` is undefined: it is some point of the interval, not
/// necessarily a solution.
///
/// # Errors
///
/// - [`NumericError::InvalidAccuracy`] if the accuracy is not strictly positive.
/// - [`NumericError::NotANumber`] if `target` or any evaluation of `f` is `NaN`.
/// - [`NumericError::OutOfRange`] if `target` is not bracketed by the endpoint values.
/// - [`NumericError::MaxIters`] if the spread never drops to the accuracy.
pub fn bisection_search_with<T, F>(
    f: F,
    x_min: T,
    x_max: T,
    target: T,
    config: &BisectionConfig<T>,
) -> NumericResult<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    let accuracy = config.accuracy;
    if StrictlyPositive::check(&accuracy).is_err() {
        return Err(NumericError::InvalidAccuracy {
            accuracy: widen(accuracy),
        });
    }
    if target.is_nan() {
        return Err(NumericError::NotANumber { context: "target" });
    }

    let mut x_low = x_min;
    let mut x_high = x_max;
    let mut y_low = f(x_low);
    let mut y_high = f(x_high);

    if y_low.is_nan() || y_high.is_nan() {
        return Err(NumericError::NotANumber {
            context: "function value at bracket endpoint",
        });
    }

    if (target > y_high && target > y_low) || (target < y_high && target < y_low) {
        debug!(
            target = widen(target),
            y_low = widen(y_low),
            y_high = widen(y_high),
            "bisection target not bracketed"
        );
        return Err(NumericError::OutOfRange {
            value: widen(target),
            lower: widen(y_low.min(y_high)),
            upper: widen(y_low.max(y_high)),
        });
    }

    let two = T::one() + T::one();
    let mut iters = 0;
    while (y_high - y_low).abs() > accuracy {
        if iters == config.max_iters {
            let spread = widen((y_high - y_low).abs());
            warn!(iters, spread, "bisection hit iteration limit");
            return Err(NumericError::MaxIters { iters, spread });
        }

        let x_mid = (x_high + x_low) / two;
        let y_mid = f(x_mid);
        if y_mid.is_nan() {
            return Err(NumericError::NotANumber {
                context: "function value at midpoint",
            });
        }

        if y_mid > target {
            x_high = x_mid;
            y_high = y_mid;
        } else {
            x_low = x_mid;
            y_low = y_mid;
        }

        iters += 1;
        trace!(
            iters,
            x_low = widen(x_low),
            x_high = widen(x_high),
            "bisection step"
        );
    }

    debug!(iters, "bisection converged");
    Ok((x_high + x_low) / two)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn identity_converges_within_accuracy() {
        let accuracy = 1e-6;
        let x = bisection_search(|x: f64| x, 0.0, 10.0, 5.0, accuracy).unwrap();
        assert!((x - 5.0).abs() <= accuracy);
    }

    #[test]
    fn works_in_single_precision() {
        let x = bisection_search(|x: f32| 2.0 * x + 1.0, 0.0, 10.0, 8.0, 1e-4).unwrap();
        assert!((x - 3.5).abs() < 1e-3);
    }

    #[test]
    fn target_on_endpoint_is_accepted() {
        let x = bisection_search(|x: f64| x * x, 1.0, 3.0, 9.0, 1e-9).unwrap();
        assert_relative_eq!(x, 3.0, epsilon = 1e-8);

        let x = bisection_search(|x: f64| x * x, 1.0, 3.0, 1.0, 1e-9).unwrap();
        assert_relative_eq!(x, 1.0, epsilon = 1e-8);
    }

    #[test]
    fn unbracketed_target_is_out_of_range() {
        let result = bisection_search(|x: f64| x, 0.0, 10.0, 11.0, 1e-6);
        assert_eq!(
            result,
            Err(NumericError::OutOfRange {
                value: 11.0,
                lower: 0.0,
                upper: 10.0
            })
        );

        assert!(matches!(
            bisection_search(|x: f64| x, 0.0, 10.0, -0.5, 1e-6),
            Err(NumericError::OutOfRange { .. })
        ));
    }

    #[test]
    fn non_positive_accuracy_fails_fast() {
        for accuracy in [0.0, -1.0, f64::NAN] {
            assert!(matches!(
                bisection_search(|x: f64| x, 0.0, 10.0, 5.0, accuracy),
                Err(NumericError::InvalidAccuracy { .. })
            ));
        }
    }

    #[test]
    fn nan_target_is_rejected() {
        assert_eq!(
            bisection_search(|x: f64| x, 0.0, 10.0, f64::NAN, 1e-6),
            Err(NumericError::NotANumber { context: "target" })
        );
    }

    #[test]
    fn step_function_hits_iteration_limit() {
        let step = |x: f64| if x < 2.0 { 0.0 } else { 1.0 };
        let config = BisectionConfig {
            accuracy: 1e-3,
            max_iters: 60,
        };

        let result = bisection_search_with(step, 0.0, 4.0, 0.5, &config);
        assert!(matches!(result, Err(NumericError::MaxIters { iters: 60, .. })));
    }

    #[test]
    fn default_config_is_tight() {
        let config = BisectionConfig::<f64>::default();
        assert!(config.accuracy < 1e-7);
        assert_eq!(config.max_iters, BisectionConfig::<f64>::DEFAULT_MAX_ITERS);
    }
}
