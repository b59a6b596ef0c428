use num_traits::Float;

use super::{NumericError, NumericResult};

/// A parabola through the origin, `y = a·x² + b·x`.
///
/// Duct systems follow this shape: pressure drop vanishes at zero flow and
/// grows roughly with its square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZeroAnchoredParabola<T> {
    /// Quadratic coefficient.
    pub a: T,
    /// Linear coefficient.
    pub b: T,
}

impl<T: Float> ZeroAnchoredParabola<T> {
    /// Fits the parabola through `(x1, val1)` and `(x2, val2)`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::DegenerateInput`] if `x1` or `x2` is zero or
    /// the two samples coincide.
    pub fn through(x1: T, val1: T, x2: T, val2: T) -> NumericResult<Self> {
        if x1.is_zero() || x2.is_zero() {
            return Err(NumericError::DegenerateInput {
                context: "zero-anchored fit needs non-zero x samples",
            });
        }
        if x1 == x2 {
            return Err(NumericError::DegenerateInput {
                context: "zero-anchored fit needs distinct x samples",
            });
        }

        let denominator = x1 * (x1 - x2) * x2;
        let a = -((x1 * val2 - x2 * val1) / denominator);
        let b = -((x2 * x2 * val1 - x1 * x1 * val2) / denominator);
        Ok(Self { a, b })
    }

    /// Evaluates the parabola at `x`.
    pub fn evaluate(&self, x: T) -> T {
        self.a * x * x + self.b * x
    }
}

/// Fits `y = a·x² + b·x` through two samples and evaluates it at `target_x`.
///
/// # Example
///
/// ```
/// use hvac_engine::support::numeric::zero_anchored_quadratic_fit;
///
/// // y = x² sampled at 1 and 2.
/// let y = zero_anchored_quadratic_fit(1.0_f64, 2.0, 1.0, 4.0, 3.0)?;
/// assert!((y - 9.0).abs() < 1e-12);
/// # Ok::<(), hvac_engine::support::numeric::NumericError>(())
/// ```
///
/// # Errors
///
/// Returns [`NumericError::DegenerateInput`] when `x1 == 0`, `x2 == 0`, or `x1 == x2`.
pub fn zero_anchored_quadratic_fit<T: Float>(
    x1: T,
    x2: T,
    val1: T,
    val2: T,
    target_x: T,
) -> NumericResult<T> {
    Ok(ZeroAnchoredParabola::through(x1, val1, x2, val2)?.evaluate(target_x))
}
