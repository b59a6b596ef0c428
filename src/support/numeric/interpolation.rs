use num_traits::Float;

/// Linearly interpolates (or extrapolates) between `(x1, val1)` and `(x2, val2)`.
///
/// Returns `val1` when `x1 == x2`.
///
/// Evaluating at `x1` returns exactly `val1` and at `x2` exactly `val2`.
///
/// # Example
///
/// ```
/// use hvac_engine::support::numeric::linear_interpolation;
///
/// assert_eq!(linear_interpolation(15.0, 10.0, 20.0, 100.0, 200.0), 150.0);
/// assert_eq!(linear_interpolation(25.0, 10.0, 20.0, 100.0, 200.0), 250.0);
/// assert_eq!(linear_interpolation(5.0, 10.0, 10.0, 100.0, 200.0), 100.0);
/// ```
pub fn linear_interpolation<T: Float>(target_x: T, x1: T, x2: T, val1: T, val2: T) -> T {
    if x1 == x2 {
        return val1;
    }
    let weight = (target_x - x1) / (x2 - x1);
    val1 * (T::one() - weight) + val2 * weight
}

/// Interpolates over the rectangle spanned by `(x1, x2)` × `(y1, y2)`.
///
/// Corner values are named by their sample indices, so `v12` is the value at
/// `(x1, y2)` and `v21` the value at `(x2, y1)`.
///
/// Interpolates along Y at `x1` and at `x2`, then along X between the two
/// results. A collapsed axis (`x1 == x2` or `y1 == y2`) reduces this to
/// one-dimensional interpolation along the other axis, and with both collapsed
/// `v11` is returned.
#[allow(clippy::too_many_arguments)]
pub fn bilinear_interpolation<T: Float>(
    target_x: T,
    x1: T,
    x2: T,
    target_y: T,
    y1: T,
    y2: T,
    v11: T,
    v12: T,
    v21: T,
    v22: T,
) -> T {
    let at_x1 = linear_interpolation(target_y, y1, y2, v11, v12);
    let at_x2 = linear_interpolation(target_y, y1, y2, v21, v22);
    linear_interpolation(target_x, x1, x2, at_x1, at_x2)
}
