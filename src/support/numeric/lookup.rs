//! Bracket-and-interpolate lookups over tabulated surfaces.

use num_traits::Float;

use super::{NumericResult, bilinear_interpolation, nearest_bracket};

/// Interpolates a tabulated surface whose X and Y axes share one sample grid.
///
/// Both `target_x` and `target_y` are bracketed in the same `axis`, then the
/// four corner values are read through `value(data, x_index, y_index)` and
/// combined with [`bilinear_interpolation`].
///
/// # Precondition
///
/// This is only correct when the surface was sampled on an identical grid in
/// X and Y. For independent grids use [`bilinear_lookup_grid`].
///
/// # Errors
///
/// Propagates the [`nearest_bracket`] errors for either target.
pub fn bilinear_lookup<T, D, F>(
    target_x: T,
    target_y: T,
    axis: &[T],
    data: &D,
    value: F,
) -> NumericResult<T>
where
    T: Float,
    D: ?Sized,
    F: Fn(&D, usize, usize) -> T,
{
    bilinear_lookup_grid(target_x, axis, target_y, axis, data, value)
}

/// Interpolates a tabulated surface sampled on independent X and Y grids.
///
/// `value(data, i, j)` must return the sample at `(x_axis[i], y_axis[j])`.
///
/// # Example
///
/// ```
/// use hvac_engine::support::numeric::bilinear_lookup_grid;
///
/// // Attenuation (dB) by air velocity (rows) and octave band centre (columns).
/// let velocities = [2.0_f64, 4.0, 6.0];
/// let bands = [125.0, 250.0];
/// let table = [[10.0, 14.0], [9.0, 13.0], [7.0, 11.0]];
///
/// let db = bilinear_lookup_grid(3.0, &velocities, 187.5, &bands, &table, |t, i, j| t[i][j])?;
/// assert!((db - 11.5).abs() < 1e-12);
/// # Ok::<(), hvac_engine::support::numeric::NumericError>(())
/// ```
///
/// # Errors
///
/// Propagates the [`nearest_bracket`] errors for either target.
pub fn bilinear_lookup_grid<T, D, F>(
    target_x: T,
    x_axis: &[T],
    target_y: T,
    y_axis: &[T],
    data: &D,
    value: F,
) -> NumericResult<T>
where
    T: Float,
    D: ?Sized,
    F: Fn(&D, usize, usize) -> T,
{
    let (x_lo, x_hi) = nearest_bracket(target_x, x_axis)?;
    let (y_lo, y_hi) = nearest_bracket(target_y, y_axis)?;

    Ok(bilinear_interpolation(
        target_x,
        x_axis[x_lo],
        x_axis[x_hi],
        target_y,
        y_axis[y_lo],
        y_axis[y_hi],
        value(data, x_lo, y_lo),
        value(data, x_lo, y_hi),
        value(data, x_hi, y_lo),
        value(data, x_hi, y_hi),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::numeric::NumericError;

    /// `z = x + 10·y` sampled on a shared grid.
    fn plane(axis: &[f64]) -> Vec<Vec<f64>> {
        axis.iter()
            .map(|x| axis.iter().map(|y| x + 10.0 * y).collect())
            .collect()
    }

    #[test]
    fn shared_grid_reproduces_a_plane() {
        let axis = [0.0, 1.0, 2.0, 4.0];
        let table = plane(&axis);

        let z = bilinear_lookup(1.5, 3.0, &axis, &table, |t: &Vec<Vec<f64>>, i, j| t[i][j])
            .unwrap();
        assert_relative_eq!(z, 31.5);
    }

    #[test]
    fn exact_grid_points_return_samples() {
        let axis = [0.0, 1.0, 2.0];
        let table = plane(&axis);

        let z = bilinear_lookup(2.0, 1.0, &axis, &table, |t: &Vec<Vec<f64>>, i, j| t[i][j])
            .unwrap();
        assert_eq!(z, 12.0);
    }

    #[test]
    fn independent_grids() {
        let x_axis = [0.0, 10.0];
        let y_axis = [100.0, 200.0, 300.0];
        let table: [[f64; 3]; 2] = [[1.0, 2.0, 3.0], [11.0, 12.0, 13.0]];

        let z = bilinear_lookup_grid(5.0, &x_axis, 250.0, &y_axis, &table, |t, i, j| t[i][j])
            .unwrap();
        assert_relative_eq!(z, 7.5);
    }

    #[test]
    fn out_of_span_target_fails() {
        let axis = [0.0, 1.0];
        let table = plane(&axis);

        let result = bilinear_lookup(0.5, 1.5, &axis, &table, |t: &Vec<Vec<f64>>, i, j| t[i][j]);
        assert!(matches!(result, Err(NumericError::OutOfRange { .. })));
    }
}
