use std::cmp::Ordering;

use num_traits::Float;

use super::{
    BisectionConfig, NumericError, NumericResult, bisection_search_with, linear_interpolation,
    nearest_bracket,
};

/// A curve sampled on a strictly ascending axis with `N` dependent series.
///
/// A fan curve, for example, samples static pressure and shaft power
/// (`N = 2`) at a set of flows.
///
/// # Example
///
/// ```
/// use hvac_engine::support::numeric::{BisectionConfig, SampledCurve};
///
/// // Flow (m³/h) → [static pressure (Pa), shaft power (kW)]
/// let curve = SampledCurve::new(
///     vec![0.0_f64, 1000.0, 2000.0, 3000.0],
///     vec![[800.0, 0.30], [760.0, 0.42], [640.0, 0.55], [400.0, 0.63]],
/// )?;
///
/// let [pressure, power] = curve.evaluate(1500.0)?;
/// assert!((pressure - 700.0).abs() < 1e-9);
/// assert!((power - 0.485).abs() < 1e-9);
///
/// let flow = curve.solve_for(0, 700.0, &BisectionConfig::new(1e-6))?;
/// assert!((flow - 1500.0).abs() < 1e-3);
/// # Ok::<(), hvac_engine::support::numeric::NumericError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve<T, const N: usize> {
    axis: Vec<T>,
    values: Vec<[T; N]>,
}

impl<T: Float, const N: usize> SampledCurve<T, N> {
    /// Creates a curve from parallel axis samples and value rows.
    ///
    /// # Errors
    ///
    /// - [`NumericError::LengthMismatch`] if the two vectors differ in length.
    /// - [`NumericError::TooFewSamples`] for fewer than two samples.
    /// - [`NumericError::Unsorted`] if the axis is not strictly ascending or
    ///   contains `NaN`.
    pub fn new(axis: Vec<T>, values: Vec<[T; N]>) -> NumericResult<Self> {
        if axis.len() != values.len() {
            return Err(NumericError::LengthMismatch {
                expected: axis.len(),
                found: values.len(),
            });
        }
        if axis.len() < 2 {
            return Err(NumericError::TooFewSamples {
                required: 2,
                found: axis.len(),
            });
        }
        let ascending = |pair: &[T]| pair[0].partial_cmp(&pair[1]) == Some(Ordering::Less);
        if let Some(index) = axis.windows(2).position(|pair| !ascending(pair)) {
            return Err(NumericError::Unsorted { index: index + 1 });
        }

        Ok(Self { axis, values })
    }

    /// Creates a curve from `(x, values)` points.
    ///
    /// # Errors
    ///
    /// See [`SampledCurve::new`].
    pub fn from_points(points: impl IntoIterator<Item = (T, [T; N])>) -> NumericResult<Self> {
        let (axis, values) = points.into_iter().unzip();
        Self::new(axis, values)
    }

    /// Axis samples, ascending.
    pub fn axis(&self) -> &[T] {
        &self.axis
    }

    /// Value rows, parallel to [`SampledCurve::axis`].
    pub fn values(&self) -> &[[T; N]] {
        &self.values
    }

    /// Returns the first and last axis samples.
    pub fn span(&self) -> (T, T) {
        (self.axis[0], self.axis[self.axis.len() - 1])
    }

    /// Linearly interpolates every series at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`NumericError::OutOfRange`] if `x` is outside the sampled span.
    pub fn evaluate(&self, x: T) -> NumericResult<[T; N]> {
        let (lo, hi) = nearest_bracket(x, &self.axis)?;
        let (x1, x2) = (self.axis[lo], self.axis[hi]);
        let (row1, row2) = (&self.values[lo], &self.values[hi]);

        Ok(std::array::from_fn(|i| {
            linear_interpolation(x, x1, x2, row1[i], row2[i])
        }))
    }

    /// Finds the axis value where `series` reaches `target`.
    ///
    /// The series must be monotonic over the span. A decreasing series (such
    /// as fan pressure against flow) is searched on its negation, so the
    /// bisection always sees an increasing function.
    ///
    /// # Errors
    ///
    /// - [`NumericError::NoSuchSeries`] if `series >= N`.
    /// - Any error from [`bisection_search_with`], notably
    ///   [`NumericError::OutOfRange`] when the series never reaches `target`.
    pub fn solve_for(
        &self,
        series: usize,
        target: T,
        config: &BisectionConfig<T>,
    ) -> NumericResult<T> {
        if series >= N {
            return Err(NumericError::NoSuchSeries {
                index: series,
                count: N,
            });
        }

        let (x_min, x_max) = self.span();
        let first = self.values[0][series];
        let last = self.values[self.values.len() - 1][series];
        let sign = if last < first { -T::one() } else { T::one() };

        let f = |x: T| {
            self.evaluate(x)
                .map_or_else(|_| T::nan(), |row| sign * row[series])
        };
        bisection_search_with(f, x_min, x_max, sign * target, config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn fan() -> SampledCurve<f64, 2> {
        SampledCurve::from_points([
            (0.0, [900.0, 0.20]),
            (2000.0, [850.0, 0.60]),
            (4000.0, [700.0, 0.95]),
            (6000.0, [420.0, 1.20]),
        ])
        .unwrap()
    }

    #[test]
    fn evaluates_all_series() {
        let curve = fan();

        let [pressure, power] = curve.evaluate(3000.0).unwrap();
        assert_relative_eq!(pressure, 775.0);
        assert_relative_eq!(power, 0.775, epsilon = 1e-12);

        assert_eq!(curve.evaluate(6000.0).unwrap(), [420.0, 1.20]);
        assert_eq!(curve.span(), (0.0, 6000.0));
    }

    #[test]
    fn outside_span_is_out_of_range() {
        assert!(matches!(
            fan().evaluate(6500.0),
            Err(NumericError::OutOfRange { .. })
        ));
    }

    #[test]
    fn solves_increasing_and_decreasing_series() {
        let curve = fan();
        let config = BisectionConfig::new(1e-9);

        let flow = curve.solve_for(1, 0.95, &config).unwrap();
        assert_relative_eq!(flow, 4000.0, epsilon = 1e-3);

        let flow = curve.solve_for(0, 560.0, &config).unwrap();
        assert_relative_eq!(flow, 5000.0, epsilon = 1e-3);
    }

    #[test]
    fn unreachable_target_is_out_of_range() {
        let config = BisectionConfig::new(1e-9);
        assert!(matches!(
            fan().solve_for(0, 1000.0, &config),
            Err(NumericError::OutOfRange { .. })
        ));
    }

    #[test]
    fn missing_series_is_rejected() {
        let config = BisectionConfig::new(1e-9);
        assert_eq!(
            fan().solve_for(2, 1.0, &config),
            Err(NumericError::NoSuchSeries { index: 2, count: 2 })
        );
    }

    #[test]
    fn construction_is_validated() {
        assert_eq!(
            SampledCurve::<f64, 1>::new(vec![0.0, 1.0], vec![[1.0]]),
            Err(NumericError::LengthMismatch {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            SampledCurve::<f64, 1>::new(vec![0.0], vec![[1.0]]),
            Err(NumericError::TooFewSamples {
                required: 2,
                found: 1
            })
        );
        assert_eq!(
            SampledCurve::<f64, 1>::new(vec![0.0, 2.0, 2.0], vec![[1.0], [2.0], [3.0]]),
            Err(NumericError::Unsorted { index: 2 })
        );
        assert_eq!(
            SampledCurve::<f64, 1>::new(vec![0.0, f64::NAN], vec![[1.0], [2.0]]),
            Err(NumericError::Unsorted { index: 1 })
        );
    }
}
