use num_traits::Float;

use super::literal;

/// Rounds `value` to `digits` decimal places, halves away from zero.
///
/// Negative `digits` round to tens, hundreds, and so on. A precision finer
/// than `T` can represent returns `value` unchanged, and one coarser than its
/// range returns zero.
pub fn round_to<T: Float>(value: T, digits: i32) -> T {
    let scale = literal::<T>(10.0).powi(digits);
    if scale.is_zero() {
        return value * scale;
    }

    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}

/// Applies the standard logistic function `1 / (1 + e^(-x))` to each value.
pub fn logistic_sigmoid<T: Float>(values: &[T]) -> Vec<T> {
    values
        .iter()
        .map(|&x| T::one() / (T::one() + (-x).exp()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(round_to(2.5, 0), 3.0);
        assert_eq!(round_to(-2.5, 0), -3.0);
        assert_relative_eq!(round_to(54.349, 1), 54.3);
        assert_relative_eq!(round_to(1234.0, -2), 1200.0);
        assert_relative_eq!(round_to(67.25_f32, 1), 67.3);
    }

    #[test]
    fn extreme_precision_stays_finite() {
        assert_eq!(round_to(54.349, 400), 54.349);
        assert_eq!(round_to(1.5e300, 20), 1.5e300);
        assert_eq!(round_to(54.349, -400), 0.0);
        assert!(round_to(f64::NAN, 2).is_nan());
    }

    #[test]
    fn sigmoid_is_centred_and_bounded() {
        let out = logistic_sigmoid(&[0.0, 50.0, -50.0, 2.0]);
        assert_eq!(out.len(), 4);
        assert_relative_eq!(out[0], 0.5);
        assert_relative_eq!(out[1], 1.0, epsilon = 1e-12);
        assert_relative_eq!(out[2], 0.0, epsilon = 1e-12);
        assert_relative_eq!(out[3], 0.880_797_077_977_882_3, epsilon = 1e-12);
    }

    #[test]
    fn sigmoid_of_nothing_is_empty() {
        assert!(logistic_sigmoid::<f64>(&[]).is_empty());
    }
}
