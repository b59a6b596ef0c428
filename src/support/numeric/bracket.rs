use num_traits::Float;
use tracing::debug;

use super::{NumericError, NumericResult, widen};

/// Returns the indices of the tightest samples bracketing `value`.
///
/// For `samples[i] < value < samples[i + 1]` this is `(i, i + 1)`. A value
/// equal to a sample, including the last one, returns that index twice.
///
/// `samples` must be sorted ascending; the result for unsorted input is
/// unspecified.
///
/// # Example
///
/// ```
/// use hvac_engine::support::numeric::nearest_bracket;
///
/// let flows = [1.0, 3.0, 5.0, 7.0];
/// assert_eq!(nearest_bracket(4.0, &flows)?, (1, 2));
/// assert_eq!(nearest_bracket(7.0, &flows)?, (3, 3));
/// assert!(nearest_bracket(8.0, &flows).is_err());
/// # Ok::<(), hvac_engine::support::numeric::NumericError>(())
/// ```
///
/// # Errors
///
/// - [`NumericError::NotANumber`] if `value` is `NaN`.
/// - [`NumericError::TooFewSamples`] if `samples` is empty.
/// - [`NumericError::OutOfRange`] if `value` is outside the span of `samples`.
pub fn nearest_bracket<T: Float>(value: T, samples: &[T]) -> NumericResult<(usize, usize)> {
    if value.is_nan() {
        return Err(NumericError::NotANumber {
            context: "bracket search value",
        });
    }
    let (Some(&first), Some(&last)) = (samples.first(), samples.last()) else {
        return Err(NumericError::TooFewSamples {
            required: 1,
            found: 0,
        });
    };

    let index = samples.partition_point(|&sample| sample < value);
    if index < samples.len() && samples[index] == value {
        return Ok((index, index));
    }
    if index == 0 || index == samples.len() {
        debug!(
            value = widen(value),
            lower = widen(first),
            upper = widen(last),
            "value outside sampled span"
        );
        return Err(NumericError::OutOfRange {
            value: widen(value),
            lower: widen(first),
            upper: widen(last),
        });
    }
    Ok((index - 1, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: [f64; 4] = [1.0, 3.0, 5.0, 7.0];

    #[test]
    fn interior_value_is_bracketed() {
        assert_eq!(nearest_bracket(4.0, &SAMPLES), Ok((1, 2)));
        assert_eq!(nearest_bracket(1.5, &SAMPLES), Ok((0, 1)));
        assert_eq!(nearest_bracket(6.999, &SAMPLES), Ok((2, 3)));
    }

    #[test]
    fn exact_samples_return_the_same_index() {
        assert_eq!(nearest_bracket(1.0, &SAMPLES), Ok((0, 0)));
        assert_eq!(nearest_bracket(5.0, &SAMPLES), Ok((2, 2)));
        assert_eq!(nearest_bracket(7.0, &SAMPLES), Ok((3, 3)));
    }

    #[test]
    fn duplicate_samples_match_the_first() {
        assert_eq!(nearest_bracket(3.0, &[1.0, 3.0, 3.0, 4.0]), Ok((1, 1)));
    }

    #[test]
    fn outside_the_span_is_out_of_range() {
        assert_eq!(
            nearest_bracket(8.0, &SAMPLES),
            Err(NumericError::OutOfRange {
                value: 8.0,
                lower: 1.0,
                upper: 7.0
            })
        );
        assert!(matches!(
            nearest_bracket(0.0, &SAMPLES),
            Err(NumericError::OutOfRange { .. })
        ));
    }

    #[test]
    fn single_sample_only_matches_itself() {
        assert_eq!(nearest_bracket(2.0_f32, &[2.0]), Ok((0, 0)));
        assert!(nearest_bracket(2.5_f32, &[2.0]).is_err());
    }

    #[test]
    fn degenerate_inputs() {
        assert!(matches!(
            nearest_bracket(1.0, &[] as &[f64]),
            Err(NumericError::TooFewSamples { found: 0, .. })
        ));
        assert!(matches!(
            nearest_bracket(f64::NAN, &SAMPLES),
            Err(NumericError::NotANumber { .. })
        ));
    }
}
