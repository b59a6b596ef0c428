use thiserror::Error;

/// Errors returned by the numeric toolkit.
///
/// Values are reported widened to `f64` regardless of the caller's float type.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum NumericError {
    /// The target lies outside the bracket or sampled span that was searched.
    #[error("value {value} is outside the range [{lower}, {upper}]")]
    OutOfRange { value: f64, lower: f64, upper: f64 },

    /// The inputs collapse so the requested computation is undefined.
    #[error("degenerate input: {context}")]
    DegenerateInput { context: &'static str },

    /// A solver accuracy was zero, negative or `NaN`.
    #[error("accuracy must be strictly positive, got {accuracy}")]
    InvalidAccuracy { accuracy: f64 },

    /// An input or an intermediate evaluation was `NaN`.
    #[error("encountered NaN: {context}")]
    NotANumber { context: &'static str },

    /// The bisection solver reached its iteration limit without converging.
    #[error("bisection hit iteration limit after {iters} iterations: spread={spread}")]
    MaxIters {
        /// Iteration count performed by the solver.
        iters: usize,

        /// Final `|f(x_high) - f(x_low)|`.
        spread: f64,
    },

    /// Axis samples are not strictly ascending at `index`.
    #[error("samples are not strictly ascending at index {index}")]
    Unsorted { index: usize },

    /// Parallel sample arrays have different lengths.
    #[error("expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    /// Not enough samples to span an interval.
    #[error("at least {required} samples are required, found {found}")]
    TooFewSamples { required: usize, found: usize },

    /// A curve series index is past the number of series.
    #[error("series {index} does not exist, curve has {count}")]
    NoSuchSeries { index: usize, count: usize },
}
