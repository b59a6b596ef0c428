//! Octave-band noise spectra.
//!
//! Sound pressure levels are logarithmic power ratios. Two sources add by
//! summing their powers, `10·log10(Σ 10^(L/10))`, never by adding decibels.
//!
//! ```
//! use hvac_engine::support::noise::NoiseSpectrum;
//!
//! let fan = NoiseSpectrum::new([72.0, 75.0, 74.0, 70.0, 68.0, 64.0, 59.0, 52.0]);
//! let total = fan.total_noise();
//! assert!(total > 75.0 && total < 82.0);
//!
//! let twin = fan + fan;
//! assert!((twin[0] - 75.0103).abs() < 1e-3);
//! ```

mod error;
mod spectrum;

pub use error::NoiseError;
pub use spectrum::{A_WEIGHTING, BANDS, NoiseSpectrum, SILENCE_THRESHOLD};

/// Adds sound pressure levels (dB) logarithmically.
///
/// Returns negative infinity for an empty input, the level of no sources.
pub fn log_sum(levels: impl IntoIterator<Item = f64>) -> f64 {
    let power: f64 = levels.into_iter().map(|level| 10f64.powf(0.1 * level)).sum();
    10.0 * power.log10()
}
