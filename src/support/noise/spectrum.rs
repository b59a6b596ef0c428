use std::ops::{Add, Index};

use crate::support::numeric::round_to;

use super::{NoiseError, log_sum};

/// Number of octave bands in a spectrum.
pub const BANDS: usize = 8;

/// Per-band A-weighting corrections, dB.
pub const A_WEIGHTING: [f64; BANDS] = [-26.2, -16.1, -8.6, -3.2, 0.0, 1.2, 1.0, -1.1];

/// Band levels at or below this many dB are treated as silence.
pub const SILENCE_THRESHOLD: f64 = 0.01;

/// Sound pressure levels (dB) in the eight octave bands 63 Hz to 8 kHz.
///
/// Band order is positional and never changes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NoiseSpectrum([f64; BANDS]);

impl NoiseSpectrum {
    /// Creates a spectrum from its band levels, lowest band first.
    #[must_use]
    pub const fn new(levels: [f64; BANDS]) -> Self {
        Self(levels)
    }

    /// A spectrum with every band at 0 dB.
    #[must_use]
    pub const fn silent() -> Self {
        Self([0.0; BANDS])
    }

    /// Returns the band levels, lowest band first.
    #[must_use]
    pub const fn levels(&self) -> &[f64; BANDS] {
        &self.0
    }

    /// Returns `true` if every band is at or below [`SILENCE_THRESHOLD`].
    #[must_use]
    pub fn is_silent(&self) -> bool {
        self.0.iter().all(|&level| level <= SILENCE_THRESHOLD)
    }

    /// Returns the overall level (dB) of all bands together.
    ///
    /// A silent spectrum totals exactly `0.0`. The result is not rounded.
    ///
    /// ```
    /// use hvac_engine::support::noise::NoiseSpectrum;
    ///
    /// let total = NoiseSpectrum::new([90.0; 8]).total_noise();
    /// assert!((total - 99.031).abs() < 1e-3);
    /// ```
    #[must_use]
    pub fn total_noise(&self) -> f64 {
        if self.is_silent() {
            0.0
        } else {
            log_sum(self.0)
        }
    }

    /// Returns the spectrum with the [`A_WEIGHTING`] corrections applied.
    #[must_use]
    pub fn a_scale(&self) -> Self {
        Self(std::array::from_fn(|band| self.0[band] + A_WEIGHTING[band]))
    }

    /// Returns the overall A-weighted level, dB(A).
    ///
    /// The silence rule applies to the weighted bands.
    #[must_use]
    pub fn a_weighted_total(&self) -> f64 {
        self.a_scale().total_noise()
    }

    /// Returns the spectrum with each band rounded to `digits` decimals,
    /// half away from zero.
    #[must_use]
    pub fn round(&self, digits: i32) -> Self {
        Self(self.0.map(|level| round_to(level, digits)))
    }

    /// Combines several sources into one spectrum, band by band.
    ///
    /// Each band of the result is the logarithmic sum of that band across
    /// all inputs.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::Empty`] if `spectra` yields nothing.
    pub fn combine<'a>(
        spectra: impl IntoIterator<Item = &'a NoiseSpectrum>,
    ) -> Result<Self, NoiseError> {
        let spectra: Vec<&NoiseSpectrum> = spectra.into_iter().collect();
        if spectra.is_empty() {
            return Err(NoiseError::Empty);
        }

        Ok(Self(std::array::from_fn(|band| {
            log_sum(spectra.iter().map(|spectrum| spectrum.0[band]))
        })))
    }
}

impl From<[f64; BANDS]> for NoiseSpectrum {
    fn from(levels: [f64; BANDS]) -> Self {
        Self(levels)
    }
}

impl Index<usize> for NoiseSpectrum {
    type Output = f64;

    fn index(&self, band: usize) -> &f64 {
        &self.0[band]
    }
}

/// Two sources heard together.
impl Add for NoiseSpectrum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(std::array::from_fn(|band| log_sum([self.0[band], rhs.0[band]])))
    }
}
