use thiserror::Error;

/// Errors returned when combining noise spectra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NoiseError {
    /// No spectra were supplied.
    #[error("at least one spectrum is required")]
    Empty,
}
