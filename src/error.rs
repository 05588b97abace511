// error.rs - Configuration error taxonomy for the scan driver

use thiserror::Error;

/// Errors detected at setup, before any Monte Carlo sweep runs.
///
/// The engine itself has no I/O and no transient failure modes; everything
/// that can go wrong is a bad configuration, reported synchronously.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("lattice side must be positive, got {0}")]
    ZeroLatticeSide(usize),

    #[error("equilibration sweep count must be positive")]
    ZeroEquilibrationSweeps,

    #[error("measurement sweep count must be positive")]
    ZeroMeasurementSweeps,

    #[error("temperature range [{t_start}, {t_end}] with {nt} points is empty or inverted")]
    BadTemperatureRange { t_start: f64, t_end: f64, nt: usize },

    #[error("temperature must be positive, got {0}")]
    NonPositiveTemperature(f64),
}
