//! Hazard curve errors.

use super::error_code::{self, DisaggErrorCode};

/// Errors raised while building or inverting a hazard curve.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CurveError {
    #[error("Hazard curve needs at least 2 points, got {len}")]
    TooFewPoints { len: usize },

    #[error("Hazard curve has {levels} levels but {poes} probabilities")]
    LengthMismatch { levels: usize, poes: usize },

    #[error("Hazard curve contains a non-finite value at index {index}")]
    NonFinite { index: usize },

    #[error("Hazard curve levels must be strictly increasing (index {index})")]
    LevelsNotIncreasing { index: usize },

    #[error("Hazard curve probabilities must be non-increasing (index {index})")]
    PoesNotDecreasing { index: usize },

    #[error("Hazard curve probability at index {index} is outside [0, 1]: {value}")]
    InvalidPoe { index: usize, value: f64 },

    #[error("Target probability {poe} is outside the curve range [{min}, {max}]")]
    OutOfRange { poe: f64, min: f64, max: f64 },

    #[error("Log-log interpolation needs positive values, got {value}")]
    NonPositive { value: f64 },
}

impl DisaggErrorCode for CurveError {
    fn error_code(&self) -> &'static str {
        error_code::HAZARD_CURVE_ERROR
    }
}
