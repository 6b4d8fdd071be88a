//! Matrix normalization errors.

use super::error_code::{self, DisaggErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum NormalizeError {
    #[error("Cannot normalize by a zero factor")]
    DivideByZero,

    #[error("Cannot normalize by a non-finite factor: {factor}")]
    NonFiniteFactor { factor: f64 },
}

impl DisaggErrorCode for NormalizeError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::DivideByZero => error_code::DIVIDE_BY_ZERO,
            Self::NonFiniteFactor { .. } => error_code::NON_FINITE_FACTOR,
        }
    }
}
