//! Classification errors.

use super::error_code::{self, DisaggErrorCode};

/// Errors raised when a value cannot be assigned to a bin.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifyError {
    /// The value lies outside `[edges[0], edges[last])` or is NaN.
    /// Callers that gate with `in_range` never see this.
    #[error("Value '{value}' is outside the expected range [{low}, {high})")]
    OutOfRange { value: f64, low: f64, high: f64 },

    #[error("Unknown tectonic region category: {name}")]
    UnknownCategory { name: String },
}

impl DisaggErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => error_code::OUT_OF_RANGE_VALUE,
            Self::UnknownCategory { .. } => error_code::UNKNOWN_CATEGORY,
        }
    }
}
