//! Geometry errors.

use super::error_code::{self, DisaggErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GeoError {
    #[error("Nearest-point search over an empty point sequence")]
    EmptyInput,
}

impl DisaggErrorCode for GeoError {
    fn error_code(&self) -> &'static str {
        error_code::EMPTY_INPUT
    }
}
