//! Errors reported by external collaborators (ground-motion models).

use super::error_code::{self, DisaggErrorCode};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CollaboratorError {
    #[error("Ground-motion model {model} failed: {message}")]
    QueryFailed { model: String, message: String },

    #[error("Ground-motion model {model} returned an invalid exceedance probability: {value}")]
    InvalidExceedance { model: String, value: f64 },
}

impl DisaggErrorCode for CollaboratorError {
    fn error_code(&self) -> &'static str {
        error_code::COLLABORATOR_ERROR
    }
}
