//! Disaggregation matrix construction errors.

use super::error_code::{self, DisaggErrorCode};
use crate::constants::MATRIX_RANK;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("Matrix of shape {shape:?} needs {expected} cells, got {actual}")]
    ShapeMismatch {
        shape: [usize; MATRIX_RANK],
        expected: usize,
        actual: usize,
    },
}

impl DisaggErrorCode for MatrixError {
    fn error_code(&self) -> &'static str {
        error_code::SHAPE_MISMATCH
    }
}
