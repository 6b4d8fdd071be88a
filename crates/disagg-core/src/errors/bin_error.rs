//! Bin specification errors (the configuration error of the engine).

use super::error_code::{self, DisaggErrorCode};
use crate::types::Dimension;

/// Errors raised while validating bin-edge sequences.
///
/// All of these are fatal and surface before any computation starts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BinError {
    #[error("Bin edges for {dimension} are missing")]
    Missing { dimension: Dimension },

    #[error("Bin edges for {dimension} must have a length >= 2, got {len}")]
    TooFewEdges { dimension: Dimension, len: usize },

    #[error("Bin edges for {dimension} must be in ascending order (edge {index} is {value}, previous is {previous})")]
    NotSorted {
        dimension: Dimension,
        index: usize,
        value: f64,
        previous: f64,
    },

    #[error("Bin edges for {dimension} contain a non-finite value at index {index}")]
    NonFinite { dimension: Dimension, index: usize },
}

impl BinError {
    /// The dimension whose edges failed validation.
    pub fn dimension(&self) -> Dimension {
        match self {
            Self::Missing { dimension }
            | Self::TooFewEdges { dimension, .. }
            | Self::NotSorted { dimension, .. }
            | Self::NonFinite { dimension, .. } => *dimension,
        }
    }
}

impl DisaggErrorCode for BinError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIGURATION_ERROR
    }
}
