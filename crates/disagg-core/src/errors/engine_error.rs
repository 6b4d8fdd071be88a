//! Engine errors.

use super::error_code::{self, DisaggErrorCode};
use super::{
    BinError, ClassifyError, CollaboratorError, ConfigError, CurveError, GeoError,
    NormalizeError,
};
use crate::types::TectonicRegion;

/// Errors that can occur while computing a disaggregation matrix.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("No ground-motion model registered for tectonic region {region}")]
    MissingCollaborator { region: TectonicRegion },

    #[error("Forecast parameter '{parameter}' is not set")]
    InvalidState { parameter: String },

    #[error("Source {source_index} has an invalid occurrence probability: {value}")]
    InvalidProbability { source_index: usize, value: f64 },

    #[error(
        "Rupture {rupture_index} of source {source_index} has an invalid occurrence probability: {value}"
    )]
    InvalidRuptureProbability {
        source_index: usize,
        rupture_index: usize,
        value: f64,
    },

    #[error("Failed to build worker pool: {message}")]
    ThreadPool { message: String },

    #[error("Bin error: {0}")]
    Bins(#[from] BinError),

    #[error("Classification error: {0}")]
    Classify(#[from] ClassifyError),

    #[error("Geometry error: {0}")]
    Geo(#[from] GeoError),

    #[error("Hazard curve error: {0}")]
    Curve(#[from] CurveError),

    #[error("Normalization error: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("Collaborator error: {0}")]
    Collaborator(#[from] CollaboratorError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl DisaggErrorCode for EngineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCollaborator { .. } => error_code::MISSING_COLLABORATOR,
            Self::InvalidState { .. } => error_code::INVALID_STATE,
            Self::InvalidProbability { .. } | Self::InvalidRuptureProbability { .. } => {
                error_code::INVALID_PROBABILITY
            }
            Self::ThreadPool { .. } => error_code::THREAD_POOL_ERROR,
            Self::Bins(e) => e.error_code(),
            Self::Classify(e) => e.error_code(),
            Self::Geo(e) => e.error_code(),
            Self::Curve(e) => e.error_code(),
            Self::Normalize(e) => e.error_code(),
            Self::Collaborator(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}
