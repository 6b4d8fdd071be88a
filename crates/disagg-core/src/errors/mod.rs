//! Error handling for the disaggregation engine.
//! One error enum per subsystem, `thiserror` only.

pub mod bin_error;
pub mod classify_error;
pub mod collaborator_error;
pub mod config_error;
pub mod curve_error;
pub mod engine_error;
pub mod error_code;
pub mod geo_error;
pub mod matrix_error;
pub mod normalize_error;

pub use bin_error::BinError;
pub use classify_error::ClassifyError;
pub use collaborator_error::CollaboratorError;
pub use config_error::ConfigError;
pub use curve_error::CurveError;
pub use engine_error::EngineError;
pub use error_code::DisaggErrorCode;
pub use geo_error::GeoError;
pub use matrix_error::MatrixError;
pub use normalize_error::NormalizeError;
