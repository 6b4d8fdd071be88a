//! Configuration errors.

use super::error_code::{self, DisaggErrorCode};
use super::BinError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {path}")]
    FileNotFound { path: String },

    #[error("Config parse error in {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Config validation failed for {field}: {message}")]
    ValidationFailed { field: String, message: String },

    #[error("Invalid bin edges: {0}")]
    Bins(#[from] BinError),
}

impl DisaggErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Bins(e) => e.error_code(),
            _ => error_code::CONFIG_FILE_ERROR,
        }
    }
}
