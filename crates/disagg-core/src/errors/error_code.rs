//! DisaggErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to expose a structured code string
/// that callers can match on without parsing messages.
pub trait DisaggErrorCode {
    /// Returns the error code string (e.g., "CONFIGURATION_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIGURATION_ERROR: &str = "CONFIGURATION_ERROR";
pub const CONFIG_FILE_ERROR: &str = "CONFIG_FILE_ERROR";
pub const OUT_OF_RANGE_VALUE: &str = "OUT_OF_RANGE_VALUE";
pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
pub const EMPTY_INPUT: &str = "EMPTY_INPUT";
pub const DIVIDE_BY_ZERO: &str = "DIVIDE_BY_ZERO";
pub const NON_FINITE_FACTOR: &str = "NON_FINITE_FACTOR";
pub const MISSING_COLLABORATOR: &str = "MISSING_COLLABORATOR";
pub const INVALID_STATE: &str = "INVALID_STATE";
pub const INVALID_PROBABILITY: &str = "INVALID_PROBABILITY";
pub const HAZARD_CURVE_ERROR: &str = "HAZARD_CURVE_ERROR";
pub const COLLABORATOR_ERROR: &str = "COLLABORATOR_ERROR";
pub const THREAD_POOL_ERROR: &str = "THREAD_POOL_ERROR";
pub const SHAPE_MISMATCH: &str = "SHAPE_MISMATCH";
