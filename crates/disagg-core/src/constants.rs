//! Shared constants for the disaggregation engine.

/// Name of the forecast parameter carrying the minimum magnitude used for
/// source occurrence probabilities.
pub const MIN_MAGNITUDE_PARAM: &str = "min_mag";

/// Mean Earth radius in km, used for great-circle distances.
pub const EARTH_RADIUS_KM: f64 = 6371.0072;

/// Default target probability of exceedance (10% in the curve's time span).
pub const DEFAULT_POE: f64 = 0.1;

/// Environment variable read by `init_tracing`.
pub const LOG_ENV_VAR: &str = "DISAGG_LOG";

/// Project config file name.
pub const CONFIG_FILE_NAME: &str = "disagg.toml";

/// Number of matrix dimensions: lat, lon, mag, epsilon, tectonic region.
pub const MATRIX_RANK: usize = 5;
