//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BinsConfig, EngineConfig, Interpolation, OutputMode};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (`ConfigOverrides`)
/// 2. Environment variables (`DISAGG_*`)
/// 3. Project config (`disagg.toml` in the given root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct DisaggConfig {
    pub bins: BinsConfig,
    pub engine: EngineConfig,
}

/// Overrides applied on top of every other layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub poe: Option<f64>,
    pub output: Option<OutputMode>,
    pub interpolation: Option<Interpolation>,
    pub parallel: Option<bool>,
    pub threads: Option<usize>,
    pub distance_filter: Option<bool>,
}

impl DisaggConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    ///
    /// Bin edges are validated by the engine when it builds its bin
    /// specification; this only checks scalar engine settings.
    pub fn validate(config: &DisaggConfig) -> Result<(), ConfigError> {
        if let Some(poe) = config.engine.poe {
            if !(poe > 0.0 && poe < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.poe".to_string(),
                    message: format!("must be in (0, 1), got {poe}"),
                });
            }
        }
        if let Some(threads) = config.engine.threads {
            if threads == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.threads".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        if let Some(OutputMode::NormalizedBy(factor)) = config.engine.output {
            if factor == 0.0 || !factor.is_finite() {
                return Err(ConfigError::ValidationFailed {
                    field: "engine.output".to_string(),
                    message: format!("normalization factor must be finite and non-zero, got {factor}"),
                });
            }
        }
        Ok(())
    }

    fn merge_toml_file(config: &mut DisaggConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: DisaggConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        config.bins.merge(&file_config.bins);
        config.engine.merge(&file_config.engine);
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut DisaggConfig) {
        if let Some(v) = env_parsed::<f64>("DISAGG_POE") {
            config.engine.poe = Some(v);
        }
        if let Some(v) = env_parsed::<usize>("DISAGG_THREADS") {
            config.engine.threads = Some(v);
        }
        if let Some(v) = env_parsed::<bool>("DISAGG_PARALLEL") {
            config.engine.parallel = Some(v);
        }
        if let Some(v) = env_parsed::<bool>("DISAGG_DISTANCE_FILTER") {
            config.engine.distance_filter = Some(v);
        }
        if let Ok(val) = std::env::var("DISAGG_OUTPUT") {
            match val.trim().to_ascii_lowercase().as_str() {
                "raw" => config.engine.output = Some(OutputMode::Raw),
                "normalized" => config.engine.output = Some(OutputMode::Normalized),
                other => tracing::warn!(value = other, "ignoring unrecognized DISAGG_OUTPUT"),
            }
        }
        if let Ok(val) = std::env::var("DISAGG_INTERPOLATION") {
            match val.trim().to_ascii_lowercase().as_str() {
                "linear" => config.engine.interpolation = Some(Interpolation::Linear),
                "log_log" | "loglog" => config.engine.interpolation = Some(Interpolation::LogLog),
                other => tracing::warn!(value = other, "ignoring unrecognized DISAGG_INTERPOLATION"),
            }
        }
    }

    fn apply_overrides(config: &mut DisaggConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.poe {
            config.engine.poe = Some(v);
        }
        if let Some(v) = overrides.output {
            config.engine.output = Some(v);
        }
        if let Some(v) = overrides.parallel {
            config.engine.parallel = Some(v);
        }
        if let Some(v) = overrides.interpolation {
            config.engine.interpolation = Some(v);
        }
        if let Some(v) = overrides.threads {
            config.engine.threads = Some(v);
        }
        if let Some(v) = overrides.distance_filter {
            config.engine.distance_filter = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Option<T> {
    let val = std::env::var(key).ok()?;
    match val.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %val, "ignoring unparseable environment override");
            None
        }
    }
}
