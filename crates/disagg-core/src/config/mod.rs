//! Configuration system.
//! TOML-based, layered resolution: overrides > env > project file > defaults.

pub mod bins_config;
pub mod disagg_config;
pub mod engine_config;

pub use bins_config::BinsConfig;
pub use disagg_config::{ConfigOverrides, DisaggConfig};
pub use engine_config::{EngineConfig, Interpolation, OutputMode};
