//! # disagg-core
//!
//! Foundation crate for the disaggregation engine.
//! Defines the shared types, collaborator traits, errors, config, and tracing.
//! The engine and fixture crates depend on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::DisaggConfig;
pub use errors::{DisaggErrorCode, EngineError};
pub use traits::{EarthquakeForecast, GroundMotionModel, HazardCurve, SeismicSource};
pub use types::{Location, Rupture, Site, TectonicRegion};
