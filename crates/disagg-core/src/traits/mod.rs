//! Collaborator traits consumed by the engine.
//!
//! Forecasts, ground-motion models, and hazard curves live outside the
//! engine; these traits are the only surface it sees.

pub mod forecast;
pub mod ground_motion;
pub mod hazard_curve;

pub use forecast::{EarthquakeForecast, SeismicSource};
pub use ground_motion::{Exceedance, GroundMotionModel, GroundMotionRegistry, GroundMotionRequest};
pub use hazard_curve::HazardCurve;
