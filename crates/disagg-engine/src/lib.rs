//! # disagg-engine
//!
//! Seismic-hazard disaggregation: splits the rate of exceeding a target
//! ground-motion level at a site into latitude / longitude / magnitude /
//! epsilon / tectonic-region bins.
//!
//! The building blocks (`binner`, `geo`, `normalize`) are usable on their
//! own; `engine::DisaggregationEngine` ties them together.

pub mod binner;
pub mod bins;
pub mod curve;
pub mod engine;
pub mod geo;
pub mod matrix;
pub mod normalize;

pub use binner::{classify, in_range, BinClassifier, RegionClassifier};
pub use bins::{BinEdges, BinSpecification};
pub use curve::TabulatedHazardCurve;
pub use engine::{
    annual_rate, DisaggDiagnostics, DisaggregationEngine, DisaggregationResult, EngineOptions,
};
pub use geo::{nearest_point, NearestPoint};
pub use matrix::{Axis, BinIndex, DisaggregationMatrix};
pub use normalize::{normalize, normalized};
