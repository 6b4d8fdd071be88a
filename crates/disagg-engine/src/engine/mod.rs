//! Disaggregation engine: iterates every source and rupture of a forecast,
//! queries the ground-motion models, and accumulates binned annual rates.

pub mod accumulator;
pub mod calculator;
pub mod diagnostics;
pub mod options;

pub use calculator::{annual_rate, DisaggregationEngine, DisaggregationResult};
pub use diagnostics::DisaggDiagnostics;
pub use options::EngineOptions;
