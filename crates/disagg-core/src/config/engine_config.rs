//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_POE;

/// How the accumulated matrix is scaled before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Divide by the total accepted rate; cells sum to 1.
    #[default]
    Normalized,
    /// Divide by a caller-supplied factor.
    NormalizedBy(f64),
    /// Annual-rate contributions, unscaled.
    Raw,
}

/// Interpolation used when inverting a tabulated hazard curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Interpolation {
    #[default]
    Linear,
    /// Linear in log(level) vs log(poe).
    LogLog,
}

/// Configuration for the disaggregation engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Target probability of exceedance. Default: 0.1.
    pub poe: Option<f64>,
    /// Output scaling. Default: normalized.
    pub output: Option<OutputMode>,
    /// Hazard-curve interpolation. Default: linear.
    pub interpolation: Option<Interpolation>,
    /// Split sources across a rayon pool. Default: false.
    pub parallel: Option<bool>,
    /// Worker threads for parallel runs. Default: rayon's global pool.
    pub threads: Option<usize>,
    /// Exclude ruptures whose nearest distance lies outside the distance
    /// edges. Default: false.
    pub distance_filter: Option<bool>,
}

impl EngineConfig {
    pub fn effective_poe(&self) -> f64 {
        self.poe.unwrap_or(DEFAULT_POE)
    }

    pub fn effective_output(&self) -> OutputMode {
        self.output.unwrap_or_default()
    }

    pub fn effective_interpolation(&self) -> Interpolation {
        self.interpolation.unwrap_or_default()
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(false)
    }

    pub fn effective_distance_filter(&self) -> bool {
        self.distance_filter.unwrap_or(false)
    }

    pub(crate) fn merge(&mut self, other: &EngineConfig) {
        if other.poe.is_some() {
            self.poe = other.poe;
        }
        if other.output.is_some() {
            self.output = other.output;
        }
        if other.interpolation.is_some() {
            self.interpolation = other.interpolation;
        }
        if other.parallel.is_some() {
            self.parallel = other.parallel;
        }
        if other.threads.is_some() {
            self.threads = other.threads;
        }
        if other.distance_filter.is_some() {
            self.distance_filter = other.distance_filter;
        }
    }
}
