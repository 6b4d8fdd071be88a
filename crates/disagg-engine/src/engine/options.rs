//! Engine run options.

use disagg_core::config::{EngineConfig, Interpolation, OutputMode};
use disagg_core::constants::DEFAULT_POE;

/// Options controlling one engine instance.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOptions {
    /// Target probability of exceedance for `compute_configured`.
    pub poe: f64,
    /// Interpolation of hazard curves built by the engine.
    pub interpolation: Interpolation,
    /// Output scaling applied after accumulation.
    pub output: OutputMode,
    /// Split sources across rayon workers.
    pub parallel: bool,
    /// Dedicated pool size for parallel runs; `None` uses the global pool.
    pub threads: Option<usize>,
    /// Reject ruptures whose nearest distance falls outside the distance edges.
    pub distance_filter: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            poe: DEFAULT_POE,
            interpolation: Interpolation::default(),
            output: OutputMode::default(),
            parallel: false,
            threads: None,
            distance_filter: false,
        }
    }
}

impl EngineOptions {
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            poe: config.effective_poe(),
            interpolation: config.effective_interpolation(),
            output: config.effective_output(),
            parallel: config.effective_parallel(),
            threads: config.threads,
            distance_filter: config.effective_distance_filter(),
        }
    }

    /// Raw annual-rate output, no normalization.
    pub fn raw() -> Self {
        Self {
            output: OutputMode::Raw,
            ..Self::default()
        }
    }

    pub fn with_poe(mut self, poe: f64) -> Self {
        self.poe = poe;
        self
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    pub fn with_distance_filter(mut self, enabled: bool) -> Self {
        self.distance_filter = enabled;
        self
    }
}
