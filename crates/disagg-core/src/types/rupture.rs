use serde::{Deserialize, Serialize};

use super::Location;

/// A single earthquake rupture produced by a seismic source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rupture {
    pub magnitude: f64,
    /// Probability of occurrence over the forecast duration, in [0, 1].
    pub probability: f64,
    /// Ordered points of the rupture surface trace.
    pub surface: Vec<Location>,
}

impl Rupture {
    pub fn new(magnitude: f64, probability: f64, surface: Vec<Location>) -> Self {
        Self {
            magnitude,
            probability,
            surface,
        }
    }
}
