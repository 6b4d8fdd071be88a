//! In-memory earthquake-rupture forecast.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use disagg_core::constants::MIN_MAGNITUDE_PARAM;
use disagg_core::traits::{EarthquakeForecast, SeismicSource};
use disagg_core::types::{Rupture, TectonicRegion};

/// A source holding its ruptures in a vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InMemorySource {
    pub region: TectonicRegion,
    pub ruptures: Vec<Rupture>,
    /// Overrides the probability derived from the ruptures.
    #[serde(default)]
    pub total_probability: Option<f64>,
}

impl InMemorySource {
    pub fn new(region: TectonicRegion, ruptures: Vec<Rupture>) -> Self {
        Self {
            region,
            ruptures,
            total_probability: None,
        }
    }

    /// Report `probability` from `total_probability_above` regardless of the
    /// ruptures.
    pub fn with_total_probability(mut self, probability: f64) -> Self {
        self.total_probability = Some(probability);
        self
    }
}

impl SeismicSource for InMemorySource {
    /// `1 - Π(1 - p)` over ruptures with magnitude >= `min_magnitude`,
    /// unless a fixed probability was set.
    fn total_probability_above(&self, min_magnitude: f64) -> f64 {
        if let Some(p) = self.total_probability {
            return p;
        }
        let none = self
            .ruptures
            .iter()
            .filter(|r| r.magnitude >= min_magnitude)
            .map(|r| 1.0 - r.probability)
            .product::<f64>();
        1.0 - none
    }

    fn tectonic_region(&self) -> TectonicRegion {
        self.region
    }

    fn rupture_count(&self) -> usize {
        self.ruptures.len()
    }

    fn rupture(&self, index: usize) -> Rupture {
        self.ruptures[index].clone()
    }
}

/// A forecast over in-memory sources with named parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InMemoryForecast {
    pub sources: Vec<InMemorySource>,
    #[serde(default)]
    pub parameters: BTreeMap<String, f64>,
}

impl InMemoryForecast {
    /// A forecast with the minimum-magnitude parameter set.
    pub fn new(min_magnitude: f64) -> Self {
        Self::default().with_parameter(MIN_MAGNITUDE_PARAM, min_magnitude)
    }

    /// A forecast with no parameters at all.
    pub fn without_parameters() -> Self {
        Self::default()
    }

    pub fn with_parameter(mut self, name: &str, value: f64) -> Self {
        self.parameters.insert(name.to_string(), value);
        self
    }

    pub fn with_source(mut self, source: InMemorySource) -> Self {
        self.sources.push(source);
        self
    }

    pub fn rupture_count(&self) -> usize {
        self.sources.iter().map(|s| s.ruptures.len()).sum()
    }
}

impl EarthquakeForecast for InMemoryForecast {
    fn source_count(&self) -> usize {
        self.sources.len()
    }

    fn source(&self, index: usize) -> &dyn SeismicSource {
        &self.sources[index]
    }

    fn parameter(&self, name: &str) -> Option<f64> {
        self.parameters.get(name).copied()
    }
}
