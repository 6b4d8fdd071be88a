//! The full set of bins a disaggregation is computed over.

use serde::Serialize;

use disagg_core::config::BinsConfig;
use disagg_core::errors::{BinError, ClassifyError};
use disagg_core::types::{Dimension, TectonicRegion};

use super::edges::{validate_bin_edges, BinEdges};
use crate::binner::{BinClassifier, RegionClassifier};
use crate::matrix::BinIndex;

/// Validated, immutable bin edges for every continuous dimension, plus the
/// fixed tectonic-region enumeration.
///
/// The distance edges do not shape the matrix; they bound the optional
/// distance filter of the engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinSpecification {
    latitude: BinEdges,
    longitude: BinEdges,
    magnitude: BinEdges,
    epsilon: BinEdges,
    distance: BinEdges,
}

impl BinSpecification {
    /// Build a specification from owned edge sequences.
    ///
    /// Fails on the first invalid sequence, checked in
    /// latitude, longitude, magnitude, epsilon, distance order.
    pub fn new(
        latitude: Vec<f64>,
        longitude: Vec<f64>,
        magnitude: Vec<f64>,
        epsilon: Vec<f64>,
        distance: Vec<f64>,
    ) -> Result<Self, BinError> {
        Ok(Self {
            latitude: BinEdges::new(Dimension::Latitude, latitude)?,
            longitude: BinEdges::new(Dimension::Longitude, longitude)?,
            magnitude: BinEdges::new(Dimension::Magnitude, magnitude)?,
            epsilon: BinEdges::new(Dimension::Epsilon, epsilon)?,
            distance: BinEdges::new(Dimension::Distance, distance)?,
        })
    }

    /// Build a specification from configuration, copying the edges.
    pub fn from_config(config: &BinsConfig) -> Result<Self, BinError> {
        let take = |dimension: Dimension| -> Result<Vec<f64>, BinError> {
            config
                .edges(dimension)
                .map(<[f64]>::to_vec)
                .ok_or(BinError::Missing { dimension })
        };
        Self::new(
            take(Dimension::Latitude)?,
            take(Dimension::Longitude)?,
            take(Dimension::Magnitude)?,
            take(Dimension::Epsilon)?,
            take(Dimension::Distance)?,
        )
    }

    /// Every validation failure in `config`, one per offending dimension.
    /// Empty when the configuration is valid.
    pub fn validate_all(config: &BinsConfig) -> Vec<BinError> {
        Dimension::ALL
            .iter()
            .filter_map(|&dimension| validate_bin_edges(dimension, config.edges(dimension)).err())
            .collect()
    }

    pub fn edges(&self, dimension: Dimension) -> &BinEdges {
        match dimension {
            Dimension::Latitude => &self.latitude,
            Dimension::Longitude => &self.longitude,
            Dimension::Magnitude => &self.magnitude,
            Dimension::Epsilon => &self.epsilon,
            Dimension::Distance => &self.distance,
        }
    }

    /// Shape of the matrix: one axis per matrix dimension, regions last.
    pub fn matrix_shape(&self) -> BinIndex {
        [
            self.latitude.bin_count(),
            self.longitude.bin_count(),
            self.magnitude.bin_count(),
            self.epsilon.bin_count(),
            TectonicRegion::COUNT,
        ]
    }

    /// Whether all four continuous coordinates fall inside their spans.
    pub fn all_in_range(&self, latitude: f64, longitude: f64, magnitude: f64, epsilon: f64) -> bool {
        self.first_out_of_range(latitude, longitude, magnitude, epsilon)
            .is_none()
    }

    /// The first dimension (lat, lon, mag, epsilon order) whose span excludes
    /// its coordinate.
    pub fn first_out_of_range(
        &self,
        latitude: f64,
        longitude: f64,
        magnitude: f64,
        epsilon: f64,
    ) -> Option<Dimension> {
        [
            (&self.latitude, latitude),
            (&self.longitude, longitude),
            (&self.magnitude, magnitude),
            (&self.epsilon, epsilon),
        ]
        .into_iter()
        .find(|(edges, value)| !edges.contains(*value))
        .map(|(edges, _)| edges.dimension())
    }

    /// Classify a rupture into its 5-tuple of bin indices.
    pub fn bin_index(
        &self,
        latitude: f64,
        longitude: f64,
        magnitude: f64,
        epsilon: f64,
        region: TectonicRegion,
    ) -> Result<BinIndex, ClassifyError> {
        Ok([
            self.latitude.classify(latitude)?,
            self.longitude.classify(longitude)?,
            self.magnitude.classify(magnitude)?,
            self.epsilon.classify(epsilon)?,
            RegionClassifier.classify(region)?,
        ])
    }
}
