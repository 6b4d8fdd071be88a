//! Bin-edge configuration.

use serde::{Deserialize, Serialize};

use crate::types::Dimension;

/// Raw bin edges per dimension, as read from TOML.
///
/// Nothing is validated here; a missing or malformed sequence is reported
/// when the engine's bin specification is built from it.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BinsConfig {
    pub latitude: Option<Vec<f64>>,
    pub longitude: Option<Vec<f64>>,
    pub magnitude: Option<Vec<f64>>,
    pub epsilon: Option<Vec<f64>>,
    pub distance: Option<Vec<f64>>,
}

impl BinsConfig {
    /// Edges configured for `dimension`, if any.
    pub fn edges(&self, dimension: Dimension) -> Option<&[f64]> {
        match dimension {
            Dimension::Latitude => self.latitude.as_deref(),
            Dimension::Longitude => self.longitude.as_deref(),
            Dimension::Magnitude => self.magnitude.as_deref(),
            Dimension::Epsilon => self.epsilon.as_deref(),
            Dimension::Distance => self.distance.as_deref(),
        }
    }

    /// Overwrite each dimension `other` sets.
    pub(crate) fn merge(&mut self, other: &BinsConfig) {
        if other.latitude.is_some() {
            self.latitude = other.latitude.clone();
        }
        if other.longitude.is_some() {
            self.longitude = other.longitude.clone();
        }
        if other.magnitude.is_some() {
            self.magnitude = other.magnitude.clone();
        }
        if other.epsilon.is_some() {
            self.epsilon = other.epsilon.clone();
        }
        if other.distance.is_some() {
            self.distance = other.distance.clone();
        }
    }
}
