//! Counters describing what one computation accepted and rejected.

use serde::{Deserialize, Serialize};

use disagg_core::types::Dimension;

/// Per-run counters.
///
/// Ruptures rejected by the range check are attributed to the first
/// offending dimension (latitude, longitude, magnitude, epsilon order), so
/// `ruptures_accepted + rejected()` always equals `ruptures_visited`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisaggDiagnostics {
    pub sources_visited: usize,
    pub ruptures_visited: usize,
    pub ruptures_accepted: usize,
    pub rejected_latitude: usize,
    pub rejected_longitude: usize,
    pub rejected_magnitude: usize,
    pub rejected_epsilon: usize,
    pub rejected_distance: usize,
    /// Sum of every accepted contribution, before normalization.
    pub total_rate: f64,
}

impl DisaggDiagnostics {
    pub(crate) fn record_rejection(&mut self, dimension: Dimension) {
        match dimension {
            Dimension::Latitude => self.rejected_latitude += 1,
            Dimension::Longitude => self.rejected_longitude += 1,
            Dimension::Magnitude => self.rejected_magnitude += 1,
            Dimension::Epsilon => self.rejected_epsilon += 1,
            Dimension::Distance => self.rejected_distance += 1,
        }
    }

    /// Ruptures excluded from the matrix for any reason.
    pub fn rejected(&self) -> usize {
        self.rejected_latitude
            + self.rejected_longitude
            + self.rejected_magnitude
            + self.rejected_epsilon
            + self.rejected_distance
    }

    pub(crate) fn merge(&mut self, other: &DisaggDiagnostics) {
        self.sources_visited += other.sources_visited;
        self.ruptures_visited += other.ruptures_visited;
        self.ruptures_accepted += other.ruptures_accepted;
        self.rejected_latitude += other.rejected_latitude;
        self.rejected_longitude += other.rejected_longitude;
        self.rejected_magnitude += other.rejected_magnitude;
        self.rejected_epsilon += other.rejected_epsilon;
        self.rejected_distance += other.rejected_distance;
        self.total_rate += other.total_rate;
    }
}
