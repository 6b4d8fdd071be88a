//! Continuous disaggregation dimensions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A binned, continuous parameter of the disaggregation.
///
/// The tectonic-region category is the fifth matrix axis but is not a
/// `Dimension`: it has no edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Latitude,
    Longitude,
    Magnitude,
    Epsilon,
    Distance,
}

impl Dimension {
    /// All dimensions, in the order bin specifications are built.
    pub const ALL: [Dimension; 5] = [
        Self::Latitude,
        Self::Longitude,
        Self::Magnitude,
        Self::Epsilon,
        Self::Distance,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Magnitude => "magnitude",
            Self::Epsilon => "epsilon",
            Self::Distance => "distance",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
