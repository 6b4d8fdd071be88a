use serde::{Deserialize, Serialize};

/// A point on or below the Earth's surface.
///
/// Latitude and longitude are in decimal degrees, depth in km (positive down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub depth: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, depth: f64) -> Self {
        Self {
            latitude,
            longitude,
            depth,
        }
    }

    /// A location at the surface (depth 0).
    pub fn surface(latitude: f64, longitude: f64) -> Self {
        Self::new(latitude, longitude, 0.0)
    }
}

/// The site at which hazard is disaggregated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    pub location: Location,
    /// Optional label, only used in log output.
    #[serde(default)]
    pub name: Option<String>,
}

impl Site {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            name: None,
        }
    }

    pub fn named(name: impl Into<String>, location: Location) -> Self {
        Self {
            location,
            name: Some(name.into()),
        }
    }
}
