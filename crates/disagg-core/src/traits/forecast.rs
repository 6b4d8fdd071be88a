//! Earthquake-rupture forecast traits.

use crate::types::{Rupture, TectonicRegion};

/// A seismic source enumerating its ruptures.
///
/// Ruptures are returned by value so implementations may generate them on
/// the fly instead of holding them in memory.
pub trait SeismicSource: Send + Sync {
    /// Total probability of at least one rupture with magnitude >= `min_magnitude`.
    fn total_probability_above(&self, min_magnitude: f64) -> f64;

    fn tectonic_region(&self) -> TectonicRegion;

    fn rupture_count(&self) -> usize;

    /// The rupture at `index`, for `index < rupture_count()`.
    fn rupture(&self, index: usize) -> Rupture;
}

/// An earthquake-rupture forecast: an indexed collection of sources plus
/// named numeric parameters (see `constants::MIN_MAGNITUDE_PARAM`).
pub trait EarthquakeForecast: Send + Sync {
    fn source_count(&self) -> usize;

    /// The source at `index`, for `index < source_count()`.
    fn source(&self, index: usize) -> &dyn SeismicSource;

    /// Value of a named parameter, `None` when the forecast does not define it.
    fn parameter(&self, name: &str) -> Option<f64>;
}
