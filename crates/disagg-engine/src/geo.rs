//! Distances between locations and the nearest-point search over a
//! rupture trace.

use disagg_core::constants::EARTH_RADIUS_KM;
use disagg_core::errors::GeoError;
use disagg_core::types::Location;

/// Great-circle surface distance in km (haversine).
pub fn horizontal_distance(a: &Location, b: &Location) -> f64 {
    let lat1 = a.latitude.to_radians();
    let lat2 = b.latitude.to_radians();
    let half_dlat = 0.5 * (b.latitude - a.latitude).to_radians();
    let half_dlon = 0.5 * (b.longitude - a.longitude).to_radians();

    let h = half_dlat.sin().powi(2) + lat1.cos() * lat2.cos() * half_dlon.sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Absolute depth difference in km.
pub fn vertical_distance(a: &Location, b: &Location) -> f64 {
    (a.depth - b.depth).abs()
}

/// Combined distance: `sqrt(horizontal² + vertical²)`.
pub fn distance(a: &Location, b: &Location) -> f64 {
    horizontal_distance(a, b).hypot(vertical_distance(a, b))
}

/// Result of a nearest-point search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearestPoint {
    /// Position of the point in the searched sequence.
    pub index: usize,
    pub location: Location,
    /// Combined distance to the target in km.
    pub distance: f64,
}

/// The point of `points` closest to `target`.
///
/// Comparison is strict, so on ties the earliest point is kept.
pub fn nearest_point(points: &[Location], target: &Location) -> Result<NearestPoint, GeoError> {
    let (first, rest) = points.split_first().ok_or(GeoError::EmptyInput)?;

    let mut best = NearestPoint {
        index: 0,
        location: *first,
        distance: distance(first, target),
    };

    for (offset, point) in rest.iter().enumerate() {
        let d = distance(point, target);
        // NaN never wins a comparison; let any real distance replace it.
        if d < best.distance || (best.distance.is_nan() && !d.is_nan()) {
            best = NearestPoint {
                index: offset + 1,
                location: *point,
                distance: d,
            };
        }
    }

    Ok(best)
}
