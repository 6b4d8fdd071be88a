//! Hazard curve trait.

use crate::errors::CurveError;

/// A monotone relation between ground-motion level and probability of
/// exceedance at a site.
pub trait HazardCurve: Send + Sync {
    /// The ground-motion level whose exceedance probability equals `poe`.
    fn iml_for_poe(&self, poe: f64) -> Result<f64, CurveError>;
}
