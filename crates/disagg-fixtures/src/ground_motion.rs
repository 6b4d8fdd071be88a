//! Ground-motion models and hazard curves for tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};

use disagg_core::errors::{CollaboratorError, CurveError};
use disagg_core::traits::{Exceedance, GroundMotionModel, GroundMotionRequest, HazardCurve};

/// Returns the same exceedance for every query and counts the calls.
#[derive(Debug, Default)]
pub struct FixedGroundMotion {
    pub probability: f64,
    pub epsilon: f64,
    calls: AtomicUsize,
}

impl FixedGroundMotion {
    pub fn new(probability: f64, epsilon: f64) -> Self {
        Self {
            probability,
            epsilon,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of queries answered so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl GroundMotionModel for FixedGroundMotion {
    fn name(&self) -> &str {
        "fixed"
    }

    fn query(&self, _request: &GroundMotionRequest<'_>) -> Result<Exceedance, CollaboratorError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        Ok(Exceedance {
            probability: self.probability,
            epsilon: self.epsilon,
        })
    }
}

/// Fails every query.
#[derive(Debug, Clone, Default)]
pub struct FailingGroundMotion;

impl GroundMotionModel for FailingGroundMotion {
    fn name(&self) -> &str {
        "failing"
    }

    fn query(&self, _request: &GroundMotionRequest<'_>) -> Result<Exceedance, CollaboratorError> {
        Err(CollaboratorError::QueryFailed {
            model: self.name().to_string(),
            message: "model unavailable".to_string(),
        })
    }
}

/// Toy lognormal attenuation relation:
/// `ln(mean) = c0 + c1·M - c2·ln(R + c3)`, with `R` the flat-earth epicentral
/// distance in km from the first surface point and a constant `sigma`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AttenuationModel {
    pub c0: f64,
    pub c1: f64,
    pub c2: f64,
    pub c3: f64,
    pub sigma: f64,
}

impl Default for AttenuationModel {
    fn default() -> Self {
        Self {
            c0: -3.5,
            c1: 0.9,
            c2: 1.1,
            c3: 10.0,
            sigma: 0.6,
        }
    }
}

const KM_PER_DEGREE: f64 = 111.195;

impl AttenuationModel {
    fn ln_mean(&self, request: &GroundMotionRequest<'_>) -> f64 {
        let site = &request.site.location;
        let distance = request
            .rupture
            .surface
            .first()
            .map(|p| {
                let dy = (p.latitude - site.latitude) * KM_PER_DEGREE;
                let dx = (p.longitude - site.longitude)
                    * KM_PER_DEGREE
                    * site.latitude.to_radians().cos();
                dx.hypot(dy)
            })
            .unwrap_or(0.0);
        self.c0 + self.c1 * request.rupture.magnitude - self.c2 * (distance + self.c3).ln()
    }
}

impl GroundMotionModel for AttenuationModel {
    fn name(&self) -> &str {
        "attenuation"
    }

    fn query(&self, request: &GroundMotionRequest<'_>) -> Result<Exceedance, CollaboratorError> {
        if request.iml <= 0.0 {
            return Err(CollaboratorError::QueryFailed {
                model: self.name().to_string(),
                message: format!("ground-motion level must be positive, got {}", request.iml),
            });
        }
        let standard = Normal::new(0.0, 1.0).map_err(|e| CollaboratorError::QueryFailed {
            model: self.name().to_string(),
            message: e.to_string(),
        })?;
        let epsilon = (request.iml.ln() - self.ln_mean(request)) / self.sigma;
        Ok(Exceedance {
            probability: standard.sf(epsilon),
            epsilon,
        })
    }
}

/// A hazard curve that maps every probability to one level.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantHazardCurve(pub f64);

impl HazardCurve for ConstantHazardCurve {
    fn iml_for_poe(&self, _poe: f64) -> Result<f64, CurveError> {
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use disagg_core::types::{Location, Rupture, Site};

    #[test]
    fn test_attenuation_decreases_with_distance() {
        let model = AttenuationModel::default();
        let site = Site::new(Location::surface(0.0, 0.0));
        let near = Rupture::new(6.0, 0.1, vec![Location::surface(0.1, 0.0)]);
        let far = Rupture::new(6.0, 0.1, vec![Location::surface(1.0, 0.0)]);

        let query = |rupture: &Rupture| {
            model
                .query(&GroundMotionRequest {
                    rupture,
                    site: &site,
                    iml: 0.1,
                })
                .unwrap()
        };
        let (near, far) = (query(&near), query(&far));
        assert!(near.probability > far.probability);
        assert!(near.epsilon < far.epsilon);
        assert!((0.0..=1.0).contains(&near.probability));
    }

    #[test]
    fn test_fixed_counts_calls() {
        let model = FixedGroundMotion::new(0.5, 1.0);
        let site = Site::new(Location::surface(0.0, 0.0));
        let rupture = Rupture::new(6.0, 0.1, vec![Location::surface(0.0, 0.0)]);
        let request = GroundMotionRequest {
            rupture: &rupture,
            site: &site,
            iml: 0.1,
        };
        model.query(&request).unwrap();
        model.query(&request).unwrap();
        assert_eq!(model.calls(), 2);
    }
}
