//! Ground-motion (intensity-measure) relationship traits.

use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::errors::{CollaboratorError, EngineError};
use crate::types::{Rupture, Site, TectonicRegion};

/// Immutable input of one ground-motion query.
#[derive(Debug, Clone, Copy)]
pub struct GroundMotionRequest<'a> {
    pub rupture: &'a Rupture,
    pub site: &'a Site,
    /// Ground-motion level at which exceedance is evaluated.
    pub iml: f64,
}

/// Output of one ground-motion query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Exceedance {
    /// Probability that `iml` is exceeded given the rupture occurs, in [0, 1].
    pub probability: f64,
    /// Standardized residual of `iml` relative to the model mean.
    pub epsilon: f64,
}

/// A ground-motion model for one tectonic region.
///
/// Queries take `&self` and an immutable request, so one instance can be
/// shared across worker threads. Implementations holding per-query scratch
/// state must synchronize it themselves.
pub trait GroundMotionModel: Send + Sync {
    /// Model name, used in errors and logs.
    fn name(&self) -> &str {
        "unnamed"
    }

    fn query(&self, request: &GroundMotionRequest<'_>) -> Result<Exceedance, CollaboratorError>;
}

/// Mapping from tectonic region to the ground-motion model that serves it.
#[derive(Clone, Default)]
pub struct GroundMotionRegistry {
    models: FxHashMap<TectonicRegion, Arc<dyn GroundMotionModel>>,
}

impl GroundMotionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `model` for `region`, replacing any previous entry.
    pub fn register(&mut self, region: TectonicRegion, model: Arc<dyn GroundMotionModel>) {
        self.models.insert(region, model);
    }

    /// Builder-style `register`.
    pub fn with(mut self, region: TectonicRegion, model: Arc<dyn GroundMotionModel>) -> Self {
        self.register(region, model);
        self
    }

    /// The model for `region`, or `MissingCollaborator`.
    pub fn get(&self, region: TectonicRegion) -> Result<&dyn GroundMotionModel, EngineError> {
        self.models
            .get(&region)
            .map(|m| m.as_ref())
            .ok_or(EngineError::MissingCollaborator { region })
    }

    pub fn contains(&self, region: TectonicRegion) -> bool {
        self.models.contains_key(&region)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }
}

impl fmt::Debug for GroundMotionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut regions: Vec<_> = self.models.keys().copied().collect();
        regions.sort();
        f.debug_struct("GroundMotionRegistry")
            .field("regions", &regions)
            .finish()
    }
}
