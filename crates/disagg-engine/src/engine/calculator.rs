//! The disaggregation pass.

use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info, info_span, trace, warn};

use disagg_core::config::{DisaggConfig, OutputMode};
use disagg_core::constants::MIN_MAGNITUDE_PARAM;
use disagg_core::errors::{CollaboratorError, EngineError, NormalizeError};
use disagg_core::traits::{
    EarthquakeForecast, GroundMotionModel, GroundMotionRegistry, GroundMotionRequest,
    HazardCurve, SeismicSource,
};
use disagg_core::types::{Dimension, Site};

use super::accumulator::Accumulator;
use super::diagnostics::DisaggDiagnostics;
use super::options::EngineOptions;
use crate::bins::BinSpecification;
use crate::curve::TabulatedHazardCurve;
use crate::geo::nearest_point;
use crate::matrix::{BinIndex, DisaggregationMatrix};
use crate::normalize::normalize;

/// Annual occurrence rate of a Poisson process with probability `p` of at
/// least one event per year: `-ln(1 - p)`.
///
/// `p` must lie in `[0, 1)`; `p == 1` yields an infinite rate.
pub fn annual_rate(p: f64) -> f64 {
    -(-p).ln_1p()
}

/// Everything one computation produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisaggregationResult {
    pub matrix: DisaggregationMatrix,
    /// Target probability of exceedance the pass ran at.
    pub poe: f64,
    /// Ground-motion level obtained by inverting the hazard curve.
    pub iml: f64,
    /// Sum of accepted contributions before any normalization.
    pub total_rate: f64,
    /// Scaling applied to `matrix`.
    pub output: OutputMode,
    pub diagnostics: DisaggDiagnostics,
}

/// Computes disaggregation matrices over a fixed bin specification.
///
/// The engine holds no per-call state; one instance can serve any number of
/// sites and forecasts, from any number of threads.
#[derive(Debug, Clone)]
pub struct DisaggregationEngine {
    bins: BinSpecification,
    options: EngineOptions,
}

impl DisaggregationEngine {
    pub fn new(bins: BinSpecification, options: EngineOptions) -> Self {
        Self { bins, options }
    }

    /// Engine with default options: sequential, normalized output.
    pub fn with_defaults(bins: BinSpecification) -> Self {
        Self::new(bins, EngineOptions::default())
    }

    /// Build an engine from a resolved configuration.
    pub fn from_config(config: &DisaggConfig) -> Result<Self, EngineError> {
        DisaggConfig::validate(config)?;
        let bins = BinSpecification::from_config(&config.bins)?;
        Ok(Self::new(bins, EngineOptions::from_config(&config.engine)))
    }

    pub fn bins(&self) -> &BinSpecification {
        &self.bins
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// A tabulated hazard curve using the configured interpolation.
    pub fn hazard_curve(
        &self,
        levels: Vec<f64>,
        poes: Vec<f64>,
    ) -> Result<TabulatedHazardCurve, EngineError> {
        Ok(TabulatedHazardCurve::new(levels, poes)?.with_interpolation(self.options.interpolation))
    }

    /// `compute` at the configured target probability of exceedance.
    pub fn compute_configured(
        &self,
        site: &Site,
        forecast: &dyn EarthquakeForecast,
        ground_motion: &GroundMotionRegistry,
        hazard_curve: &dyn HazardCurve,
    ) -> Result<DisaggregationResult, EngineError> {
        self.compute(site, forecast, ground_motion, self.options.poe, hazard_curve)
    }

    /// The disaggregation matrix for `site` at exceedance probability `poe`.
    pub fn compute_matrix(
        &self,
        site: &Site,
        forecast: &dyn EarthquakeForecast,
        ground_motion: &GroundMotionRegistry,
        poe: f64,
        hazard_curve: &dyn HazardCurve,
    ) -> Result<DisaggregationMatrix, EngineError> {
        self.compute(site, forecast, ground_motion, poe, hazard_curve)
            .map(|result| result.matrix)
    }

    /// Like `compute_matrix`, also returning the IML, the total accepted
    /// rate and the run diagnostics.
    pub fn compute(
        &self,
        site: &Site,
        forecast: &dyn EarthquakeForecast,
        ground_motion: &GroundMotionRegistry,
        poe: f64,
        hazard_curve: &dyn HazardCurve,
    ) -> Result<DisaggregationResult, EngineError> {
        let span = info_span!("disaggregation", site = site.name.as_deref().unwrap_or("-"), poe);
        let _enter = span.enter();
        let start = Instant::now();

        let iml = hazard_curve.iml_for_poe(poe)?;
        let min_magnitude =
            forecast
                .parameter(MIN_MAGNITUDE_PARAM)
                .ok_or_else(|| EngineError::InvalidState {
                    parameter: MIN_MAGNITUDE_PARAM.to_string(),
                })?;
        debug!(iml, min_magnitude, sources = forecast.source_count(), "starting pass");

        let pass = Pass {
            bins: &self.bins,
            site,
            forecast,
            ground_motion,
            iml,
            min_magnitude,
            distance_filter: self.options.distance_filter,
        };

        let accumulator = if self.options.parallel {
            self.run_parallel(&pass)?
        } else {
            pass.run_sequential()?
        };
        let Accumulator {
            mut matrix,
            diagnostics,
        } = accumulator;
        let total_rate = diagnostics.total_rate;

        if diagnostics.ruptures_accepted == 0 {
            warn!(
                ruptures = diagnostics.ruptures_visited,
                "no rupture fell inside the bin ranges"
            );
        }

        match self.options.output {
            OutputMode::Raw => {}
            OutputMode::Normalized => {
                if total_rate == 0.0 {
                    warn!("total rate is zero, cannot normalize");
                    return Err(NormalizeError::DivideByZero.into());
                }
                normalize(&mut matrix, total_rate)?;
            }
            OutputMode::NormalizedBy(factor) => normalize(&mut matrix, factor)?,
        }

        info!(
            sources = diagnostics.sources_visited,
            ruptures = diagnostics.ruptures_visited,
            accepted = diagnostics.ruptures_accepted,
            rejected = diagnostics.rejected(),
            total_rate,
            elapsed = ?start.elapsed(),
            "disaggregation complete"
        );

        Ok(DisaggregationResult {
            matrix,
            poe,
            iml,
            total_rate,
            output: self.options.output,
            diagnostics,
        })
    }

    fn run_parallel(&self, pass: &Pass<'_>) -> Result<Accumulator, EngineError> {
        match self.options.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| EngineError::ThreadPool {
                        message: e.to_string(),
                    })?;
                pool.install(|| pass.run_parallel())
            }
            None => pass.run_parallel(),
        }
    }
}

/// Inputs shared by every source of one computation.
struct Pass<'a> {
    bins: &'a BinSpecification,
    site: &'a Site,
    forecast: &'a dyn EarthquakeForecast,
    ground_motion: &'a GroundMotionRegistry,
    iml: f64,
    min_magnitude: f64,
    distance_filter: bool,
}

impl Pass<'_> {
    fn shape(&self) -> BinIndex {
        self.bins.matrix_shape()
    }

    fn run_sequential(&self) -> Result<Accumulator, EngineError> {
        let mut acc = Accumulator::new(self.shape());
        for index in 0..self.forecast.source_count() {
            self.accumulate_source(index, &mut acc)?;
        }
        Ok(acc)
    }

    fn run_parallel(&self) -> Result<Accumulator, EngineError> {
        let shape = self.shape();
        (0..self.forecast.source_count())
            .into_par_iter()
            .try_fold(
                || Accumulator::new(shape),
                |mut acc, index| {
                    self.accumulate_source(index, &mut acc)?;
                    Ok::<_, EngineError>(acc)
                },
            )
            .try_reduce(|| Accumulator::new(shape), |a, b| Ok(a.merge(b)))
    }

    fn accumulate_source(&self, index: usize, acc: &mut Accumulator) -> Result<(), EngineError> {
        let source = self.forecast.source(index);
        let probability = source.total_probability_above(self.min_magnitude);
        if !(0.0..1.0).contains(&probability) {
            return Err(EngineError::InvalidProbability {
                source_index: index,
                value: probability,
            });
        }
        let rate = annual_rate(probability);
        let region = source.tectonic_region();
        let model = self.ground_motion.get(region)?;

        acc.diagnostics.sources_visited += 1;
        debug!(
            source = index,
            %region,
            rate,
            ruptures = source.rupture_count(),
            "accumulating source"
        );

        self.accumulate_ruptures(index, source, model, rate, acc)
    }

    fn accumulate_ruptures(
        &self,
        source_index: usize,
        source: &dyn SeismicSource,
        model: &dyn GroundMotionModel,
        rate: f64,
        acc: &mut Accumulator,
    ) -> Result<(), EngineError> {
        let region = source.tectonic_region();
        for rupture_index in 0..source.rupture_count() {
            let rupture = source.rupture(rupture_index);
            acc.diagnostics.ruptures_visited += 1;

            let nearest = nearest_point(&rupture.surface, &self.site.location)?;
            let exceedance = model.query(&GroundMotionRequest {
                rupture: &rupture,
                site: self.site,
                iml: self.iml,
            })?;
            if !(0.0..=1.0).contains(&rupture.probability) {
                return Err(EngineError::InvalidRuptureProbability {
                    source_index,
                    rupture_index,
                    value: rupture.probability,
                });
            }
            if !(0.0..=1.0).contains(&exceedance.probability) {
                return Err(CollaboratorError::InvalidExceedance {
                    model: model.name().to_string(),
                    value: exceedance.probability,
                }
                .into());
            }

            let (latitude, longitude) = (nearest.location.latitude, nearest.location.longitude);
            let rejected = self
                .bins
                .first_out_of_range(latitude, longitude, rupture.magnitude, exceedance.epsilon)
                .or_else(|| {
                    (self.distance_filter
                        && !self.bins.edges(Dimension::Distance).contains(nearest.distance))
                    .then_some(Dimension::Distance)
                });
            if let Some(dimension) = rejected {
                trace!(
                    source = source_index,
                    rupture = rupture_index,
                    %dimension,
                    "rupture outside bin range"
                );
                acc.diagnostics.record_rejection(dimension);
                continue;
            }

            let bin = self.bins.bin_index(
                latitude,
                longitude,
                rupture.magnitude,
                exceedance.epsilon,
                region,
            )?;
            acc.add(bin, rate * exceedance.probability * rupture.probability);
        }
        Ok(())
    }
}
