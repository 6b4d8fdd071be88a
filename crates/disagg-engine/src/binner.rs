//! Value-to-bin classification.
//!
//! Continuous dimensions classify against edge sequences; the tectonic
//! region classifies by ordinal position. Both sit behind `BinClassifier`
//! so the engine builds its 5-tuple of indices uniformly.

use disagg_core::errors::ClassifyError;
use disagg_core::types::TectonicRegion;

use crate::bins::BinEdges;

/// Whether `value` lies in `[edges[0], edges[last])`.
///
/// The top edge is excluded from the whole span. NaN is never in range.
/// `edges` must hold at least one value.
pub fn in_range(edges: &[f64], value: f64) -> bool {
    match (edges.first(), edges.last()) {
        (Some(&low), Some(&high)) => value >= low && value < high,
        _ => false,
    }
}

/// Index `i` such that `edges[i] <= value < edges[i + 1]`.
///
/// Linear scan; with repeated edges the first non-empty bin containing
/// `value` wins. Fails with `OutOfRange` when no bin matches, which cannot
/// happen for a value that passed `in_range`.
pub fn classify(edges: &[f64], value: f64) -> Result<usize, ClassifyError> {
    edges
        .windows(2)
        .position(|pair| value >= pair[0] && value < pair[1])
        .ok_or_else(|| ClassifyError::OutOfRange {
            value,
            low: edges.first().copied().unwrap_or(f64::NAN),
            high: edges.last().copied().unwrap_or(f64::NAN),
        })
}

/// Classifies a value of one matrix axis into a bin index.
pub trait BinClassifier {
    type Value;

    /// Number of bins along this axis.
    fn bin_count(&self) -> usize;

    fn classify(&self, value: Self::Value) -> Result<usize, ClassifyError>;
}

impl BinClassifier for BinEdges {
    type Value = f64;

    fn bin_count(&self) -> usize {
        BinEdges::bin_count(self)
    }

    fn classify(&self, value: f64) -> Result<usize, ClassifyError> {
        classify(self.as_slice(), value)
    }
}

/// Ordinal classifier over the fixed tectonic-region enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionClassifier;

impl RegionClassifier {
    /// Classify a region by name, failing with `UnknownCategory` for names
    /// outside the enumeration.
    pub fn classify_name(&self, name: &str) -> Result<usize, ClassifyError> {
        let region: TectonicRegion = name.parse()?;
        self.classify(region)
    }
}

impl BinClassifier for RegionClassifier {
    type Value = TectonicRegion;

    fn bin_count(&self) -> usize {
        TectonicRegion::COUNT
    }

    fn classify(&self, value: TectonicRegion) -> Result<usize, ClassifyError> {
        Ok(value.position())
    }
}
