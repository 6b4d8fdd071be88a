//! Validated bin-edge sequences.

use serde::Serialize;

use disagg_core::errors::BinError;
use disagg_core::types::Dimension;

use crate::binner;

/// Check that `edges` can serve as bin edges for `dimension`.
///
/// Rules, in the order they are checked:
/// present, at least 2 values, every value finite, non-decreasing
/// (repeated edges are allowed and produce empty bins).
pub fn validate_bin_edges(dimension: Dimension, edges: Option<&[f64]>) -> Result<(), BinError> {
    let edges = edges.ok_or(BinError::Missing { dimension })?;

    if edges.len() < 2 {
        return Err(BinError::TooFewEdges {
            dimension,
            len: edges.len(),
        });
    }

    if let Some(index) = edges.iter().position(|e| !e.is_finite()) {
        return Err(BinError::NonFinite { dimension, index });
    }

    for (index, pair) in edges.windows(2).enumerate() {
        if pair[1] < pair[0] {
            return Err(BinError::NotSorted {
                dimension,
                index: index + 1,
                value: pair[1],
                previous: pair[0],
            });
        }
    }

    Ok(())
}

/// An owned, validated, non-decreasing sequence of at least two edges.
///
/// Bin `i` is `[edges[i], edges[i + 1])`; the overall span is
/// `[edges[0], edges[last])`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinEdges {
    dimension: Dimension,
    edges: Vec<f64>,
}

impl BinEdges {
    /// Validate and take ownership of `edges`.
    pub fn new(dimension: Dimension, edges: Vec<f64>) -> Result<Self, BinError> {
        validate_bin_edges(dimension, Some(&edges))?;
        Ok(Self { dimension, edges })
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.edges
    }

    /// Number of bins, one less than the number of edges.
    pub fn bin_count(&self) -> usize {
        self.edges.len() - 1
    }

    /// Lowest edge (inclusive).
    pub fn low(&self) -> f64 {
        self.edges[0]
    }

    /// Highest edge (exclusive).
    pub fn high(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    /// Whether `value` falls inside the overall span.
    pub fn contains(&self, value: f64) -> bool {
        binner::in_range(&self.edges, value)
    }

    /// Centre of each bin, for reporting.
    pub fn midpoints(&self) -> Vec<f64> {
        self.edges
            .windows(2)
            .map(|pair| 0.5 * (pair[0] + pair[1]))
            .collect()
    }
}
