//! Private per-worker accumulation state.

use crate::matrix::{BinIndex, DisaggregationMatrix};

use super::diagnostics::DisaggDiagnostics;

/// A partial matrix plus the counters that go with it.
///
/// Sequential runs use one accumulator; parallel runs give each rayon split
/// its own and sum them at the end.
#[derive(Debug, Clone)]
pub(crate) struct Accumulator {
    pub(crate) matrix: DisaggregationMatrix,
    pub(crate) diagnostics: DisaggDiagnostics,
}

impl Accumulator {
    pub(crate) fn new(shape: BinIndex) -> Self {
        Self {
            matrix: DisaggregationMatrix::zeros(shape),
            diagnostics: DisaggDiagnostics::default(),
        }
    }

    pub(crate) fn add(&mut self, index: BinIndex, contribution: f64) {
        self.matrix[index] += contribution;
        self.diagnostics.ruptures_accepted += 1;
        self.diagnostics.total_rate += contribution;
    }

    pub(crate) fn merge(mut self, other: Accumulator) -> Self {
        self.matrix.merge(&other.matrix);
        self.diagnostics.merge(&other.diagnostics);
        self
    }
}
