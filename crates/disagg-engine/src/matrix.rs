//! The 5-dimensional disaggregation matrix.

use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use disagg_core::constants::MATRIX_RANK;
use disagg_core::errors::MatrixError;

/// Indices along (latitude, longitude, magnitude, epsilon, tectonic region).
pub type BinIndex = [usize; MATRIX_RANK];

/// A matrix axis, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Latitude,
    Longitude,
    Magnitude,
    Epsilon,
    TectonicRegion,
}

impl Axis {
    pub const ALL: [Axis; MATRIX_RANK] = [
        Self::Latitude,
        Self::Longitude,
        Self::Magnitude,
        Self::Epsilon,
        Self::TectonicRegion,
    ];

    /// Position of this axis in a `BinIndex`.
    pub fn position(&self) -> usize {
        *self as usize
    }
}

/// Dense row-major storage of per-bin contributions.
///
/// Indexing with `matrix[index]` panics on an out-of-bounds index, like a
/// slice; use `get` for a checked lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawMatrix")]
pub struct DisaggregationMatrix {
    shape: BinIndex,
    cells: Vec<f64>,
}

/// Unchecked serialized form; goes through `from_cells` on the way in.
#[derive(Deserialize)]
struct RawMatrix {
    shape: BinIndex,
    cells: Vec<f64>,
}

impl TryFrom<RawMatrix> for DisaggregationMatrix {
    type Error = MatrixError;

    fn try_from(raw: RawMatrix) -> Result<Self, MatrixError> {
        Self::from_cells(raw.shape, raw.cells)
    }
}

impl DisaggregationMatrix {
    /// A zero-filled matrix of the given shape.
    pub fn zeros(shape: BinIndex) -> Self {
        let len = shape.iter().product();
        Self {
            shape,
            cells: vec![0.0; len],
        }
    }

    /// A matrix over existing row-major `cells`, which must hold exactly
    /// `shape.iter().product()` values.
    pub fn from_cells(shape: BinIndex, cells: Vec<f64>) -> Result<Self, MatrixError> {
        let expected: usize = shape.iter().product();
        if cells.len() != expected {
            return Err(MatrixError::ShapeMismatch {
                shape,
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self { shape, cells })
    }

    pub fn shape(&self) -> BinIndex {
        self.shape
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Flat row-major view of all cells.
    pub fn cells(&self) -> &[f64] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [f64] {
        &mut self.cells
    }

    fn offset(&self, index: &BinIndex) -> Option<usize> {
        let mut offset = 0;
        for (i, n) in index.iter().zip(&self.shape) {
            if i >= n {
                return None;
            }
            offset = offset * n + i;
        }
        Some(offset)
    }

    fn unravel(&self, mut offset: usize) -> BinIndex {
        let mut index = [0; MATRIX_RANK];
        for axis in (0..MATRIX_RANK).rev() {
            let n = self.shape[axis];
            index[axis] = offset % n;
            offset /= n;
        }
        index
    }

    pub fn get(&self, index: BinIndex) -> Option<f64> {
        self.offset(&index).map(|o| self.cells[o])
    }

    pub fn get_mut(&mut self, index: BinIndex) -> Option<&mut f64> {
        self.offset(&index).map(move |o| &mut self.cells[o])
    }

    /// Sum of all cells.
    pub fn total(&self) -> f64 {
        self.cells.iter().sum()
    }

    /// Add `other` cell by cell.
    ///
    /// # Panics
    /// Panics if the shapes differ.
    pub fn merge(&mut self, other: &DisaggregationMatrix) {
        assert_eq!(self.shape, other.shape, "cannot merge matrices of different shapes");
        for (a, b) in self.cells.iter_mut().zip(&other.cells) {
            *a += b;
        }
    }

    /// Every cell with its index, in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (BinIndex, f64)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(offset, &value)| (self.unravel(offset), value))
    }

    /// Cells holding a non-zero contribution.
    pub fn non_zero(&self) -> impl Iterator<Item = (BinIndex, f64)> + '_ {
        self.iter().filter(|(_, value)| *value != 0.0)
    }

    /// Sum over every axis but `axis`.
    pub fn marginal(&self, axis: Axis) -> Vec<f64> {
        let a = axis.position();
        let mut out = vec![0.0; self.shape[a]];
        for (index, value) in self.iter() {
            out[index[a]] += value;
        }
        out
    }

    /// Sum over every axis but `first` and `second`; `out[i][j]` holds bin
    /// `i` of `first` and bin `j` of `second`.
    pub fn marginal_pair(&self, first: Axis, second: Axis) -> Vec<Vec<f64>> {
        let (a, b) = (first.position(), second.position());
        let mut out = vec![vec![0.0; self.shape[b]]; self.shape[a]];
        for (index, value) in self.iter() {
            out[index[a]][index[b]] += value;
        }
        out
    }

    /// The dominant bin: the largest strictly positive cell, earliest on ties.
    pub fn mode(&self) -> Option<(BinIndex, f64)> {
        self.iter()
            .filter(|(_, value)| *value > 0.0)
            .fold(None, |best: Option<(BinIndex, f64)>, (index, value)| match best {
                Some((_, top)) if top >= value => best,
                _ => Some((index, value)),
            })
    }
}

impl Index<BinIndex> for DisaggregationMatrix {
    type Output = f64;

    fn index(&self, index: BinIndex) -> &f64 {
        match self.offset(&index) {
            Some(o) => &self.cells[o],
            None => panic!("bin index {index:?} out of bounds for shape {:?}", self.shape),
        }
    }
}

impl IndexMut<BinIndex> for DisaggregationMatrix {
    fn index_mut(&mut self, index: BinIndex) -> &mut f64 {
        match self.offset(&index) {
            Some(o) => &mut self.cells[o],
            None => panic!("bin index {index:?} out of bounds for shape {:?}", self.shape),
        }
    }
}
