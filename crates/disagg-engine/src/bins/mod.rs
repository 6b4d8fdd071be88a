//! Bin definitions: validated edge sequences and the full specification.

pub mod edges;
pub mod specification;

pub use edges::{validate_bin_edges, BinEdges};
pub use specification::BinSpecification;
