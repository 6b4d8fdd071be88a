//! Shared value types: locations, sites, ruptures, region categories, dimensions.

pub mod dimension;
pub mod location;
pub mod region;
pub mod rupture;

pub use dimension::Dimension;
pub use location::{Location, Site};
pub use region::TectonicRegion;
pub use rupture::Rupture;
