//! Entities loaded from the two input datasets: county geometries decoded from
//! a topology document and per-county education statistics.

mod education;
mod feature;
mod fips;
mod topology;

pub use education::{parse_education, EducationRecord};
pub use feature::GeoFeature;
pub use fips::{FipsCode, FipsParseError};
pub use topology::TopologyError;

pub(crate) use feature::bounds_of;
pub(crate) use topology::Topology;
