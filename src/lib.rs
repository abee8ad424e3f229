#![doc = "Choropleth public API"]
mod classify;
mod common;
mod data;
mod io;
mod load;
mod render;

#[doc(inline)]
pub use data::{parse_education, EducationRecord, FipsCode, FipsParseError, GeoFeature, TopologyError};

#[doc(inline)]
pub use classify::{
    audit, classify, join, Bucket, ClassBreak, ClassScheme, ClassifiedCounty,
    DataIntegrityError, JoinReport, RecordIndex, SchemeError,
};

#[doc(inline)]
pub use load::{download_datasets, load_counties, load_education, parse_counties, Source};

#[doc(inline)]
pub use io::Rgb;

#[doc(inline)]
pub use render::{render, write_output, OutputFormat, Projection, RenderOptions};

/// Published counties topology (pre-projected, `objects.counties`).
pub const DEFAULT_COUNTIES_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/counties.json";

/// Published education statistics (flat array of county records).
pub const DEFAULT_EDUCATION_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/for_user_education.json";

/// Name of the topology object holding the county geometries.
pub const DEFAULT_COUNTIES_OBJECT: &str = "counties";
