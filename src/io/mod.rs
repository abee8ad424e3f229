//! IO module for format-specific writing operations.
//!
//! - `svg` - SVG markup for the map, the legend and the HTML page around them
//! - `fs` - atomic output files

mod fs;
mod svg;

pub(crate) use fs::*;
pub(crate) use svg::*;

pub use svg::Rgb;
