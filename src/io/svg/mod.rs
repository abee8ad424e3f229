//! SVG format writing operations for choropleth export.

mod color;
mod geometry;
mod proj;
mod writer;

pub use color::Rgb;
pub(crate) use geometry::*;
pub(crate) use proj::*;
pub(crate) use writer::*;
