//! Geometry to SVG path data.

use geo::{CoordsIter, LineString, MultiPolygon};

use super::Projector;

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
/// Holes are separate subpaths, so the path must be filled with `evenodd`.
pub(crate) fn multipolygon_to_path(shape: &MultiPolygon<f64>, projector: &Projector) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        ring_to_path(polygon.exterior(), projector, &mut out);
        for interior in polygon.interiors() {
            ring_to_path(interior, projector, &mut out);
        }
    }

    out.trim_start().to_string()
}

/// Append a ring as an SVG subpath: "M x,y L x,y ... Z"
fn ring_to_path(ring: &LineString<f64>, projector: &Projector, out: &mut String) {
    let mut coords = ring.coords_iter()
        .map(|coord| projector.project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }
}
