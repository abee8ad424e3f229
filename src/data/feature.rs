use geo::{BoundingRect, MultiPolygon, Rect};

use super::FipsCode;

/// One county shape decoded from the topology.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoFeature {
    pub id: FipsCode,
    pub geometry: MultiPolygon<f64>,
}

impl GeoFeature {
    pub fn new(id: FipsCode, geometry: MultiPolygon<f64>) -> Self {
        Self { id, geometry }
    }

    /// Bounding box of the geometry, `None` for an empty shape.
    pub fn bounds(&self) -> Option<Rect<f64>> { self.geometry.bounding_rect() }
}

/// Union of the bounding boxes of all features.
pub(crate) fn bounds_of(features: &[&GeoFeature]) -> Option<Rect<f64>> {
    features.iter()
        .filter_map(|feature| feature.bounds())
        .reduce(|a, b| {
            Rect::new(
                geo::coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
                geo::coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
            )
        })
}
