//! TopoJSON decoding into per-county polygon features.
//!
//! A topology stores each shared boundary once as an "arc"; polygons reference
//! arcs by index (negative indices mean the arc is walked backwards as `!i`).
//! When a `transform` is present the arc positions are quantized and
//! delta-encoded, so they are accumulated and then scaled and translated.

use std::collections::BTreeMap;

use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde::Deserialize;
use serde_json::Value;

use super::{FipsCode, GeoFeature};

#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    #[error("failed to parse topology document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("not a topology document (type {0:?})")]
    NotTopology(String),

    #[error("object {name:?} not found in topology (available: {available})")]
    MissingObject { name: String, available: String },

    #[error("arc reference {index} out of range ({len} arcs)")]
    ArcOutOfRange { index: i64, len: usize },

    #[error("arc {arc} has a position with fewer than two coordinates")]
    ShortPosition { arc: usize },

    #[error("unsupported geometry type {0:?}: only polygons can be mapped")]
    UnsupportedGeometry(String),

    #[error("{kind} geometry without an id")]
    MissingId { kind: String },

    #[error("malformed arcs for {kind} geometry: {source}")]
    MalformedArcs {
        kind: String,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct Transform {
    scale: [f64; 2],
    translate: [f64; 2],
}

/// A geometry object inside `objects`. Kept loosely typed since the `type`
/// member may be `null` and `arcs` nests differently per type.
#[derive(Debug, Deserialize)]
struct TopoGeometry {
    #[serde(rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    id: Option<FipsCode>,
    #[serde(default)]
    arcs: Option<Value>,
    #[serde(default)]
    geometries: Vec<TopoGeometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Topology {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    transform: Option<Transform>,
    #[serde(default)]
    arcs: Vec<Vec<Vec<f64>>>,
    objects: BTreeMap<String, TopoGeometry>,
}

impl Topology {
    pub(crate) fn from_slice(bytes: &[u8]) -> Result<Self, TopologyError> {
        let topology: Topology = serde_json::from_slice(bytes)?;
        if topology.kind != "Topology" {
            return Err(TopologyError::NotTopology(topology.kind));
        }
        Ok(topology)
    }

    pub(crate) fn object_names(&self) -> impl Iterator<Item = &str> {
        self.objects.keys().map(String::as_str)
    }

    /// Decode the named object into features, in source order.
    /// A `GeometryCollection` yields one feature per member.
    pub(crate) fn features(&self, object: &str) -> Result<Vec<GeoFeature>, TopologyError> {
        let root = self.objects.get(object).ok_or_else(|| TopologyError::MissingObject {
            name: object.to_string(),
            available: self.object_names().collect::<Vec<_>>().join(", "),
        })?;

        let arcs = self.decode_arcs()?;

        match root.kind.as_deref() {
            Some("GeometryCollection") => root.geometries.iter()
                .map(|geometry| to_feature(geometry, &arcs))
                .collect(),
            _ => Ok(vec![to_feature(root, &arcs)?]),
        }
    }

    /// Absolute coordinates for every arc.
    fn decode_arcs(&self) -> Result<Vec<Vec<Coord<f64>>>, TopologyError> {
        self.arcs.iter().enumerate()
            .map(|(i, arc)| {
                let mut x = 0.0;
                let mut y = 0.0;
                arc.iter()
                    .map(|position| {
                        let [px, py] = match position.as_slice() {
                            [px, py, ..] => [*px, *py],
                            _ => return Err(TopologyError::ShortPosition { arc: i }),
                        };
                        Ok(match self.transform {
                            Some(Transform { scale, translate }) => {
                                x += px;
                                y += py;
                                Coord { x: x * scale[0] + translate[0], y: y * scale[1] + translate[1] }
                            }
                            None => Coord { x: px, y: py },
                        })
                    })
                    .collect()
            })
            .collect()
    }
}

fn to_feature(geometry: &TopoGeometry, arcs: &[Vec<Coord<f64>>]) -> Result<GeoFeature, TopologyError> {
    let kind = geometry.kind.as_deref().unwrap_or("null");
    let id = geometry.id.ok_or_else(|| TopologyError::MissingId { kind: kind.to_string() })?;

    let shape = match geometry.kind.as_deref() {
        None => MultiPolygon::new(vec![]),
        Some("Polygon") => {
            let refs: Vec<Vec<i64>> = arc_refs(geometry, kind)?;
            MultiPolygon::new(vec![polygon(&refs, arcs)?])
        }
        Some("MultiPolygon") => {
            let refs: Vec<Vec<Vec<i64>>> = arc_refs(geometry, kind)?;
            MultiPolygon::new(refs.iter()
                .map(|rings| polygon(rings, arcs))
                .collect::<Result<_, _>>()?)
        }
        Some(other) => return Err(TopologyError::UnsupportedGeometry(other.to_string())),
    };

    Ok(GeoFeature::new(id, shape))
}

fn arc_refs<T: serde::de::DeserializeOwned>(geometry: &TopoGeometry, kind: &str) -> Result<T, TopologyError> {
    let value = geometry.arcs.clone().unwrap_or(Value::Array(vec![]));
    serde_json::from_value(value)
        .map_err(|source| TopologyError::MalformedArcs { kind: kind.to_string(), source })
}

/// First ring is the exterior, the rest are holes.
fn polygon(rings: &[Vec<i64>], arcs: &[Vec<Coord<f64>>]) -> Result<Polygon<f64>, TopologyError> {
    let mut rings = rings.iter().map(|refs| ring(refs, arcs));
    let exterior = rings.next().transpose()?.unwrap_or_else(|| LineString::new(vec![]));
    let interiors = rings.collect::<Result<Vec<_>, _>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Stitch arcs into one ring. Consecutive arcs share an endpoint, so the last
/// accumulated point is dropped before each arc is appended.
fn ring(refs: &[i64], arcs: &[Vec<Coord<f64>>]) -> Result<LineString<f64>, TopologyError> {
    let mut points: Vec<Coord<f64>> = Vec::new();

    for &index in refs {
        let (slot, reversed) = if index < 0 { (!index, true) } else { (index, false) };
        let arc = usize::try_from(slot).ok()
            .and_then(|slot| arcs.get(slot))
            .ok_or(TopologyError::ArcOutOfRange { index, len: arcs.len() })?;

        points.pop();
        if reversed {
            points.extend(arc.iter().rev());
        } else {
            points.extend(arc.iter());
        }
    }

    // Degenerate rings are padded so they remain closed
    if let Some(&first) = points.first() {
        while points.len() < 4 { points.push(first) }
    }

    Ok(LineString::new(points))
}
