use std::collections::HashMap;

use super::model::{Element, OverpassResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryKind {
    Points,
    Lines,
    Polygons,
}

impl GeometryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Points => "points",
            Self::Lines => "lines",
            Self::Polygons => "polygons",
        }
    }
}

/// GeoJSON-shaped geometry. Coordinates are `[lon, lat]` pairs.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: [f64; 2] },
    LineString { coordinates: Vec<[f64; 2]> },
    Polygon { coordinates: Vec<Vec<[f64; 2]>> },
}

/// One assembled OSM feature, keyed by its source element id.
#[derive(Debug, Clone, PartialEq)]
pub struct OsmFeature {
    pub osm_id: i64,
    pub geometry: Geometry,
}

/// Build features of the requested kind from a decoded Overpass response.
///
/// Points come from nodes; lines and polygons come from ways whose node
/// refs are resolved against the nodes in the same response. A way with
/// any unresolved ref is skipped with a warning rather than emitted with
/// a hole in its path. Polygon rings are closed by repeating the first
/// coordinate when the way is open.
pub fn assemble(kind: GeometryKind, response: &OverpassResponse) -> Vec<OsmFeature> {
    match kind {
        GeometryKind::Points => assemble_points(response),
        GeometryKind::Lines => assemble_ways(response, false),
        GeometryKind::Polygons => assemble_ways(response, true),
    }
}

fn assemble_points(response: &OverpassResponse) -> Vec<OsmFeature> {
    let mut features = Vec::new();
    for element in &response.elements {
        if let Element::Node(node) = element {
            features.push(OsmFeature {
                osm_id: node.id,
                geometry: Geometry::Point {
                    coordinates: [node.lon, node.lat],
                },
            });
        }
    }
    features
}

fn assemble_ways(response: &OverpassResponse, close_rings: bool) -> Vec<OsmFeature> {
    let mut node_coords: HashMap<i64, [f64; 2]> = HashMap::new();
    for element in &response.elements {
        if let Element::Node(node) = element {
            node_coords.insert(node.id, [node.lon, node.lat]);
        }
    }

    let mut features = Vec::new();
    for element in &response.elements {
        let way = match element {
            Element::Way(way) => way,
            _ => continue,
        };

        let mut coords = Vec::with_capacity(way.nodes.len());
        let mut unresolved = false;
        for node_ref in &way.nodes {
            match node_coords.get(node_ref) {
                Some(c) => coords.push(*c),
                None => {
                    unresolved = true;
                    break;
                }
            }
        }
        if unresolved {
            tracing::warn!(
                "skipping way with unresolved node refs: way_id={}, refs={}",
                way.id,
                way.nodes.len()
            );
            continue;
        }

        if close_rings {
            if coords.len() < 3 {
                tracing::warn!(
                    "skipping way too short for a polygon ring: way_id={}, coords={}",
                    way.id,
                    coords.len()
                );
                continue;
            }
            if coords.first() != coords.last() {
                coords.push(coords[0]);
            }
            features.push(OsmFeature {
                osm_id: way.id,
                geometry: Geometry::Polygon {
                    coordinates: vec![coords],
                },
            });
        } else {
            if coords.len() < 2 {
                tracing::warn!(
                    "skipping way too short for a line: way_id={}, coords={}",
                    way.id,
                    coords.len()
                );
                continue;
            }
            features.push(OsmFeature {
                osm_id: way.id,
                geometry: Geometry::LineString {
                    coordinates: coords,
                },
            });
        }
    }
    features
}
