use std::collections::HashMap;

use serde::Deserialize;

/// Decoded body of an Overpass API response (`[out:json]` output format).
///
/// Unknown top-level fields (generator, osm3s, ...) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct OverpassResponse {
    #[serde(default)]
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Node(Node),
    Way(Way),
    Relation(Relation),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Node {
    pub id: i64,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Way {
    pub id: i64,
    /// Node refs in path order. Refs may point at nodes missing from the
    /// response when the query did not recurse down (`>`).
    #[serde(default)]
    pub nodes: Vec<i64>,
    #[serde(default)]
    pub tags: HashMap<String, String>,
}

/// Relations are decoded so a mixed response does not fail, but geometry
/// assembly does not use them.
#[derive(Debug, Clone, Deserialize)]
pub struct Relation {
    pub id: i64,
}
