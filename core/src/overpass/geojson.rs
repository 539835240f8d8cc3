use std::path::Path;

use serde::Serialize;

use super::geometry::{Geometry, OsmFeature};

/// GeoJSON output document. Feature properties carry the source element
/// id as `osm_id`, nothing else.
#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub ty: &'static str,
    pub properties: FeatureProperties,
    pub geometry: Geometry,
}

#[derive(Debug, Serialize)]
pub struct FeatureProperties {
    pub osm_id: i64,
}

impl FeatureCollection {
    pub fn new(features: Vec<OsmFeature>) -> Self {
        Self {
            ty: "FeatureCollection",
            features: features
                .into_iter()
                .map(|f| Feature {
                    ty: "Feature",
                    properties: FeatureProperties { osm_id: f.osm_id },
                    geometry: f.geometry,
                })
                .collect(),
        }
    }
}

pub fn write_geojson(collection: &FeatureCollection, path: &Path) -> anyhow::Result<()> {
    let body = serde_json::to_string_pretty(collection)?;
    std::fs::write(path, body)?;
    Ok(())
}
