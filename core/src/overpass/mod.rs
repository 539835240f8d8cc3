mod client;
mod geojson;
mod geometry;
mod model;

pub use client::{OverpassClient, OverpassHttpError, OverpassHttpErrorKind};
pub use geojson::{write_geojson, Feature, FeatureCollection, FeatureProperties};
pub use geometry::{assemble, Geometry, GeometryKind, OsmFeature};
pub use model::{Element, Node, OverpassResponse, Relation, Way};
