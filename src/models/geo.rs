//! Geographic feature model: an already-parsed GeoJSON feature collection
//! of country polygons

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A GeoJSON position: `[longitude, latitude]`, optionally followed by altitude
pub type Position = Vec<f64>;

/// Point used for label placement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Centroid {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<GeoFeature>,
}

impl FeatureCollection {
    /// Names of all features, in collection order. Unnamed features yield "".
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.features.iter().map(GeoFeature::name)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeoFeature {
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
    #[serde(default)]
    pub geometry: Option<Geometry>,
}

impl GeoFeature {
    /// Build a named feature, mainly for fixtures
    #[must_use]
    pub fn named(name: &str, geometry: Option<Geometry>) -> Self {
        let mut properties = Map::new();
        properties.insert("name".to_string(), Value::String(name.to_string()));
        Self {
            properties: Some(properties),
            geometry,
        }
    }

    /// The `name` property, or "" when it is missing or not a string
    #[must_use]
    pub fn name(&self) -> &str {
        self.properties
            .as_ref()
            .and_then(|props| props.get("name"))
            .and_then(Value::as_str)
            .unwrap_or_default()
    }
}

/// Geometry kinds relevant to country shapes. Any other GeoJSON geometry
/// type parses as `Other` and has no vertices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<Geometry>,
    },
    #[serde(other)]
    Other,
}

impl Geometry {
    /// Append every ring vertex as `(latitude, longitude)`, recursing into
    /// nested collections. Positions with fewer than two ordinates are skipped.
    pub fn collect_vertices(&self, out: &mut Vec<(f64, f64)>) {
        match self {
            Geometry::Polygon { coordinates } => push_rings(coordinates, out),
            Geometry::MultiPolygon { coordinates } => {
                for polygon in coordinates {
                    push_rings(polygon, out);
                }
            }
            Geometry::GeometryCollection { geometries } => {
                for geometry in geometries {
                    geometry.collect_vertices(out);
                }
            }
            Geometry::Other => {}
        }
    }
}

fn push_rings(rings: &[Vec<Position>], out: &mut Vec<(f64, f64)>) {
    for ring in rings {
        out.extend(ring.iter().filter_map(|position| match position.as_slice() {
            [lng, lat, ..] => Some((*lat, *lng)),
            _ => None,
        }));
    }
}
