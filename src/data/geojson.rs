//! Countries GeoJSON loading

use crate::Result;
use crate::models::FeatureCollection;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Load a GeoJSON `FeatureCollection` of countries from disk
pub fn load_feature_collection(path: impl AsRef<Path>) -> Result<FeatureCollection> {
    let path = path.as_ref();
    debug!("Loading country shapes from {}", path.display());
    let text = fs::read_to_string(path)?;
    let collection = parse_feature_collection(&text)?;
    info!(
        "Loaded {} country features from {}",
        collection.features.len(),
        path.display()
    );
    Ok(collection)
}

/// Parse GeoJSON text. Unknown geometry types are kept as `Geometry::Other`.
pub fn parse_feature_collection(text: &str) -> Result<FeatureCollection> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TravelAtlasError;
    use crate::models::Geometry;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "properties": {"name": "Squareland", "iso_a3": "SQL"},
                "geometry": {"type": "Polygon", "coordinates": [[[0,0],[0,2],[2,2],[2,0]]]}
            },
            {
                "type": "Feature",
                "properties": {"name": "Archipelago"},
                "geometry": {
                    "type": "GeometryCollection",
                    "geometries": [
                        {"type": "MultiPolygon", "coordinates": [[[[5,5],[6,6]]]]},
                        {"type": "LineString", "coordinates": [[0,0],[1,1]]}
                    ]
                }
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let collection = parse_feature_collection(SAMPLE).unwrap();
        assert_eq!(collection.features.len(), 2);
        assert_eq!(collection.features[0].name(), "Squareland");
        match &collection.features[1].geometry {
            Some(Geometry::GeometryCollection { geometries }) => {
                assert!(matches!(geometries[0], Geometry::MultiPolygon { .. }));
                assert!(matches!(geometries[1], Geometry::Other));
            }
            other => panic!("unexpected geometry: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_is_data_error() {
        let err = parse_feature_collection("{\"features\": [").unwrap_err();
        assert!(matches!(err, TravelAtlasError::Data { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.geojson");
        fs::write(&path, SAMPLE).unwrap();
        let collection = load_feature_collection(&path).unwrap();
        assert_eq!(collection.names().collect::<Vec<_>>(), vec!["Squareland", "Archipelago"]);
    }
}
