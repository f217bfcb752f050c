//! Dataset loading
//!
//! Reads the travel CSV and the countries GeoJSON into the in-memory models
//! consumed by the atlas. This is the only part of the library touching disk.

pub mod geojson;
pub mod travel_csv;

pub use geojson::{load_feature_collection, parse_feature_collection};
pub use travel_csv::{load_travel_records, parse_travel_records};
