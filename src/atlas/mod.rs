//! Climate atlas module
//!
//! The pure core of TravelAtlas. Nothing here performs I/O or fails:
//! - Country name normalization, splitting and alias resolution
//! - Keyword climate classification and trip categories
//! - Month → country climate aggregation and display variants
//! - Matching countries against the shapes dataset, label centroids

pub mod aggregate;
pub mod alias;
pub mod category;
pub mod classify;
pub mod engine;
pub mod geo_match;
pub mod normalize;
pub mod tokenize;
pub mod variant;

// Re-export commonly used types from submodules
pub use aggregate::ClimateMap;
pub use alias::AliasTable;
pub use category::{CategoryKey, destinations, next_destination, previous_destination};
pub use classify::{ClimateClassifier, KeywordGroup};
pub use engine::{ClimateAtlas, CountryLabel, HighlightedCountry, MonthReport};
pub use geo_match::{GeoFeatureIndex, GeoMatcher, IndexedFeature, centroid};
pub use normalize::normalize;
pub use tokenize::split_country_field;
pub use variant::resolve_variant;
