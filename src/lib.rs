//! `TravelAtlas` - month-by-month travel climate atlas
//!
//! This library reconciles the informal country names of a travel dataset
//! with the canonical names of a country shapes dataset, classifies trips
//! into coarse climate types, and answers per-month map queries: which
//! countries to highlight, in which climate variant, and where to put labels.

pub mod atlas;
pub mod config;
pub mod data;
pub mod error;
pub mod logging;
pub mod models;

// Re-export core types for public API
pub use atlas::{
    AliasTable, CategoryKey, ClimateAtlas, ClimateClassifier, ClimateMap, CountryLabel,
    GeoFeatureIndex, GeoMatcher, MonthReport,
};
pub use config::TravelAtlasConfig;
pub use error::TravelAtlasError;
pub use models::{
    Centroid, ClimateSummary, ClimateType, ClimateVariant, FeatureCollection, TravelRecord,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelAtlasError>;
