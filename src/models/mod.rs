//! Data models for the TravelAtlas application
//!
//! This module contains the core domain models organized by concern:
//! - Travel: rows of the travel-by-month dataset
//! - Climate: climate types, per-country summaries and display variants
//! - Geo: country features, geometries and label centroids

pub mod climate;
pub mod geo;
pub mod travel;

// Re-export all public types for convenient access
pub use climate::{ClimateSummary, ClimateType, ClimateVariant};
pub use geo::{Centroid, FeatureCollection, GeoFeature, Geometry, Position};
pub use travel::{MONTHS, TravelRecord, parse_month};
