//! Matching travel country names against the country shapes dataset
//!
//! Matching scans every feature name, O(features) per query. The shapes
//! dataset holds a couple of hundred countries; if it grows, match through
//! a hash map from normalized name instead.

use super::aggregate::ClimateMap;
use super::alias::AliasTable;
use super::normalize::normalize;
use crate::models::{Centroid, FeatureCollection, Geometry};
use chrono::Month;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Unweighted mean of every ring vertex of `geometry`.
///
/// Not an area-weighted centroid, only good enough to place a label.
/// Returns `None` when the geometry has no vertices.
#[must_use]
pub fn centroid(geometry: &Geometry) -> Option<Centroid> {
    let mut vertices = Vec::new();
    geometry.collect_vertices(&mut vertices);
    if vertices.is_empty() {
        return None;
    }

    let count = vertices.len() as f64;
    let (lat_sum, lng_sum) = vertices
        .iter()
        .fold((0.0, 0.0), |(lat_sum, lng_sum), (lat, lng)| {
            (lat_sum + lat, lng_sum + lng)
        });
    Some(Centroid {
        latitude: lat_sum / count,
        longitude: lng_sum / count,
    })
}

/// Display data of one indexed feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexedFeature {
    pub display_name: String,
    pub centroid: Option<Centroid>,
}

/// Feature names of one loaded shapes dataset, indexed by normalized name
#[derive(Debug, Clone, Default)]
pub struct GeoFeatureIndex {
    /// (raw name, normalized name) in dataset order
    names: Vec<(String, String)>,
    by_key: BTreeMap<String, IndexedFeature>,
}

impl GeoFeatureIndex {
    /// Index a feature collection. Features whose name normalizes to the
    /// empty key are left out.
    #[must_use]
    pub fn from_collection(collection: &FeatureCollection) -> Self {
        let mut index = Self::default();
        for feature in &collection.features {
            let centroid = feature.geometry.as_ref().and_then(centroid);
            index.insert(feature.name(), centroid);
        }
        debug!(
            "Indexed {} of {} features",
            index.len(),
            collection.features.len()
        );
        index
    }

    /// Index bare feature names, without geometry
    #[must_use]
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = Self::default();
        for name in names {
            index.insert(name.as_ref(), None);
        }
        index
    }

    fn insert(&mut self, name: &str, centroid: Option<Centroid>) {
        let key = normalize(name);
        if key.is_empty() {
            return;
        }
        self.names.push((name.to_string(), key.clone()));

        // A duplicate name only replaces the entry when it brings a centroid
        if centroid.is_some() || !self.by_key.contains_key(&key) {
            self.by_key.insert(
                key,
                IndexedFeature {
                    display_name: name.to_string(),
                    centroid,
                },
            );
        }
    }

    /// Entry for a normalized feature key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&IndexedFeature> {
        self.by_key.get(key)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.by_key.contains_key(key)
    }

    /// Number of distinct normalized feature names
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }

    fn exact(&self, query: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|(name, _)| name == query)
            .map(|(_, key)| key.as_str())
    }

    fn normalized(&self, key: &str) -> Option<&str> {
        self.names
            .iter()
            .find(|(_, normalized)| normalized == key)
            .map(|(_, normalized)| normalized.as_str())
    }
}

/// Resolves country names to feature keys through one index and one alias table
#[derive(Debug, Clone, Copy)]
pub struct GeoMatcher<'a> {
    index: &'a GeoFeatureIndex,
    aliases: &'a AliasTable,
}

impl<'a> GeoMatcher<'a> {
    #[must_use]
    pub fn new(index: &'a GeoFeatureIndex, aliases: &'a AliasTable) -> Self {
        Self { index, aliases }
    }

    /// Normalized key of the feature matching `query`.
    ///
    /// Tries the raw name, then the normalized name, then the alias target.
    /// `None` means unmatched, which is not an error.
    #[must_use]
    pub fn match_country(&self, query: &str) -> Option<&'a str> {
        let index: &'a GeoFeatureIndex = self.index;
        if let Some(key) = index.exact(query) {
            return Some(key);
        }

        let key = normalize(query);
        if key.is_empty() {
            return None;
        }
        if let Some(found) = index.normalized(&key) {
            return Some(found);
        }

        let found = self
            .aliases
            .get(&key)
            .and_then(|canonical| index.normalized(canonical));
        if found.is_none() {
            debug!("No feature matches country {:?}", query);
        }
        found
    }

    /// Feature keys reachable from any country of `month` in `climate`
    #[must_use]
    pub fn highlighted(&self, climate: &ClimateMap, month: Month) -> BTreeSet<String> {
        climate
            .month(month)
            .into_iter()
            .flat_map(BTreeMap::keys)
            .filter_map(|country| self.match_country(country))
            .map(str::to_string)
            .collect()
    }
}
