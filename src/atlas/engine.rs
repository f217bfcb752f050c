//! Climate atlas: answers per-month map queries from one travel dataset and
//! one country shapes dataset

use super::aggregate::ClimateMap;
use super::alias::AliasTable;
use super::classify::ClimateClassifier;
use super::geo_match::{GeoFeatureIndex, GeoMatcher};
use super::normalize::normalize;
use super::variant::resolve_variant;
use crate::models::{Centroid, ClimateSummary, ClimateVariant, FeatureCollection, TravelRecord};
use chrono::Month;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// Where to draw one country label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CountryLabel {
    pub display_name: String,
    pub centroid: Centroid,
}

/// One highlighted country of a month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HighlightedCountry {
    /// Normalized feature key
    pub key: String,
    /// Feature name as written in the shapes dataset
    pub display_name: String,
    pub variant: Option<ClimateVariant>,
    pub centroid: Option<Centroid>,
}

/// Everything a map needs to paint one month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthReport {
    pub month: String,
    pub countries: Vec<HighlightedCountry>,
}

#[derive(Debug, Clone)]
pub struct ClimateAtlas {
    classifier: ClimateClassifier,
    aliases: AliasTable,
    climate: ClimateMap,
    features: GeoFeatureIndex,
}

impl Default for ClimateAtlas {
    fn default() -> Self {
        Self::new(ClimateClassifier::default(), AliasTable::builtin())
    }
}

impl ClimateAtlas {
    /// Empty atlas using the given lookup tables
    #[must_use]
    pub fn new(classifier: ClimateClassifier, aliases: AliasTable) -> Self {
        Self {
            classifier,
            aliases,
            climate: ClimateMap::default(),
            features: GeoFeatureIndex::default(),
        }
    }

    /// Replace the climate map with one built from `records`
    #[must_use]
    pub fn with_records(mut self, records: &[TravelRecord]) -> Self {
        self.rebuild(records);
        self
    }

    /// Replace the feature index with one built from `collection`
    #[must_use]
    pub fn with_features(mut self, collection: &FeatureCollection) -> Self {
        self.features = GeoFeatureIndex::from_collection(collection);
        self
    }

    /// Replace the feature index with bare feature names
    #[must_use]
    pub fn with_feature_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.features = GeoFeatureIndex::from_names(names);
        self
    }

    /// Recompute the climate map from scratch
    pub fn rebuild(&mut self, records: &[TravelRecord]) {
        self.climate = ClimateMap::build(records, &self.classifier, &self.aliases);
    }

    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    #[must_use]
    pub fn features(&self) -> &GeoFeatureIndex {
        &self.features
    }

    #[must_use]
    pub fn matcher(&self) -> GeoMatcher<'_> {
        GeoMatcher::new(&self.features, &self.aliases)
    }

    /// Summary for a country name, raw or canonical
    #[must_use]
    pub fn summary(&self, month: Month, country: &str) -> Option<&ClimateSummary> {
        let key = self.aliases.resolve(country);
        if key.is_empty() {
            return None;
        }
        self.climate.summary(month, &key)
    }

    /// Display variant for a (month, country) pair; `None` when the country
    /// has no summary that month
    #[must_use]
    pub fn variant(&self, month: Month, country: &str) -> Option<ClimateVariant> {
        self.summary(month, country).and_then(resolve_variant)
    }

    /// Normalized feature keys highlighted in `month`
    #[must_use]
    pub fn highlighted_countries(&self, month: Month) -> BTreeSet<String> {
        self.matcher().highlighted(&self.climate, month)
    }

    /// Variant used to paint a feature: `None` unless the feature is highlighted
    #[must_use]
    pub fn feature_variant(&self, month: Month, feature_name: &str) -> Option<ClimateVariant> {
        let key = normalize(feature_name);
        if key.is_empty() {
            return None;
        }
        let matcher = self.matcher();
        let highlighted = self.climate.month(month).is_some_and(|countries| {
            countries
                .keys()
                .any(|country| matcher.match_country(country) == Some(key.as_str()))
        });
        if !highlighted {
            return None;
        }
        self.variant(month, feature_name)
    }

    /// Labels for highlighted features that have a centroid, ordered by key
    #[must_use]
    pub fn country_labels(&self, month: Month) -> Vec<CountryLabel> {
        self.highlighted_countries(month)
            .iter()
            .filter_map(|key| self.features.get(key))
            .filter_map(|feature| {
                feature.centroid.map(|centroid| CountryLabel {
                    display_name: feature.display_name.clone(),
                    centroid,
                })
            })
            .collect()
    }

    /// Highlighted countries of `month` with variant and label position
    #[must_use]
    pub fn month_report(&self, month: Month) -> MonthReport {
        let countries: Vec<HighlightedCountry> = self
            .highlighted_countries(month)
            .into_iter()
            .map(|key| {
                let feature = self.features.get(&key);
                HighlightedCountry {
                    display_name: feature
                        .map_or_else(|| key.clone(), |f| f.display_name.clone()),
                    variant: self.variant(month, &key),
                    centroid: feature.and_then(|f| f.centroid),
                    key,
                }
            })
            .collect();
        debug!(
            "{}: {} highlighted countries",
            month.name(),
            countries.len()
        );
        MonthReport {
            month: month.name().to_string(),
            countries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{GeoFeature, Geometry};

    fn polygon(lng: f64, lat: f64) -> Geometry {
        Geometry::Polygon {
            coordinates: vec![vec![
                vec![lng - 1.0, lat - 1.0],
                vec![lng - 1.0, lat + 1.0],
                vec![lng + 1.0, lat + 1.0],
                vec![lng + 1.0, lat - 1.0],
            ]],
        }
    }

    #[test]
    fn test_usa_beach_in_january() {
        let records = vec![TravelRecord::new("January", "Miami", "USA", "beach")];
        let atlas = ClimateAtlas::default()
            .with_records(&records)
            .with_feature_names(["United States of America"]);

        let highlighted = atlas.highlighted_countries(Month::January);
        assert!(highlighted.contains("united states of america"));
        assert_eq!(highlighted.len(), 1);
        assert_eq!(
            atlas.variant(Month::January, "United States of America"),
            Some(ClimateVariant::Summer)
        );
        assert_eq!(
            atlas.feature_variant(Month::January, "United States of America"),
            Some(ClimateVariant::Summer)
        );
        assert!(atlas.highlighted_countries(Month::February).is_empty());
        assert_eq!(atlas.variant(Month::February, "USA"), None);
    }

    #[test]
    fn test_labels_skip_features_without_centroid() {
        let records = vec![
            TravelRecord::new("August", "Lapland", "Finland", "Northern lights"),
            TravelRecord::new("August", "Crete", "Greece", "Beach"),
            TravelRecord::new("August", "Atlantis", "Atlantis", "Beach"),
        ];
        let collection = FeatureCollection {
            features: vec![
                GeoFeature::named("Finland", Some(polygon(26.0, 64.0))),
                GeoFeature::named("Greece", None),
                GeoFeature::named("Portugal", Some(polygon(-8.0, 39.0))),
            ],
        };
        let atlas = ClimateAtlas::default()
            .with_records(&records)
            .with_features(&collection);

        let highlighted: Vec<String> = atlas
            .highlighted_countries(Month::August)
            .into_iter()
            .collect();
        assert_eq!(highlighted, vec!["finland", "greece"]);

        let labels = atlas.country_labels(Month::August);
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].display_name, "Finland");
        assert_eq!(
            labels[0].centroid,
            Centroid {
                latitude: 64.0,
                longitude: 26.0
            }
        );

        assert_eq!(atlas.feature_variant(Month::August, "Portugal"), None);
    }

    #[test]
    fn test_month_report() {
        let records = vec![
            TravelRecord::new("December", "Lapland", "Finland", "Ski"),
            TravelRecord::new("December", "Helsinki", "Finland", "City"),
        ];
        let collection = FeatureCollection {
            features: vec![GeoFeature::named("Finland", Some(polygon(26.0, 64.0)))],
        };
        let atlas = ClimateAtlas::default()
            .with_records(&records)
            .with_features(&collection);

        let report = atlas.month_report(Month::December);
        assert_eq!(report.month, "December");
        assert_eq!(report.countries.len(), 1);
        assert_eq!(report.countries[0].display_name, "Finland");
        assert_eq!(report.countries[0].variant, Some(ClimateVariant::WinterMild));
        assert!(report.countries[0].centroid.is_some());
    }

    #[test]
    fn test_feature_variant_agrees_with_highlighted_set() {
        let records = vec![
            TravelRecord::new("May", "Abidjan", "Ivory Coast", "Beach"),
            TravelRecord::new("May", "Kinshasa", "Congo", "Safari"),
            TravelRecord::new("May", "Oslo", "Norway", "Business"),
        ];
        let names = [
            "Côte d'Ivoire",
            "Democratic Republic of the Congo",
            "Norway",
            "Peru",
        ];
        let atlas = ClimateAtlas::default()
            .with_records(&records)
            .with_feature_names(names);

        let highlighted = atlas.highlighted_countries(Month::May);
        for name in names {
            assert_eq!(
                atlas.feature_variant(Month::May, name).is_some(),
                highlighted.contains(&normalize(name)),
                "{name}"
            );
        }
        assert_eq!(
            atlas.feature_variant(Month::May, "Côte d'Ivoire"),
            Some(ClimateVariant::Summer)
        );
        assert_eq!(atlas.feature_variant(Month::May, ""), None);
    }

    #[test]
    fn test_rebuild_replaces_summaries() {
        let mut atlas = ClimateAtlas::default()
            .with_records(&[TravelRecord::new("March", "Tokyo", "Japan", "City")])
            .with_feature_names(["Japan", "Peru"]);
        assert_eq!(atlas.variant(Month::March, "Japan"), Some(ClimateVariant::Mild));

        atlas.rebuild(&[TravelRecord::new("March", "Cusco", "Peru", "Trekking")]);
        assert_eq!(atlas.variant(Month::March, "Japan"), None);
        assert_eq!(atlas.variant(Month::March, "Peru"), Some(ClimateVariant::Mild));
    }
}
