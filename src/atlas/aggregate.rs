//! Month → country → climate summary aggregation

use super::alias::AliasTable;
use super::classify::ClimateClassifier;
use super::normalize::normalize;
use super::tokenize::split_country_field;
use crate::models::{ClimateSummary, ClimateType, MONTHS, TravelRecord};
use chrono::Month;
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Climate summaries keyed by month, then by canonical normalized country key.
///
/// Summaries only grow. Rebuild the map from scratch when the dataset changes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClimateMap {
    months: HashMap<Month, BTreeMap<String, ClimateSummary>>,
}

impl ClimateMap {
    /// Aggregate `records` into a new map
    #[must_use]
    pub fn build(
        records: &[TravelRecord],
        classifier: &ClimateClassifier,
        aliases: &AliasTable,
    ) -> Self {
        let mut map = Self::default();
        map.fold(records, classifier, aliases);
        debug!(
            "Built climate map from {} records: {} (month, country) summaries",
            records.len(),
            map.len()
        );
        map
    }

    /// Fold more records into the map, setting flags but never clearing them
    pub fn fold(
        &mut self,
        records: &[TravelRecord],
        classifier: &ClimateClassifier,
        aliases: &AliasTable,
    ) {
        for record in records {
            let climate = classifier.classify(&record.category_raw);
            if climate == ClimateType::None {
                continue;
            }

            let Some(month) = record.month() else {
                debug!(
                    "Skipping {:?}: month {:?} is not a month name",
                    record.destination, record.month
                );
                continue;
            };

            for token in split_country_field(&record.country) {
                let key = normalize(&token);
                if key.is_empty() {
                    debug!("Skipping country token {:?}: empty key", token);
                    continue;
                }
                let canonical = aliases.resolve_key(&key).to_string();
                self.months
                    .entry(month)
                    .or_default()
                    .entry(canonical)
                    .or_default()
                    .mark(climate);
            }
        }
    }

    /// Summary for a canonical key in a month
    #[must_use]
    pub fn summary(&self, month: Month, key: &str) -> Option<&ClimateSummary> {
        self.months.get(&month).and_then(|countries| countries.get(key))
    }

    /// All summaries of a month, ordered by key
    #[must_use]
    pub fn month(&self, month: Month) -> Option<&BTreeMap<String, ClimateSummary>> {
        self.months.get(&month)
    }

    /// Months holding at least one summary, in calendar order
    #[must_use]
    pub fn months(&self) -> Vec<Month> {
        MONTHS
            .iter()
            .copied()
            .filter(|month| self.months.contains_key(month))
            .collect()
    }

    /// Total number of (month, country) summaries
    #[must_use]
    pub fn len(&self) -> usize {
        self.months.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
