//! Travel record model: one recommended destination for one month

use chrono::Month;
use serde::{Deserialize, Serialize};

/// Calendar order used whenever months are listed
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// A single row of the travel-by-month dataset.
///
/// Field names follow the CSV header. Missing columns deserialize to empty
/// strings, so a record is never rejected for being incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TravelRecord {
    /// English month name, e.g. "January"
    #[serde(default)]
    pub month: String,
    /// Destination (city, region, park...)
    #[serde(default)]
    pub destination: String,
    /// Free-text country field, possibly composite ("Chile / Argentina")
    #[serde(default)]
    pub country: String,
    /// Free-text category label ("Beach & islands", "Ski")
    #[serde(default)]
    pub category_raw: String,
    /// Reason text shown next to the destination
    #[serde(default)]
    pub reason_he: String,
}

impl TravelRecord {
    /// Create a record without reason text
    #[must_use]
    pub fn new(
        month: impl Into<String>,
        destination: impl Into<String>,
        country: impl Into<String>,
        category_raw: impl Into<String>,
    ) -> Self {
        Self {
            month: month.into(),
            destination: destination.into(),
            country: country.into(),
            category_raw: category_raw.into(),
            reason_he: String::new(),
        }
    }

    /// Attach the reason text
    #[must_use]
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason_he = reason.into();
        self
    }

    /// The record's month, if the month field is a canonical month name
    #[must_use]
    pub fn month(&self) -> Option<Month> {
        parse_month(&self.month)
    }

    /// Whether two records denote the same destination entry
    #[must_use]
    pub fn same_entry(&self, other: &TravelRecord) -> bool {
        self.month == other.month
            && self.destination == other.destination
            && self.country == other.country
    }
}

/// Parse one of the twelve English month names, ignoring case and
/// surrounding whitespace. Abbreviations are not accepted.
#[must_use]
pub fn parse_month(value: &str) -> Option<Month> {
    let value = value.trim();
    MONTHS
        .iter()
        .copied()
        .find(|month| month.name().eq_ignore_ascii_case(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("January", Some(Month::January))]
    #[case("  december ", Some(Month::December))]
    #[case("MAY", Some(Month::May))]
    #[case("Jan", None)]
    #[case("", None)]
    #[case("Smarch", None)]
    fn test_parse_month(#[case] input: &str, #[case] expected: Option<Month>) {
        assert_eq!(parse_month(input), expected);
    }

    #[test]
    fn test_same_entry_ignores_category() {
        let a = TravelRecord::new("March", "Tokyo", "Japan", "City");
        let b = TravelRecord::new("March", "Tokyo", "Japan", "Festival").with_reason("Sakura");
        assert!(a.same_entry(&b));

        let c = TravelRecord::new("April", "Tokyo", "Japan", "City");
        assert!(!a.same_entry(&c));
    }
}
