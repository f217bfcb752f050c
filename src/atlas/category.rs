//! Trip categories and per-month destination lists

use crate::models::TravelRecord;
use chrono::Month;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Trip category of a travel record, derived from its category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKey {
    Beach,
    Ski,
    City,
    Trekking,
    Safari,
    Festival,
    Polar,
    Other,
}

impl CategoryKey {
    /// Every category, in matching order
    pub const ALL: [CategoryKey; 8] = [
        CategoryKey::Beach,
        CategoryKey::Ski,
        CategoryKey::City,
        CategoryKey::Trekking,
        CategoryKey::Safari,
        CategoryKey::Festival,
        CategoryKey::Polar,
        CategoryKey::Other,
    ];

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            CategoryKey::Beach => "Beach",
            CategoryKey::Ski => "Ski",
            CategoryKey::City => "City",
            CategoryKey::Trekking => "Trekking",
            CategoryKey::Safari => "Safari",
            CategoryKey::Festival => "Festival",
            CategoryKey::Polar => "Polar",
            CategoryKey::Other => "Other",
        }
    }

    #[must_use]
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            CategoryKey::Beach => &[
                "beach",
                "warm escape",
                "island",
                "water",
                "coast",
                "maldives",
                "caribbean",
                "seychelles",
            ],
            CategoryKey::Ski => &["ski", "winter sports", "snow", "alps", "winter"],
            CategoryKey::City => &["city", "culture", "historical", "urban", "romance"],
            CategoryKey::Trekking => &[
                "trekking",
                "mountains",
                "hiking",
                "trail",
                "himalaya",
                "patagonia",
                "peru",
                "nepal",
            ],
            CategoryKey::Safari => &[
                "safari", "wildlife", "nature", "animals", "kenya", "tanzania", "africa",
            ],
            CategoryKey::Festival => &[
                "festival",
                "carnival",
                "party",
                "celebration",
                "oktoberfest",
                "holi",
            ],
            CategoryKey::Polar => &[
                "polar",
                "arctic",
                "antarctica",
                "northern lights",
                "expedition",
                "ice",
            ],
            CategoryKey::Other => &[],
        }
    }

    /// First category with a keyword contained in the label, else `Other`
    #[must_use]
    pub fn classify(category_raw: &str) -> CategoryKey {
        let label = category_raw.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.keywords().iter().any(|keyword| label.contains(keyword)))
            .unwrap_or(CategoryKey::Other)
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for CategoryKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|key| key.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("unknown category '{wanted}'"))
    }
}

/// Records of `month` whose category is selected, in dataset order
#[must_use]
pub fn destinations<'a>(
    records: &'a [TravelRecord],
    month: Month,
    categories: &HashSet<CategoryKey>,
) -> Vec<&'a TravelRecord> {
    records
        .iter()
        .filter(|record| record.month() == Some(month))
        .filter(|record| categories.contains(&CategoryKey::classify(&record.category_raw)))
        .collect()
}

/// The entry before `current` in `list`, if any
#[must_use]
pub fn previous_destination<'a>(
    list: &[&'a TravelRecord],
    current: &TravelRecord,
) -> Option<&'a TravelRecord> {
    let position = list.iter().position(|record| record.same_entry(current))?;
    position.checked_sub(1).map(|index| list[index])
}

/// The entry after `current` in `list`, if any
#[must_use]
pub fn next_destination<'a>(
    list: &[&'a TravelRecord],
    current: &TravelRecord,
) -> Option<&'a TravelRecord> {
    let position = list.iter().position(|record| record.same_entry(current))?;
    list.get(position + 1).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Beach & islands", CategoryKey::Beach)]
    #[case("Winter sports", CategoryKey::Ski)]
    #[case("Historical city", CategoryKey::City)]
    #[case("Nepal trekking", CategoryKey::Trekking)]
    #[case("Kenya safari", CategoryKey::Safari)]
    #[case("Carnival", CategoryKey::Festival)]
    #[case("Antarctica cruise", CategoryKey::Polar)]
    #[case("Business conference", CategoryKey::Other)]
    #[case("Island hopping in the arctic", CategoryKey::Beach)]
    fn test_classify_category(#[case] label: &str, #[case] expected: CategoryKey) {
        assert_eq!(CategoryKey::classify(label), expected);
    }

    #[test]
    fn test_from_str_round_trips_display() {
        for key in CategoryKey::ALL {
            assert_eq!(key.to_string().parse::<CategoryKey>(), Ok(key));
        }
        assert!("volcano".parse::<CategoryKey>().is_err());
    }

    #[test]
    fn test_destinations_filter_and_navigation() {
        let records = vec![
            TravelRecord::new("June", "Santorini", "Greece", "Beach"),
            TravelRecord::new("June", "Kyoto", "Japan", "Culture"),
            TravelRecord::new("July", "Zanzibar", "Tanzania", "Beach"),
            TravelRecord::new("June", "Maldives", "Maldives", "Warm escape"),
        ];
        let selected: HashSet<CategoryKey> = [CategoryKey::Beach].into_iter().collect();
        let list = destinations(&records, Month::June, &selected);

        let names: Vec<&str> = list.iter().map(|r| r.destination.as_str()).collect();
        assert_eq!(names, vec!["Santorini", "Maldives"]);

        assert_eq!(next_destination(&list, &records[0]), Some(&records[3]));
        assert_eq!(previous_destination(&list, &records[3]), Some(&records[0]));
        assert_eq!(previous_destination(&list, &records[0]), None);
        assert_eq!(next_destination(&list, &records[3]), None);
        assert_eq!(next_destination(&list, &records[1]), None);
    }
}
