//! Keyword-based climate classification of category labels
//!
//! This is a heuristic: labels are matched by plain substring containment,
//! so a label such as "Wine & price tours" hits the winter keyword `ice`.
//! It approximates what a trip feels like, it is not a climate model.

use crate::models::ClimateType;

/// Keyword group checked first to last; the first group with a keyword
/// contained in the label decides the climate type.
#[derive(Debug, Clone)]
pub struct KeywordGroup {
    pub climate: ClimateType,
    pub keywords: Vec<String>,
}

impl KeywordGroup {
    #[must_use]
    pub fn new(climate: ClimateType, keywords: &[&str]) -> Self {
        Self {
            climate,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    fn matches(&self, label: &str) -> bool {
        self.keywords.iter().any(|keyword| label.contains(keyword.as_str()))
    }
}

/// Ordered climate keyword groups. Winter beats summer beats mild.
#[derive(Debug, Clone)]
pub struct ClimateClassifier {
    groups: Vec<KeywordGroup>,
}

impl Default for ClimateClassifier {
    fn default() -> Self {
        Self::new(vec![
            KeywordGroup::new(
                ClimateType::Winter,
                &["ski", "snow", "northern lights", "aurora", "ice", "winter", "polar"],
            ),
            KeywordGroup::new(
                ClimateType::Summer,
                &["beach", "warm", "islands", "coast", "sea", "surf", "water"],
            ),
            KeywordGroup::new(
                ClimateType::Mild,
                &[
                    "city", "urban", "culture", "trek", "hiking", "mountain", "safari",
                    "wildlife", "festival",
                ],
            ),
        ])
    }
}

impl ClimateClassifier {
    #[must_use]
    pub fn new(groups: Vec<KeywordGroup>) -> Self {
        Self { groups }
    }

    /// Groups in evaluation order
    #[must_use]
    pub fn groups(&self) -> &[KeywordGroup] {
        &self.groups
    }

    /// Climate type of a category label; `ClimateType::None` when no group matches
    #[must_use]
    pub fn classify(&self, category_raw: &str) -> ClimateType {
        let label = category_raw.to_lowercase();
        self.groups
            .iter()
            .find(|group| group.matches(&label))
            .map_or(ClimateType::None, |group| group.climate)
    }
}
