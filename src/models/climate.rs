//! Climate model: per-record climate type, per-country summary and the
//! display variant derived from a summary

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse climate type of a travel record, derived from its category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClimateType {
    Summer,
    Winter,
    Mild,
    /// The label matched no keyword group
    None,
}

impl ClimateType {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateType::Summer => "summer",
            ClimateType::Winter => "winter",
            ClimateType::Mild => "mild",
            ClimateType::None => "none",
        }
    }
}

impl fmt::Display for ClimateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Climate types observed for one (month, country) pair.
///
/// Flags only ever go from `false` to `true`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClimateSummary {
    pub has_summer: bool,
    pub has_winter: bool,
    pub has_mild: bool,
}

impl ClimateSummary {
    /// Set the flag for `climate`. `ClimateType::None` leaves the summary untouched.
    pub fn mark(&mut self, climate: ClimateType) {
        match climate {
            ClimateType::Summer => self.has_summer = true,
            ClimateType::Winter => self.has_winter = true,
            ClimateType::Mild => self.has_mild = true,
            ClimateType::None => {}
        }
    }

    /// Number of flags set (0 to 3)
    #[must_use]
    pub fn flag_count(&self) -> usize {
        [self.has_summer, self.has_winter, self.has_mild]
            .into_iter()
            .filter(|flag| *flag)
            .count()
    }

    /// True when every flag set in `other` is also set here
    #[must_use]
    pub fn covers(&self, other: &ClimateSummary) -> bool {
        (self.has_summer || !other.has_summer)
            && (self.has_winter || !other.has_winter)
            && (self.has_mild || !other.has_mild)
    }
}

/// Display variant of a climate summary. An empty summary has no variant,
/// represented as `Option::None` by the resolver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ClimateVariant {
    Summer,
    Winter,
    Mild,
    SummerWinter,
    SummerMild,
    WinterMild,
    Mixed,
}

impl ClimateVariant {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ClimateVariant::Summer => "summer",
            ClimateVariant::Winter => "winter",
            ClimateVariant::Mild => "mild",
            ClimateVariant::SummerWinter => "summer-winter",
            ClimateVariant::SummerMild => "summer-mild",
            ClimateVariant::WinterMild => "winter-mild",
            ClimateVariant::Mixed => "mixed",
        }
    }
}

impl fmt::Display for ClimateVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
