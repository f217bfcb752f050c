//! Mapping of a climate summary to its display variant

use crate::models::{ClimateSummary, ClimateVariant};

/// Resolve the display variant of a summary.
///
/// No flags gives `None` (no override); otherwise the variant names exactly
/// the flags that are set.
#[must_use]
pub fn resolve_variant(summary: &ClimateSummary) -> Option<ClimateVariant> {
    match (summary.has_summer, summary.has_winter, summary.has_mild) {
        (false, false, false) => None,
        (true, false, false) => Some(ClimateVariant::Summer),
        (false, true, false) => Some(ClimateVariant::Winter),
        (false, false, true) => Some(ClimateVariant::Mild),
        (true, true, false) => Some(ClimateVariant::SummerWinter),
        (true, false, true) => Some(ClimateVariant::SummerMild),
        (false, true, true) => Some(ClimateVariant::WinterMild),
        (true, true, true) => Some(ClimateVariant::Mixed),
    }
}
