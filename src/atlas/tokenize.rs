//! Splitting of composite country fields ("Chile / Argentina")

use super::normalize::PARENTHETICAL;

/// Characters that separate countries inside one field.
///
/// The hyphen is included, so hyphenated names such as "Bosnia-Herzegovina"
/// come out as two tokens. Kept as-is until the dataset owners decide how
/// compound names should be written.
const DELIMITERS: [char; 6] = [',', '/', ';', '&', '–', '-'];

/// Split a raw country field into country tokens, in field order.
///
/// Parenthetical annotations are removed from each token, tokens are
/// trimmed, and empty tokens are dropped.
#[must_use]
pub fn split_country_field(value: &str) -> Vec<String> {
    value
        .split(DELIMITERS)
        .map(|part| PARENTHETICAL.replace_all(part, " ").trim().to_string())
        .filter(|part| !part.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Chile / Argentina", vec!["Chile", "Argentina"])]
    #[case("France", vec!["France"])]
    #[case("Kenya, Tanzania; Uganda", vec!["Kenya", "Tanzania", "Uganda"])]
    #[case("Spain & Portugal", vec!["Spain", "Portugal"])]
    #[case("Norway – Sweden", vec!["Norway", "Sweden"])]
    #[case("Bosnia-Herzegovina", vec!["Bosnia", "Herzegovina"])]
    #[case("Congo (DRC)", vec!["Congo"])]
    #[case("Italy (Sicily), Malta", vec!["Italy", "Malta"])]
    #[case(" , ;/ ", vec![])]
    #[case("", vec![])]
    fn test_split_country_field(#[case] input: &str, #[case] expected: Vec<&str>) {
        assert_eq!(split_country_field(input), expected);
    }

    #[test]
    fn test_parenthetical_with_delimiter_is_split_first() {
        // Delimiters inside parentheses still split; the halves keep their brackets
        assert_eq!(
            split_country_field("USA (Hawaii, Alaska)"),
            vec!["USA (Hawaii", "Alaska)"]
        );
    }
}
