//! Alias resolution: informal or historical country names mapped to the
//! names used by the country shapes dataset

use super::normalize::normalize;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Built-in (informal name, canonical name) pairs
const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("usa", "United States of America"),
    ("u s a", "United States of America"),
    ("united states", "United States of America"),
    ("united states of america", "United States of America"),
    ("uk", "United Kingdom"),
    ("great britain", "United Kingdom"),
    ("britain", "United Kingdom"),
    ("czech republic", "Czechia"),
    ("south korea", "Republic of Korea"),
    ("north korea", "Democratic People's Republic of Korea"),
    ("tanzania", "United Republic of Tanzania"),
    ("iran", "Iran (Islamic Republic of)"),
    ("syria", "Syrian Arab Republic"),
    ("russia", "Russian Federation"),
    ("moldova", "Republic of Moldova"),
    ("bolivia", "Bolivia (Plurinational State of)"),
    ("venezuela", "Venezuela (Bolivarian Republic of)"),
    ("laos", "Lao People's Democratic Republic"),
    ("micronesia", "Micronesia (Federated States of)"),
    ("congo", "Democratic Republic of the Congo"),
    ("republic of congo", "Republic of the Congo"),
    ("cape verde", "Cabo Verde"),
    ("eswatini", "Eswatini"),
    ("swaziland", "Eswatini"),
    ("uae", "United Arab Emirates"),
    ("united arab emirates", "United Arab Emirates"),
    ("myanmar", "Myanmar"),
    ("burma", "Myanmar"),
    ("ivory coast", "Côte d'Ivoire"),
    ("cote divoire", "Côte d'Ivoire"),
    ("north macedonia", "North Macedonia"),
    ("bosnia", "Bosnia and Herzegovina"),
    ("bahamas", "Bahamas"),
    ("democratic republic of congo", "Democratic Republic of the Congo"),
];

/// Normalized alias key → normalized canonical key.
///
/// Built once and shared by reference. Every target is final: resolving a
/// resolved key returns it unchanged.
#[derive(Debug, Clone)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl AliasTable {
    /// Table holding only the built-in aliases
    #[must_use]
    pub fn builtin() -> Self {
        Self::with_extra(std::iter::empty::<(&str, &str)>())
    }

    /// Built-in aliases plus `extra` pairs. Extra pairs override built-ins
    /// with the same key; pairs with an empty side are ignored.
    #[must_use]
    pub fn with_extra<I, K, V>(extra: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut entries = HashMap::new();
        let pairs = BUILTIN_ALIASES
            .iter()
            .map(|(from, to)| (normalize(from), normalize(to)))
            .chain(
                extra
                    .into_iter()
                    .map(|(from, to)| (normalize(from.as_ref()), normalize(to.as_ref()))),
            );
        for (from, to) in pairs {
            if from.is_empty() || to.is_empty() {
                debug!("Ignoring alias with an empty side: {:?} -> {:?}", from, to);
                continue;
            }
            entries.insert(from, to);
        }

        let mut table = Self { entries };
        table.flatten();
        table
    }

    /// Rewrite every target to the end of its alias chain so lookups are a
    /// single hop. A cycle collapses onto its smallest key.
    fn flatten(&mut self) {
        let finals: Vec<(String, String)> = self
            .entries
            .keys()
            .map(|key| (key.clone(), self.chain_end(key)))
            .collect();
        for (key, target) in finals {
            self.entries.insert(key, target);
        }
    }

    fn chain_end(&self, start: &str) -> String {
        let mut path: Vec<&str> = vec![start];
        let mut current = start;
        while let Some(next) = self.entries.get(current) {
            if next == current {
                return current.to_string();
            }
            if let Some(pos) = path.iter().position(|seen| *seen == next.as_str()) {
                let cycle: BTreeSet<&str> = path[pos..].iter().copied().collect();
                return cycle
                    .first()
                    .map_or_else(|| next.clone(), |smallest| (*smallest).to_string());
            }
            path.push(next.as_str());
            current = next.as_str();
        }
        current.to_string()
    }

    /// Resolve a name to its canonical normalized key. Names without an
    /// alias come back normalized but otherwise unchanged.
    #[must_use]
    pub fn resolve(&self, name: &str) -> String {
        let key = normalize(name);
        self.resolve_key(&key).to_string()
    }

    /// Resolve an already normalized key
    #[must_use]
    pub fn resolve_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.entries.get(key).map_or(key, String::as_str)
    }

    /// The canonical key for `key`, only if `key` is an alias
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("USA", "united states of america")]
    #[case("U.S.A.", "united states of america")]
    #[case("  uk ", "united kingdom")]
    #[case("Congo", "democratic republic of the congo")]
    #[case("Republic of Congo", "republic of the congo")]
    #[case("Ivory Coast", "cote divoire")]
    #[case("Iran", "iran")]
    #[case("Burma", "myanmar")]
    #[case("France", "france")]
    #[case("", "")]
    fn test_resolve(#[case] input: &str, #[case] expected: &str) {
        let table = AliasTable::builtin();
        assert_eq!(table.resolve(input), expected);
    }

    #[test]
    fn test_every_builtin_entry_is_one_hop() {
        let table = AliasTable::builtin();
        assert!(!table.is_empty());
        for (alias, target) in table.iter() {
            let once = table.resolve(alias);
            assert_eq!(once, target);
            assert_eq!(table.resolve(&once), once, "chain longer than one hop at {alias}");
        }
    }

    #[test]
    fn test_extra_aliases_override_and_flatten() {
        let table = AliasTable::with_extra([
            ("Holland", "Netherlands"),
            ("Netherlands", "Kingdom of the Netherlands"),
            ("Congo", "Republic of the Congo"),
            ("", "Nowhere"),
        ]);
        assert_eq!(table.resolve("Holland"), "kingdom of the netherlands");
        assert_eq!(table.resolve("Congo"), "republic of the congo");
        assert_eq!(table.get(""), None);
        for (alias, _) in table.iter() {
            let once = table.resolve(alias);
            assert_eq!(table.resolve(&once), once);
        }
    }

    #[test]
    fn test_alias_cycle_collapses() {
        let table = AliasTable::with_extra([("Alpha", "Beta"), ("Beta", "Alpha")]);
        assert_eq!(table.resolve("Alpha"), "alpha");
        assert_eq!(table.resolve("Beta"), "alpha");
    }
}
