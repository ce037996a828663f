//! Country name resolution.
//!
//! A user- or file-supplied name is mapped to a canonical [`CountryKey`] by
//! trying, in order:
//!
//! 1. a case-insensitive exact match against the graph's keys;
//! 2. the fixed alias table (alias names are matched case-sensitively);
//! 3. the `United States` / `US` pair, whichever spelling the graph uses.
//!
//! Resolution never mutates anything and gives the same answer for the same
//! graph every time.
//!
//! [`CountryKey`]: crate::graph::CountryKey

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::graph::BorderGraph;

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Alternate names and the canonical key each one stands for.
///
/// `France -> Saint Martin` is carried over as found in the reference data.
/// It reads inverted (Saint Martin is French, not the other way round) but is
/// kept literal until someone confirms the intent.
const ALIASES: &[(&str, &str)] = &[
    ("Turkiye", "Turkey"),
    ("Holy See", "Vatican City"),
    ("Greenland", "Denmark"),
    ("Keeling", "Cocos (Keeling)"),
    ("Islas Malvinas", "Falkland Islands"),
    ("Kaliningrad", "Russia"),
    ("Ceuta", "Spain"),
    ("France", "Saint Martin"),
];

static ALIAS_TABLE: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ALIASES.iter().copied().collect());

const UNITED_STATES: &str = "United States";
const US: &str = "US";

/// Canonical target of `alias` in the fixed alias table, if any.
pub fn alias_target(alias: &str) -> Option<&'static str> {
    ALIAS_TABLE.get(alias).copied()
}

/// Resolve `input` to a canonical key present in `graph`.
pub fn resolve<'g>(graph: &'g BorderGraph, input: &str) -> Option<&'g str> {
    let name = input.trim();
    if name.is_empty() {
        return None;
    }

    if let Some(key) = graph.lookup_case_insensitive(name) {
        return Some(key);
    }

    if let Some(target) = alias_target(name) {
        if let Some(key) = graph.lookup_case_insensitive(target) {
            return Some(key);
        }
    }

    united_states_counterpart(name).and_then(|other| graph.lookup_case_insensitive(other))
}

/// Whether `input` resolves to a country in `graph`.
pub fn is_valid(graph: &BorderGraph, input: &str) -> bool {
    resolve(graph, input).is_some()
}

/// The dataset spells the United States both ways; map one to the other.
fn united_states_counterpart(name: &str) -> Option<&'static str> {
    if name.eq_ignore_ascii_case(UNITED_STATES) {
        Some(US)
    } else if name.eq_ignore_ascii_case(US) {
        Some(UNITED_STATES)
    } else {
        None
    }
}

/// Suggest up to `limit` known names resembling `input`, best match first.
///
/// Candidates are the graph's keys plus any alias whose target is in the
/// graph.
pub fn suggest(graph: &BorderGraph, input: &str, limit: usize) -> Vec<String> {
    let needle = input.trim().to_lowercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }

    let aliases = ALIASES
        .iter()
        .filter(|(_, target)| graph.contains(target))
        .map(|(alias, _)| *alias);

    let mut scored: Vec<(f64, &str)> = graph
        .countries()
        .chain(aliases)
        .map(|candidate| {
            let score = strsim::jaro_winkler(&needle, &candidate.to_lowercase());
            (score, candidate)
        })
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .collect();

    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    let mut suggestions: Vec<String> = Vec::with_capacity(limit);
    for (_, candidate) in scored {
        if suggestions.iter().any(|s| s == candidate) {
            continue;
        }
        suggestions.push(candidate.to_string());
        if suggestions.len() == limit {
            break;
        }
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::BorderRecord;
    use crate::graph::build_graph;

    fn europe() -> BorderGraph {
        build_graph(&[
            BorderRecord::new("Turkey", &[("Greece", 192), ("Bulgaria", 223)]),
            BorderRecord::new("Spain", &[("Portugal", 1224), ("Andorra", 63)]),
            BorderRecord::new("Saint Martin", &[("Sint Maarten", 16)]),
            BorderRecord::new("US", &[("Canada", 8893)]),
        ])
    }

    #[test]
    fn exact_match_ignores_case() {
        let graph = europe();
        assert_eq!(resolve(&graph, "tURKEY"), Some("Turkey"));
        assert_eq!(resolve(&graph, "  Spain "), Some("Spain"));
    }

    #[test]
    fn alias_keys_are_case_sensitive() {
        let graph = europe();
        assert_eq!(resolve(&graph, "Turkiye"), Some("Turkey"));
        assert_eq!(resolve(&graph, "Ceuta"), Some("Spain"));
        assert_eq!(resolve(&graph, "turkiye"), None);
    }

    #[test]
    fn alias_requires_target_in_graph() {
        let graph = europe();
        assert_eq!(alias_target("Greenland"), Some("Denmark"));
        assert_eq!(resolve(&graph, "Greenland"), None);
    }

    #[test]
    fn france_alias_is_kept_literal() {
        let graph = europe();
        assert_eq!(resolve(&graph, "France"), Some("Saint Martin"));
    }

    #[test]
    fn united_states_resolves_to_us_key() {
        let graph = europe();
        assert_eq!(resolve(&graph, "United States"), Some("US"));
        assert_eq!(resolve(&graph, "united states"), Some("US"));
        assert_eq!(resolve(&graph, "us"), Some("US"));
    }

    #[test]
    fn us_resolves_to_united_states_key() {
        let graph = build_graph(&[BorderRecord::new("United States", &[("Mexico", 3155)])]);
        assert_eq!(resolve(&graph, "US"), Some("United States"));
    }

    #[test]
    fn unknown_and_blank_names_do_not_resolve() {
        let graph = europe();
        assert_eq!(resolve(&graph, "Atlantis"), None);
        assert_eq!(resolve(&graph, "   "), None);
        assert!(!is_valid(&graph, "Atlantis"));
    }

    #[test]
    fn suggestions_rank_close_names_first() {
        let graph = europe();
        let suggestions = suggest(&graph, "Turky", 3);
        assert_eq!(suggestions.first().map(String::as_str), Some("Turkey"));
        assert!(suggestions.len() <= 3);
    }

    #[test]
    fn suggestions_respect_limit() {
        let graph = europe();
        assert!(suggest(&graph, "Turkey", 1).len() <= 1);
        assert!(suggest(&graph, "Turkey", 0).is_empty());
    }
}
