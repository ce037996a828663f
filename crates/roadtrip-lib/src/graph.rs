use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::dataset::BorderRecord;

/// Canonical name of a country as it appears in the border dataset.
pub type CountryKey = String;

/// Edge within the border graph: a shared land border of `length_km`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Border {
    pub target: CountryKey,
    pub length_km: u32,
}

/// Undirected, weighted graph of land borders.
///
/// Adjacency is symmetric: every border recorded against `A` towards `B`
/// has a twin against `B` towards `A` with the same length. The graph is
/// immutable once built and cheap to clone.
#[derive(Debug, Clone, Default)]
pub struct BorderGraph {
    adjacency: Arc<BTreeMap<CountryKey, Vec<Border>>>,
    folded: Arc<HashMap<String, CountryKey>>,
}

impl BorderGraph {
    /// Return the borders for a country, or an empty slice for unknown keys.
    pub fn neighbours(&self, country: &str) -> &[Border] {
        self.adjacency
            .get(country)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `country` is a canonical key of the graph (exact bytes).
    pub fn contains(&self, country: &str) -> bool {
        self.adjacency.contains_key(country)
    }

    /// Length of the border between two countries, if they are adjacent.
    pub fn border_length(&self, from: &str, to: &str) -> Option<u32> {
        self.neighbours(from)
            .iter()
            .find(|border| border.target == to)
            .map(|border| border.length_km)
    }

    /// The graph-owned copy of `country` when it is an exact key.
    pub fn key(&self, country: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(country)
            .map(|(key, _)| key.as_str())
    }

    /// Find the canonical key matching `name` ignoring case.
    pub fn lookup_case_insensitive(&self, name: &str) -> Option<&str> {
        self.key(name)
            .or_else(|| self.folded.get(&fold_case(name)).map(String::as_str))
    }

    /// All canonical keys in lexicographic order.
    pub fn countries(&self) -> impl Iterator<Item = &str> + '_ {
        self.adjacency.keys().map(String::as_str)
    }

    /// Number of countries (including those without any border).
    pub fn len(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Number of undirected borders.
    pub fn border_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }
}

/// Build the border graph from parsed `borders.txt` records.
///
/// Every record's country becomes a key even when it lists no neighbours.
/// Each `(neighbour, length)` pair is inserted in both directions; when the
/// same pair is stated more than once the last length read wins, on both
/// sides.
pub fn build_graph(records: &[BorderRecord]) -> BorderGraph {
    let mut adjacency: BTreeMap<CountryKey, Vec<Border>> = BTreeMap::new();

    for record in records {
        adjacency.entry(record.country.clone()).or_default();
        for (neighbour, length) in &record.neighbours {
            if neighbour == &record.country {
                warn!(country = %record.country, "ignoring border of a country with itself");
                continue;
            }
            upsert_border(&mut adjacency, &record.country, neighbour, *length);
            upsert_border(&mut adjacency, neighbour, &record.country, *length);
        }
    }

    for borders in adjacency.values_mut() {
        borders.sort_by(|a, b| a.target.cmp(&b.target));
    }

    let mut folded = HashMap::with_capacity(adjacency.len());
    for key in adjacency.keys() {
        // Keys are visited in order, so the smallest spelling wins a case clash.
        folded.entry(fold_case(key)).or_insert_with(|| key.clone());
    }

    let graph = BorderGraph {
        adjacency: Arc::new(adjacency),
        folded: Arc::new(folded),
    };
    debug!(
        countries = graph.len(),
        borders = graph.border_count(),
        "built border graph"
    );
    graph
}

fn upsert_border(
    adjacency: &mut BTreeMap<CountryKey, Vec<Border>>,
    from: &str,
    to: &str,
    length_km: u32,
) {
    let borders = adjacency.entry(from.to_string()).or_default();
    if let Some(existing) = borders.iter_mut().find(|border| border.target == to) {
        existing.length_km = length_km;
        return;
    }
    borders.push(Border {
        target: to.to_string(),
        length_km,
    });
}

fn fold_case(name: &str) -> String {
    name.trim().to_lowercase()
}
