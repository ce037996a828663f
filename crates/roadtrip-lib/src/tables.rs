//! Auxiliary lookup tables loaded alongside the border graph.
//!
//! Neither table participates in pathfinding; they are exposed so callers can
//! annotate results with capital distances or display names.

use std::collections::HashMap;

/// Capital-to-capital distances keyed by an ordered pair of country codes.
#[derive(Debug, Clone, Default)]
pub struct CapitalDistances {
    distances: HashMap<(String, String), u32>,
}

impl CapitalDistances {
    /// Record a distance for the ordered pair `(from, to)`; later inserts win.
    pub fn insert(&mut self, from: String, to: String, km: u32) {
        self.distances.insert((from, to), km);
    }

    /// Distance recorded for exactly `(from, to)`.
    pub fn get(&self, from: &str, to: &str) -> Option<u32> {
        self.distances
            .get(&(from.to_string(), to.to_string()))
            .copied()
    }

    /// Distance for the pair in either order, preferring `(from, to)`.
    pub fn between(&self, from: &str, to: &str) -> Option<u32> {
        self.get(from, to).or_else(|| self.get(to, from))
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}

/// Country code to display name mapping.
#[derive(Debug, Clone, Default)]
pub struct CountryCodes {
    names: HashMap<String, String>,
}

impl CountryCodes {
    /// Record a display name for `code`; later inserts win.
    pub fn insert(&mut self, code: String, name: String) {
        self.names.insert(code, name);
    }

    pub fn name(&self, code: &str) -> Option<&str> {
        self.names.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
