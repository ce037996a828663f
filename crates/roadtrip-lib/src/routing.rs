use serde::Serialize;
use tracing::debug;

use crate::dataset::{load_dataset, Dataset, DatasetPaths};
use crate::error::{Error, Result};
use crate::graph::{build_graph, BorderGraph, CountryKey};
use crate::names;
use crate::path::{self, PathResult};
use crate::tables::{CapitalDistances, CountryCodes};

/// Number of "did you mean" suggestions attached to unknown-name errors.
const MAX_SUGGESTIONS: usize = 3;

/// Distance reported by [`RoadTrip::total_distance`] when no answer exists.
pub const NO_DISTANCE: i64 = -1;

/// Planned route between two resolved countries.
#[derive(Debug, Clone, Serialize)]
pub struct RoutePlan {
    pub start: CountryKey,
    pub goal: CountryKey,
    pub path: PathResult,
}

impl RoutePlan {
    /// Number of borders crossed.
    pub fn hop_count(&self) -> usize {
        self.path.hop_count()
    }

    pub fn total_km(&self) -> u64 {
        self.path.total_km
    }
}

/// Query entry point holding the immutable reference tables.
///
/// Everything is built once in the constructor and only read afterwards, so
/// a `RoadTrip` can be shared by reference between any number of queries.
#[derive(Debug, Clone, Default)]
pub struct RoadTrip {
    graph: BorderGraph,
    capitals: CapitalDistances,
    country_codes: CountryCodes,
}

impl RoadTrip {
    /// Build the border graph and lookup tables from ingested records.
    pub fn new(dataset: Dataset) -> Self {
        let graph = build_graph(&dataset.borders);
        Self {
            graph,
            capitals: dataset.capitals,
            country_codes: dataset.country_codes,
        }
    }

    /// Load the three dataset files and build the query tables.
    pub fn from_paths(paths: &DatasetPaths) -> Result<Self> {
        let dataset = load_dataset(paths)?;
        Ok(Self::new(dataset))
    }

    pub fn graph(&self) -> &BorderGraph {
        &self.graph
    }

    pub fn capital_distances(&self) -> &CapitalDistances {
        &self.capitals
    }

    pub fn country_codes(&self) -> &CountryCodes {
        &self.country_codes
    }

    /// Resolve a country name (or alias) to its canonical key.
    pub fn resolve(&self, name: &str) -> Option<CountryKey> {
        names::resolve(&self.graph, name).map(str::to_string)
    }

    /// Whether `name` refers to a country in the border graph.
    pub fn is_valid(&self, name: &str) -> bool {
        names::is_valid(&self.graph, name)
    }

    /// Resolve a name or fail with suggestions for similar known names.
    pub fn resolve_or_suggest(&self, name: &str) -> Result<CountryKey> {
        self.resolve(name).ok_or_else(|| Error::UnknownCountry {
            name: name.to_string(),
            suggestions: names::suggest(&self.graph, name, MAX_SUGGESTIONS),
        })
    }

    /// Shortest route between two names; empty when either name is unknown,
    /// the two resolve to the same country, or no route exists.
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<PathResult> {
        match (self.resolve(from), self.resolve(to)) {
            (Some(start), Some(goal)) => path::shortest_path(&self.graph, &start, &goal),
            _ => Ok(PathResult::default()),
        }
    }

    /// Total border length along the shortest route, `0` for the same
    /// country, or [`NO_DISTANCE`] when a name is unknown or no route exists.
    pub fn total_distance(&self, from: &str, to: &str) -> Result<i64> {
        let (Some(start), Some(goal)) = (self.resolve(from), self.resolve(to)) else {
            return Ok(NO_DISTANCE);
        };
        if start == goal {
            return Ok(0);
        }

        let path = path::shortest_path(&self.graph, &start, &goal)?;
        if path.is_empty() {
            return Ok(NO_DISTANCE);
        }
        Ok(i64::try_from(path.total_km).unwrap_or(i64::MAX))
    }

    /// Plan a route, reporting unknown names and missing routes as distinct
    /// errors.
    pub fn plan_route(&self, from: &str, to: &str) -> Result<RoutePlan> {
        let start = self.resolve_or_suggest(from)?;
        let goal = self.resolve_or_suggest(to)?;
        debug!(from, to, %start, %goal, "planning route");

        if start == goal {
            return Ok(RoutePlan {
                start,
                goal,
                path: PathResult::default(),
            });
        }

        let path = path::shortest_path(&self.graph, &start, &goal)?;
        if path.is_empty() {
            return Err(Error::RouteNotFound {
                start: start.clone(),
                goal: goal.clone(),
            });
        }

        Ok(RoutePlan { start, goal, path })
    }

    /// Capital-to-capital distance for two country codes, in either order.
    pub fn capital_distance(&self, code_a: &str, code_b: &str) -> Option<u32> {
        self.capitals.between(code_a, code_b)
    }

    /// Display name for a country code.
    pub fn country_name(&self, code: &str) -> Option<&str> {
        self.country_codes.name(code)
    }
}
