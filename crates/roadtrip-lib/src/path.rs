use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::{BorderGraph, CountryKey};

/// One hop of a route across a single land border.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathStep {
    pub from: CountryKey,
    pub to: CountryKey,
    pub distance_km: u32,
}

/// Ordered hops from origin to destination plus their summed length.
///
/// An empty `steps` list means either "no path" or "origin equals
/// destination"; callers that need to tell those apart compare the endpoints
/// first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub steps: Vec<PathStep>,
    pub total_km: u64,
}

impl PathResult {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of borders crossed.
    pub fn hop_count(&self) -> usize {
        self.steps.len()
    }
}

/// Run Dijkstra's algorithm over border lengths between two canonical keys.
///
/// Returns the sequence of countries visited, origin and destination
/// included, or `None` when either key is unknown or no route exists. Equal
/// tentative distances are settled in lexicographic key order so results are
/// reproducible.
pub fn find_route_dijkstra<'g>(
    graph: &'g BorderGraph,
    start: &str,
    goal: &str,
) -> Option<Vec<&'g str>> {
    let start = graph.key(start)?;
    let goal = graph.key(goal)?;
    if start == goal {
        return Some(vec![start]);
    }

    let mut distances: HashMap<&'g str, u64> = HashMap::new();
    let mut parents: HashMap<&'g str, Option<&'g str>> = HashMap::new();
    let mut queue = BinaryHeap::new();
    let mut settled = 0usize;

    distances.insert(start, 0);
    parents.insert(start, None);
    queue.push(QueueEntry::new(start, 0));

    while let Some(entry) = queue.pop() {
        if distances
            .get(entry.node)
            .is_some_and(|&best| best < entry.cost)
        {
            continue;
        }
        settled += 1;

        if entry.node == goal {
            debug!(start, goal, settled, cost = entry.cost, "route found");
            return Some(reconstruct_path(&parents, start, goal));
        }

        for border in graph.neighbours(entry.node) {
            let next = border.target.as_str();
            let next_cost = entry.cost + u64::from(border.length_km);
            if next_cost < distances.get(next).copied().unwrap_or(u64::MAX) {
                distances.insert(next, next_cost);
                parents.insert(next, Some(entry.node));
                queue.push(QueueEntry::new(next, next_cost));
            }
        }
    }

    debug!(start, goal, settled, "frontier exhausted without reaching goal");
    None
}

/// Compute the shortest route between two canonical keys as a list of hops.
///
/// Both keys are expected to be exact graph keys; name resolution is the
/// caller's job. Unknown keys and disconnected pairs produce an empty result.
pub fn shortest_path(graph: &BorderGraph, origin: &str, destination: &str) -> Result<PathResult> {
    match find_route_dijkstra(graph, origin, destination) {
        Some(route) => path_from_route(graph, &route),
        None => Ok(PathResult::default()),
    }
}

/// Turn a node sequence into hops, re-reading each border length from the
/// graph.
pub fn path_from_route(graph: &BorderGraph, route: &[&str]) -> Result<PathResult> {
    let mut result = PathResult::default();
    for pair in route.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        let distance_km =
            graph
                .border_length(from, to)
                .ok_or_else(|| Error::MissingBorder {
                    from: from.to_string(),
                    to: to.to_string(),
                })?;
        result.total_km += u64::from(distance_km);
        result.steps.push(PathStep {
            from: from.to_string(),
            to: to.to_string(),
            distance_km,
        });
    }
    Ok(result)
}

fn reconstruct_path<'g>(
    parents: &HashMap<&'g str, Option<&'g str>>,
    start: &'g str,
    goal: &'g str,
) -> Vec<&'g str> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start {
            break;
        }
        current = parents.get(node).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<'g> {
    node: &'g str,
    cost: u64,
}

impl<'g> QueueEntry<'g> {
    fn new(node: &'g str, cost: u64) -> Self {
        Self { node, cost }
    }
}

impl Ord for QueueEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost, then name.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(self.node))
    }
}

impl PartialOrd for QueueEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
