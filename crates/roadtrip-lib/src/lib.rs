//! Roadtrip library entry points.
//!
//! This crate reads the border, capital-distance, and country-code datasets,
//! builds an undirected border graph weighted by border length, resolves
//! country names and aliases, and runs shortest-path searches between
//! countries. The CLI should only depend on the functions exported here
//! instead of reimplementing behavior.

#![deny(warnings)]

pub mod dataset;
pub mod error;
pub mod graph;
pub mod names;
pub mod output;
pub mod path;
pub mod routing;
pub mod tables;

pub use dataset::{
    load_borders, load_capital_distances, load_country_codes, load_dataset, parse_borders,
    parse_capital_distances, parse_country_codes, BorderRecord, Dataset, DatasetPaths,
};
pub use error::{Error, Result};
pub use graph::{build_graph, Border, BorderGraph, CountryKey};
pub use output::{format_hop, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_route_dijkstra, shortest_path, PathResult, PathStep};
pub use routing::{RoadTrip, RoutePlan, NO_DISTANCE};
pub use tables::{CapitalDistances, CountryCodes};
