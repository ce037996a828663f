use std::fmt::Write;

use serde::Serialize;

use crate::graph::CountryKey;
use crate::routing::RoutePlan;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    /// `* A --> B (N km.)` per hop under a "Route from" header.
    PlainText,
    /// Country list with `+`/`|`/`-` prefixes for first/middle/last.
    Basic,
}

/// Step taken during traversal of a planned route.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteStep {
    pub index: usize,
    pub from: CountryKey,
    pub to: CountryKey,
    pub distance_km: u32,
}

/// Structured representation of a planned route that consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RouteSummary {
    pub start: CountryKey,
    pub goal: CountryKey,
    pub hops: usize,
    pub total_km: u64,
    pub steps: Vec<RouteStep>,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with numbered steps.
    pub fn from_plan(plan: &RoutePlan) -> Self {
        let steps = plan
            .path
            .steps
            .iter()
            .enumerate()
            .map(|(index, step)| RouteStep {
                index: index + 1,
                from: step.from.clone(),
                to: step.to.clone(),
                distance_km: step.distance_km,
            })
            .collect();

        Self {
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            hops: plan.hop_count(),
            total_km: plan.total_km(),
            steps,
        }
    }

    /// Countries visited in order, origin and destination included.
    pub fn countries(&self) -> Vec<&str> {
        let mut countries = vec![self.start.as_str()];
        countries.extend(self.steps.iter().map(|step| step.to.as_str()));
        countries
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Basic => self.render_basic(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        if self.steps.is_empty() {
            let _ = writeln!(
                buffer,
                "The distance from {} to {} is 0 km.",
                self.start, self.goal
            );
            return buffer;
        }

        let _ = writeln!(buffer, "Route from {} to {}:", self.start, self.goal);
        for step in &self.steps {
            let _ = writeln!(
                buffer,
                "{}",
                format_hop(&step.from, &step.to, step.distance_km)
            );
        }
        let _ = writeln!(buffer, "Total distance: {} km.", self.total_km);
        buffer
    }

    fn render_basic(&self) -> String {
        let mut buffer = String::new();
        let countries = self.countries();
        let len = countries.len();
        for (i, country) in countries.iter().enumerate() {
            let prefix = if i == 0 {
                '+'
            } else if i + 1 == len {
                '-'
            } else {
                '|'
            };
            let _ = writeln!(buffer, "{prefix} {country}");
        }
        buffer
    }
}

/// Format a single border crossing as `* A --> B (N km.)`.
pub fn format_hop(from: &str, to: &str, distance_km: u32) -> String {
    format!("* {from} --> {to} ({distance_km} km.)")
}
