use std::path::PathBuf;

use thiserror::Error;

/// Convenient result alias for the roadtrip library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Raised when a country name could not be resolved against the border graph.
    #[error("unknown country name: {name}{}", format_suggestions(.suggestions))]
    UnknownCountry {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when both countries are known but no land route connects them.
    #[error("no route found between {start} and {goal}")]
    RouteNotFound { start: String, goal: String },

    /// Raised when path reconstruction walks a hop the graph has no border for.
    ///
    /// The graph is symmetrized at build time, so this indicates a bug rather
    /// than bad input.
    #[error("internal error: no border recorded between {from} and {to}")]
    MissingBorder { from: String, to: String },

    /// Raised when a dataset file could not be opened or read.
    #[error("failed to read dataset file {path}: {source}")]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raised when a dataset file is structurally unusable (e.g. missing columns).
    #[error("malformed dataset {path}: {message}")]
    MalformedDataset { path: String, message: String },

    /// Wrapper for CSV/TSV reader errors.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// Wrapper for IO errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
