//! Output formatting for route rendering.

use std::io::{self, Write};

use clap::ValueEnum;
use roadtrip_lib::{RouteRenderMode, RouteSummary};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Route header followed by one `* A --> B (N km.)` line per border.
    #[default]
    Text,
    /// Bare list of countries with `+`/`|`/`-` markers.
    Basic,
    /// Pretty-printed JSON summary.
    Json,
}

/// Render a route summary to `out` in the requested format.
///
/// # Errors
///
/// Returns an error if JSON serialization or writing fails.
pub fn render_summary<W: Write>(
    summary: &RouteSummary,
    format: OutputFormat,
    out: &mut W,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => out.write_all(summary.render(RouteRenderMode::PlainText).as_bytes()),
        OutputFormat::Basic => out.write_all(summary.render(RouteRenderMode::Basic).as_bytes()),
        OutputFormat::Json => render_json(summary, out),
    }
}

/// Render a route summary in JSON format.
pub fn render_json<W: Write>(summary: &RouteSummary, out: &mut W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, summary).map_err(io::Error::other)?;
    out.write_all(b"\n")?;
    Ok(())
}
