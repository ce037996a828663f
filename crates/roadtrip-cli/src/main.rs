use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roadtrip_cli::interactive;
use roadtrip_cli::output::{render_summary, OutputFormat};
use roadtrip_lib::{DatasetPaths, RoadTrip, RouteSummary};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Shortest land-border routes between countries"
)]
struct Cli {
    /// Border adjacency file (`Country = Neighbour 123 km; ...`).
    borders: PathBuf,

    /// Capital-to-capital distance CSV.
    capdist: PathBuf,

    /// Country code / name TSV.
    state_name: PathBuf,

    /// Origin country for a one-shot query (skips the interactive prompt).
    #[arg(long = "from", requires = "to")]
    from: Option<String>,

    /// Destination country for a one-shot query.
    #[arg(long = "to", requires = "from")]
    to: Option<String>,

    /// Output format for one-shot queries.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable debug logging (overridden by `RUST_LOG`).
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = DatasetPaths::new(&cli.borders, &cli.capdist, &cli.state_name);
    let trip = RoadTrip::from_paths(&paths).context("failed to load the border datasets")?;

    match (cli.from.as_deref(), cli.to.as_deref()) {
        (Some(from), Some(to)) => handle_route(&trip, from, to, cli.format),
        _ => handle_interactive(&trip),
    }
}

fn handle_route(trip: &RoadTrip, from: &str, to: &str, format: OutputFormat) -> Result<()> {
    let plan = trip.plan_route(from, to)?;
    let summary = RouteSummary::from_plan(&plan);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_summary(&summary, format, &mut out).context("failed to write route")?;
    out.flush()?;
    Ok(())
}

fn handle_interactive(trip: &RoadTrip) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    interactive::run(trip, stdin.lock(), &mut out)
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
