use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use georoute_cli::output::OutputFormat;
use georoute_lib::Waypoint;

mod commands;

use commands::route::RouteCommandArgs;
use commands::Sources;

/// Nearest-vertex, connectivity and shortest-path queries over a .graph road network.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the .graph file.
    #[arg(long, global = true, env = "GEOROUTE_GRAPH")]
    graph: Option<PathBuf>,

    /// Path to a places CSV (`name1,name2,lat,lon`) used to resolve place names.
    #[arg(long, global = true, env = "GEOROUTE_PLACES")]
    places: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Find the graph vertex closest to a place or `lat,lon` pair.
    Nearest {
        #[arg(allow_hyphen_values = true)]
        at: Waypoint,
    },
    /// Check whether two places lie in the same connected component.
    Connected {
        #[arg(allow_hyphen_values = true)]
        from: Waypoint,
        #[arg(allow_hyphen_values = true)]
        to: Waypoint,
        /// Use the coordinates as given instead of snapping them to vertices.
        #[arg(long)]
        exact: bool,
    },
    /// Compute the shortest route between two places.
    Route {
        /// Starting place or `lat,lon` pair.
        #[arg(long = "from", allow_hyphen_values = true)]
        from: Waypoint,
        /// Destination place or `lat,lon` pair.
        #[arg(long = "to", allow_hyphen_values = true)]
        to: Waypoint,
        /// Intermediate stop; repeat to add more.
        #[arg(long = "via", allow_hyphen_values = true)]
        via: Vec<Waypoint>,
    },
    /// Sum the straight-line distances along a sequence of points.
    Distance {
        #[arg(required = true, allow_hyphen_values = true)]
        points: Vec<Waypoint>,
    },
    /// Print vertex and edge counts.
    Stats,
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let sources = Sources {
        graph: cli.graph.as_deref(),
        places: cli.places.as_deref(),
    };
    let format = cli.format;

    let rendered = match &cli.command {
        Command::Nearest { at } => commands::query::handle_nearest(sources, at, format)?,
        Command::Connected { from, to, exact } => {
            commands::query::handle_connected(sources, from, to, *exact, format)?
        }
        Command::Route { from, to, via } => {
            let args = RouteCommandArgs {
                from: from.clone(),
                to: to.clone(),
                via: via.clone(),
            };
            commands::route::handle_route(sources, &args, format)?
        }
        Command::Distance { points } => commands::route::handle_distance(sources, points, format)?,
        Command::Stats => commands::query::handle_stats(sources, format)?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(rendered.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
