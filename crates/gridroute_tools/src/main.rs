//! Gridroute - Development Tools

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use gridroute_core::pathfinder::Pathfinder;
use gridroute_tools::ascii_map;
use gridroute_tools::grid_size::adaptive_grid_size;
use gridroute_tools::scenario::Scenario;

#[derive(Parser)]
#[command(name = "gridroute-tools")]
#[command(about = "Development tools for the gridroute engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a scenario's route queries
    Route {
        /// Path to a RON scenario file
        path: String,
        /// Emit routes as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },
    /// Print the rasterized walkability grid
    Grid {
        /// Path to a RON scenario file
        path: String,
        /// Overlay the first query's route
        #[arg(long)]
        overlay: bool,
    },
    /// Validate a scenario file
    Validate {
        /// Path to a RON scenario file
        path: String,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Route { path, json } => run_routes(&path, json),
        Commands::Grid { path, overlay } => print_grid(&path, overlay),
        Commands::Validate { path } => validate(&path),
    };

    if let Err(e) = outcome {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn build_pathfinder(scenario: &Scenario) -> Result<Pathfinder, Box<dyn std::error::Error>> {
    let grid_size = adaptive_grid_size(scenario.grid_size, scenario.max_rotation());
    tracing::info!(
        grid_size,
        footprint = scenario.footprint_size,
        "Building pathfinder"
    );
    Ok(Pathfinder::new(
        scenario.corridors.clone(),
        scenario.walls.clone(),
        grid_size,
        scenario.footprint_size,
    )?)
}

fn run_routes(path: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = Scenario::load(path)?;
    let pathfinder = build_pathfinder(&scenario)?;

    let routes: Vec<_> = scenario
        .queries
        .iter()
        .map(|q| pathfinder.route(q.from, q.to, &scenario.waypoints))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&routes)?);
        return Ok(());
    }

    for (query, route) in scenario.queries.iter().zip(&routes) {
        match route {
            Some(route) => println!(
                "{:?} -> {:?}: {} points, {} teleports, length {:.1}",
                query.from,
                query.to,
                route.len(),
                route.teleport_segments.len(),
                route.walk_length()
            ),
            None => println!("{:?} -> {:?}: no route", query.from, query.to),
        }
    }
    Ok(())
}

fn print_grid(path: &str, overlay: bool) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = Scenario::load(path)?;
    let pathfinder = build_pathfinder(&scenario)?;

    let route = overlay
        .then(|| scenario.queries.first())
        .flatten()
        .and_then(|q| pathfinder.route(q.from, q.to, &scenario.waypoints));

    match route {
        Some(route) => print!(
            "{}",
            ascii_map::render_grid_with_route(pathfinder.grid(), &route)
        ),
        None => print!("{}", ascii_map::render_grid(pathfinder.grid())),
    }
    Ok(())
}

fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let scenario = Scenario::load(path)?;
    let pathfinder = build_pathfinder(&scenario)?;
    tracing::info!(
        name = %scenario.name,
        corridors = scenario.corridors.len(),
        walls = scenario.walls.len(),
        waypoints = scenario.waypoints.len(),
        walkable_cells = pathfinder.grid().walkable_count(),
        "Scenario is valid"
    );
    Ok(())
}
