//! # fleetdoc CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use clap::Parser;

/// Fleet document stack CLI.
///
/// Tracks compliance documents for trucks, trailers, and drivers:
/// prints checklists, the expiry alert feed, registered rigs, and
/// delivery package plans from a fleet registry file.
#[derive(Parser, Debug)]
#[command(name = "fleetdoc", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Print the fixed document checklists.
    Catalog(fleetdoc_cli::catalog::CatalogArgs),
    /// Print the expiry alert feed for a fleet registry.
    Alerts(fleetdoc_cli::alerts::AlertsArgs),
    /// Print registered rigs joined to their trucks and trailers.
    Sets(fleetdoc_cli::sets::SetsArgs),
    /// Plan a delivery package for one holder's documents.
    Assemble(fleetdoc_cli::assemble::AssembleArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog(args) => fleetdoc_cli::catalog::run(args),
        Commands::Alerts(args) => fleetdoc_cli::alerts::run(args),
        Commands::Sets(args) => fleetdoc_cli::sets::run(args),
        Commands::Assemble(args) => fleetdoc_cli::assemble::run(args),
    }
}
