//! # Sets Subcommand
//!
//! Prints registered rigs joined to their trucks and trailers.

use std::path::PathBuf;
use std::str::FromStr;

use clap::Args;

use fleetdoc_core::OwnershipCategory;

use crate::registry;

/// Arguments for the sets subcommand.
#[derive(Args, Debug)]
pub struct SetsArgs {
    /// Path to the fleet registry file (YAML or JSON).
    #[arg(long)]
    pub fleet: PathBuf,

    /// Only rigs of this ownership category: "asmira" or "supplier".
    #[arg(long)]
    pub category: Option<String>,
}

/// Resolve and print the rigs.
pub fn run(args: SetsArgs) -> anyhow::Result<()> {
    let registry = registry::load_registry(&args.fleet)?;
    let base_dir = args.fleet.parent().unwrap_or(std::path::Path::new("."));
    let store = registry::build_store(&registry, base_dir)?;

    let category = args
        .category
        .as_deref()
        .map(OwnershipCategory::from_str)
        .transpose()?;

    let resolved = store.resolve_vehicle_sets(category);
    if resolved.is_empty() {
        println!("no rigs registered");
        return Ok(());
    }
    for rig in resolved {
        println!(
            "{:<10} {:<14} + {:<14} ({})",
            rig.set.category, rig.truck.plate, rig.trailer.plate, rig.set.id,
        );
    }
    Ok(())
}
