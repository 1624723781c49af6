//! # Catalog Subcommand
//!
//! Prints the fixed document checklists.

use clap::Args;

use fleetdoc_core::{HolderKind, DRIVER_CATALOG, VEHICLE_CATALOG};

/// Arguments for the catalog subcommand.
#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Print only one checklist: "vehicle" or "driver".
    #[arg(long)]
    pub kind: Option<String>,
}

/// Print the requested catalogs.
pub fn run(args: CatalogArgs) -> anyhow::Result<()> {
    let kinds: Vec<HolderKind> = match args.kind.as_deref() {
        Some("vehicle") => vec![HolderKind::Vehicle],
        Some("driver") => vec![HolderKind::Driver],
        Some(other) => anyhow::bail!("unknown holder kind {other:?}; expected vehicle or driver"),
        None => vec![HolderKind::Vehicle, HolderKind::Driver],
    };
    for kind in kinds {
        let catalog = match kind {
            HolderKind::Vehicle => &VEHICLE_CATALOG[..],
            HolderKind::Driver => &DRIVER_CATALOG[..],
        };
        println!("{kind} documents ({}):", catalog.len());
        for doc in catalog {
            println!("  {:<34} {}", doc.as_str(), doc.label());
        }
    }
    Ok(())
}
