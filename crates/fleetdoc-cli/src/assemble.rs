//! # Assemble Subcommand
//!
//! Plans a delivery package for one holder: resolves the selected
//! document types against the registry's content and prints the ordered
//! part list the merge collaborator would receive.

use std::path::PathBuf;
use std::str::FromStr;

use anyhow::Context;
use clap::Args;

use fleetdoc_assembly::{assemble, DocumentSelection};
use fleetdoc_core::{DocumentHolder, DocumentType, HolderRef};

use crate::registry;

/// Arguments for the assemble subcommand.
#[derive(Args, Debug)]
pub struct AssembleArgs {
    /// Path to the fleet registry file (YAML or JSON).
    #[arg(long)]
    pub fleet: PathBuf,

    /// Plate or driver name identifying the holder.
    #[arg(long)]
    pub holder: String,

    /// Document types to include, by kebab-case identifier. Defaults to
    /// every filled slot of the holder.
    #[arg(long = "doc")]
    pub docs: Vec<String>,
}

/// Resolve the selection and print the assembly plan.
pub fn run(args: AssembleArgs) -> anyhow::Result<()> {
    let registry = registry::load_registry(&args.fleet)?;
    let base_dir = args.fleet.parent().unwrap_or(std::path::Path::new("."));
    let store = registry::build_store(&registry, base_dir)?;

    let holder = find_holder(&store, &args.holder)
        .with_context(|| format!("no truck, trailer, or driver named {:?}", args.holder))?;

    let document_types: Vec<DocumentType> = if args.docs.is_empty() {
        filled_types(&store, holder)
    } else {
        args.docs
            .iter()
            .map(|s| DocumentType::from_str(s))
            .collect::<Result<_, _>>()?
    };

    let selections: Vec<DocumentSelection> = document_types
        .into_iter()
        .map(|document_type| DocumentSelection {
            holder,
            document_type,
        })
        .collect();

    let request = assemble(&store, &selections)?;
    println!("delivery package: {}", request.suggested_file_name);
    for (index, part) in request.parts.iter().enumerate() {
        println!(
            "  {:>2}. {:<40} {} ({} bytes)",
            index + 1,
            part.label,
            part.file_name,
            part.content.len(),
        );
    }
    Ok(())
}

fn find_holder(store: &fleetdoc_store::FleetStore, name: &str) -> Option<HolderRef> {
    if let Some(truck) = store.trucks().iter().find(|t| t.plate == name) {
        return Some(HolderRef::Truck(truck.id));
    }
    if let Some(trailer) = store.trailers().iter().find(|t| t.plate == name) {
        return Some(HolderRef::Trailer(trailer.id));
    }
    store
        .drivers()
        .iter()
        .find(|d| d.name == name)
        .map(|d| HolderRef::Driver(d.id))
}

fn filled_types(store: &fleetdoc_store::FleetStore, holder: HolderRef) -> Vec<DocumentType> {
    let slots = match holder {
        HolderRef::Truck(id) => store.truck(id).map(|t| t.slots()),
        HolderRef::Trailer(id) => store.trailer(id).map(|t| t.slots()),
        HolderRef::Driver(id) => store.driver(id).map(|d| d.slots()),
    };
    slots
        .unwrap_or(&[])
        .iter()
        .filter(|s| s.is_filled())
        .map(|s| s.document_type)
        .collect()
}
