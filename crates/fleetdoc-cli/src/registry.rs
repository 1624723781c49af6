//! # Fleet Registry Loading
//!
//! Reads the human-edited registry file describing the fleet and builds a
//! [`FleetStore`] from it. YAML is the primary format; a `.json`
//! extension switches to JSON.
//!
//! Document entries may point at on-disk content (`file:`), which is read
//! and uploaded, or carry only an expiry date, which records the date on
//! an empty slot until the scan arrives. Content paths are resolved
//! relative to the registry file.

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

use fleetdoc_core::{
    DocumentType, ExpiryDate, HolderRef, NationalId, OwnershipCategory,
};
use fleetdoc_store::{FleetStore, SlotPatch};

/// The registry file's top-level shape.
#[derive(Debug, Default, Deserialize)]
pub struct FleetRegistry {
    /// Trucks, in listing order.
    #[serde(default)]
    pub trucks: Vec<VehicleEntry>,
    /// Trailers, in listing order.
    #[serde(default)]
    pub trailers: Vec<VehicleEntry>,
    /// Drivers, in listing order.
    #[serde(default)]
    pub drivers: Vec<DriverEntry>,
    /// Rigs, referencing trucks and trailers by plate.
    #[serde(default)]
    pub sets: Vec<SetEntry>,
}

/// A truck or trailer in the registry.
#[derive(Debug, Deserialize)]
pub struct VehicleEntry {
    /// License plate.
    pub plate: String,
    /// Ownership category.
    pub category: OwnershipCategory,
    /// Documents to seed into the checklist.
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

/// A driver in the registry.
#[derive(Debug, Deserialize)]
pub struct DriverEntry {
    /// Full name.
    pub name: String,
    /// National identity number.
    pub national_id: String,
    /// Contact phone number.
    #[serde(default)]
    pub phone: String,
    /// Documents to seed into the checklist.
    #[serde(default)]
    pub documents: Vec<DocumentEntry>,
}

/// One seeded document.
#[derive(Debug, Deserialize)]
pub struct DocumentEntry {
    /// Document type, by its kebab-case identifier.
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    /// Expiry date, if known.
    #[serde(default)]
    pub expiry: Option<ExpiryDate>,
    /// Path to the file content, relative to the registry file.
    #[serde(default)]
    pub file: Option<PathBuf>,
    /// Display file name; defaults to the content path's file name.
    #[serde(default)]
    pub file_name: Option<String>,
}

/// A rig in the registry, referencing holders by plate.
#[derive(Debug, Deserialize)]
pub struct SetEntry {
    /// Plate of the rig's truck.
    pub truck: String,
    /// Plate of the rig's trailer.
    pub trailer: String,
    /// Ownership category of the rig.
    pub category: OwnershipCategory,
}

/// Parse a registry file.
///
/// # Errors
///
/// Fails on unreadable files and malformed YAML/JSON.
pub fn load_registry(path: &Path) -> anyhow::Result<FleetRegistry> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading registry {}", path.display()))?;
    let registry = if path.extension().is_some_and(|e| e == "json") {
        serde_json::from_str(&text)
            .with_context(|| format!("parsing JSON registry {}", path.display()))?
    } else {
        serde_yaml::from_str(&text)
            .with_context(|| format!("parsing YAML registry {}", path.display()))?
    };
    Ok(registry)
}

/// Build a store from a registry, reading document content relative to
/// `base_dir`.
///
/// # Errors
///
/// Fails on blank identity attributes, unreadable content files, and
/// rigs whose plates do not resolve or whose categories disagree.
pub fn build_store(registry: &FleetRegistry, base_dir: &Path) -> anyhow::Result<FleetStore> {
    let mut store = FleetStore::new();

    for entry in &registry.trucks {
        let id = store.add_truck(&entry.plate, entry.category)?;
        seed_documents(&mut store, HolderRef::Truck(id), &entry.documents, base_dir)?;
    }
    for entry in &registry.trailers {
        let id = store.add_trailer(&entry.plate, entry.category)?;
        seed_documents(&mut store, HolderRef::Trailer(id), &entry.documents, base_dir)?;
    }
    for entry in &registry.drivers {
        let id = store.add_driver(
            &entry.name,
            NationalId(entry.national_id.clone()),
            &entry.phone,
        )?;
        seed_documents(&mut store, HolderRef::Driver(id), &entry.documents, base_dir)?;
    }
    for entry in &registry.sets {
        let truck = store
            .trucks()
            .iter()
            .find(|t| t.plate == entry.truck)
            .map(|t| t.id)
            .with_context(|| format!("rig references unknown truck plate {:?}", entry.truck))?;
        let trailer = store
            .trailers()
            .iter()
            .find(|t| t.plate == entry.trailer)
            .map(|t| t.id)
            .with_context(|| {
                format!("rig references unknown trailer plate {:?}", entry.trailer)
            })?;
        store
            .add_vehicle_set(truck, trailer, entry.category)
            .with_context(|| format!("registering rig {} + {}", entry.truck, entry.trailer))?;
    }

    Ok(store)
}

fn seed_documents(
    store: &mut FleetStore,
    holder: HolderRef,
    documents: &[DocumentEntry],
    base_dir: &Path,
) -> anyhow::Result<()> {
    for doc in documents {
        if let Some(file) = &doc.file {
            let path = base_dir.join(file);
            let bytes = std::fs::read(&path)
                .with_context(|| format!("reading document content {}", path.display()))?;
            let file_name = doc
                .file_name
                .clone()
                .or_else(|| {
                    path.file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                })
                .unwrap_or_else(|| doc.document_type.to_string());
            store.upload_document(holder, doc.document_type, &file_name, bytes);
        } else if doc.file_name.is_some() {
            tracing::warn!(
                %holder,
                document_type = %doc.document_type,
                "registry names a file without content; slot left empty"
            );
        }
        if let Some(expiry) = doc.expiry {
            store.update_document(holder, doc.document_type, SlotPatch::set_expiry(expiry));
        }
    }
    Ok(())
}
