//! # Fleet Holders
//!
//! The three concrete holder types and their update patches. Holders are
//! created with the full default slot list for their kind and keep it for
//! life: document mutation toggles slot fields, it never adds or removes
//! slots.

use serde::{Deserialize, Serialize};

use fleetdoc_core::{
    default_slots, DocumentHolder, DocumentSlot, DocumentType, DriverId, HolderKind, NationalId,
    OwnershipCategory, TrailerId, TruckId, DRIVER_CATALOG, VEHICLE_CATALOG,
};

/// A tractor unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Truck {
    /// Unique identifier.
    pub id: TruckId,
    /// License plate, the truck's display identity.
    pub plate: String,
    /// Company or supplier ownership.
    pub category: OwnershipCategory,
    /// Vehicle document checklist, one slot per catalog entry.
    pub slots: Vec<DocumentSlot>,
}

impl Truck {
    /// Create a truck with an empty vehicle checklist.
    pub fn new(plate: impl Into<String>, category: OwnershipCategory) -> Self {
        Self {
            id: TruckId::new(),
            plate: plate.into(),
            category,
            slots: default_slots(&VEHICLE_CATALOG),
        }
    }

    pub(crate) fn slot_mut(&mut self, document_type: DocumentType) -> Option<&mut DocumentSlot> {
        self.slots
            .iter_mut()
            .find(|s| s.document_type == document_type)
    }
}

impl DocumentHolder for Truck {
    fn kind(&self) -> HolderKind {
        HolderKind::Vehicle
    }

    fn display_name(&self) -> String {
        self.plate.clone()
    }

    fn slots(&self) -> &[DocumentSlot] {
        &self.slots
    }
}

/// A trailer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trailer {
    /// Unique identifier.
    pub id: TrailerId,
    /// License plate, the trailer's display identity.
    pub plate: String,
    /// Company or supplier ownership.
    pub category: OwnershipCategory,
    /// Vehicle document checklist, one slot per catalog entry.
    pub slots: Vec<DocumentSlot>,
}

impl Trailer {
    /// Create a trailer with an empty vehicle checklist.
    pub fn new(plate: impl Into<String>, category: OwnershipCategory) -> Self {
        Self {
            id: TrailerId::new(),
            plate: plate.into(),
            category,
            slots: default_slots(&VEHICLE_CATALOG),
        }
    }

    pub(crate) fn slot_mut(&mut self, document_type: DocumentType) -> Option<&mut DocumentSlot> {
        self.slots
            .iter_mut()
            .find(|s| s.document_type == document_type)
    }
}

impl DocumentHolder for Trailer {
    fn kind(&self) -> HolderKind {
        HolderKind::Vehicle
    }

    fn display_name(&self) -> String {
        self.plate.clone()
    }

    fn slots(&self) -> &[DocumentSlot] {
        &self.slots
    }
}

/// A driver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    /// Unique identifier.
    pub id: DriverId,
    /// Full name, the driver's display identity.
    pub name: String,
    /// National identity number.
    pub national_id: NationalId,
    /// Contact phone number.
    pub phone: String,
    /// Driver document checklist, one slot per catalog entry.
    pub slots: Vec<DocumentSlot>,
}

impl Driver {
    /// Create a driver with an empty driver checklist.
    pub fn new(
        name: impl Into<String>,
        national_id: NationalId,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: DriverId::new(),
            name: name.into(),
            national_id,
            phone: phone.into(),
            slots: default_slots(&DRIVER_CATALOG),
        }
    }

    pub(crate) fn slot_mut(&mut self, document_type: DocumentType) -> Option<&mut DocumentSlot> {
        self.slots
            .iter_mut()
            .find(|s| s.document_type == document_type)
    }
}

impl DocumentHolder for Driver {
    fn kind(&self) -> HolderKind {
        HolderKind::Driver
    }

    fn display_name(&self) -> String {
        self.name.clone()
    }

    fn slots(&self) -> &[DocumentSlot] {
        &self.slots
    }
}

// ─── Update Patches ──────────────────────────────────────────────────

/// Partial update of a truck's identity attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TruckPatch {
    /// New plate, if changing.
    pub plate: Option<String>,
    /// New ownership category, if changing.
    pub category: Option<OwnershipCategory>,
}

/// Partial update of a trailer's identity attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrailerPatch {
    /// New plate, if changing.
    pub plate: Option<String>,
    /// New ownership category, if changing.
    pub category: Option<OwnershipCategory>,
}

/// Partial update of a driver's identity attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DriverPatch {
    /// New name, if changing.
    pub name: Option<String>,
    /// New national identity number, if changing.
    pub national_id: Option<NationalId>,
    /// New phone number, if changing.
    pub phone: Option<String>,
}
