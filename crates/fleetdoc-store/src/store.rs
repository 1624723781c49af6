//! # The Fleet Store
//!
//! Single-owner, in-memory store of all fleet entities. Every mutation is
//! a named operation on [`FleetStore`]; the collections themselves are
//! private.
//!
//! ## Mutation contract
//!
//! Operations addressing an unknown identifier are silent no-ops. The
//! one exception is vehicle set creation, which validates its references
//! up front and fails with [`ReferentialError`] without mutating anything.
//!
//! ## State machine
//!
//! Holders have no lifecycle beyond existence. Slots move between Empty
//! and Filled through upload and delete, with the expiry date orthogonal
//! to both states.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fleetdoc_core::{
    DocumentHolder, DocumentSlot, DocumentType, DriverId, ExpiryDate, FileAttachment, FileHandle,
    HolderRef, NationalId, OwnershipCategory, TrailerId, TruckId, VehicleSetId,
};

use crate::blob::BlobStore;
use crate::holder::{Driver, DriverPatch, Trailer, TrailerPatch, Truck, TruckPatch};

// ─── Vehicle Sets ────────────────────────────────────────────────────

/// One operational rig: a truck paired with a trailer.
///
/// References are validated at creation and torn down by cascade when
/// either referenced holder is deleted; they are not re-validated on
/// every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleSet {
    /// Unique identifier.
    pub id: VehicleSetId,
    /// The truck of the rig.
    pub truck_id: TruckId,
    /// The trailer of the rig.
    pub trailer_id: TrailerId,
    /// Ownership category, equal to both referenced holders' categories
    /// at creation time.
    pub category: OwnershipCategory,
}

/// A vehicle set joined to its truck and trailer for display.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedVehicleSet<'a> {
    /// The set record.
    pub set: &'a VehicleSet,
    /// The referenced truck.
    pub truck: &'a Truck,
    /// The referenced trailer.
    pub trailer: &'a Trailer,
}

// ─── Errors ──────────────────────────────────────────────────────────

/// Vehicle set creation referenced a missing or mismatched holder.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReferentialError {
    /// The truck identifier does not resolve to a stored truck.
    #[error("vehicle set references unknown truck {0}")]
    UnknownTruck(TruckId),

    /// The trailer identifier does not resolve to a stored trailer.
    #[error("vehicle set references unknown trailer {0}")]
    UnknownTrailer(TrailerId),

    /// The referenced truck carries a different ownership category.
    #[error("truck {truck} is {found}, vehicle set declared {declared}")]
    TruckCategoryMismatch {
        /// The referenced truck.
        truck: TruckId,
        /// Category declared for the vehicle set.
        declared: OwnershipCategory,
        /// Category actually carried by the truck.
        found: OwnershipCategory,
    },

    /// The referenced trailer carries a different ownership category.
    #[error("trailer {trailer} is {found}, vehicle set declared {declared}")]
    TrailerCategoryMismatch {
        /// The referenced trailer.
        trailer: TrailerId,
        /// Category declared for the vehicle set.
        declared: OwnershipCategory,
        /// Category actually carried by the trailer.
        found: OwnershipCategory,
    },
}

/// Errors from store operations.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// A holder was created with a blank identity attribute.
    #[error("{field} must not be empty")]
    BlankIdentity {
        /// The attribute that was blank.
        field: &'static str,
    },

    /// Vehicle set creation failed referential validation.
    #[error(transparent)]
    Referential(#[from] ReferentialError),
}

// ─── Slot Patches ────────────────────────────────────────────────────

/// Partial update of a document slot's mutable metadata.
///
/// The double `Option` on `expiry_date` distinguishes "leave unchanged"
/// (`None`) from "clear the date" (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotPatch {
    /// Set or clear the expiry date.
    pub expiry_date: Option<Option<ExpiryDate>>,
    /// Rename the uploaded file. Ignored while the slot is empty, since
    /// a file name cannot exist without an upload.
    pub file_name: Option<String>,
}

impl SlotPatch {
    /// A patch that sets the expiry date.
    pub fn set_expiry(date: ExpiryDate) -> Self {
        Self {
            expiry_date: Some(Some(date)),
            ..Self::default()
        }
    }

    /// A patch that clears the expiry date.
    pub fn clear_expiry() -> Self {
        Self {
            expiry_date: Some(None),
            ..Self::default()
        }
    }

    /// A patch that renames the uploaded file.
    pub fn rename_file(name: impl Into<String>) -> Self {
        Self {
            file_name: Some(name.into()),
            ..Self::default()
        }
    }
}

// ─── The Store ───────────────────────────────────────────────────────

/// The single-owner store of all fleet entities.
///
/// Serializes to a metadata snapshot; the blob store is skipped, so a
/// rehydrated store holds slot metadata with content digests but no
/// content bytes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FleetStore {
    trucks: Vec<Truck>,
    trailers: Vec<Trailer>,
    drivers: Vec<Driver>,
    vehicle_sets: Vec<VehicleSet>,
    #[serde(skip)]
    blobs: BlobStore,
}

impl FleetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // ── Truck operations ─────────────────────────────────────────────

    /// Create a truck with an empty vehicle checklist.
    ///
    /// # Errors
    ///
    /// Fails only on a blank plate. Duplicate plates are accepted:
    /// uniqueness is a data-entry policy of the calling surface, not a
    /// store invariant.
    pub fn add_truck(
        &mut self,
        plate: &str,
        category: OwnershipCategory,
    ) -> Result<TruckId, StoreError> {
        if plate.trim().is_empty() {
            return Err(StoreError::BlankIdentity { field: "plate" });
        }
        let truck = Truck::new(plate, category);
        let id = truck.id;
        tracing::debug!(%id, plate, %category, "truck added");
        self.trucks.push(truck);
        Ok(id)
    }

    /// Update a truck's identity attributes. No-op on an unknown id.
    pub fn update_truck(&mut self, id: TruckId, patch: TruckPatch) {
        let Some(truck) = self.trucks.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(%id, "update for unknown truck ignored");
            return;
        };
        if let Some(plate) = patch.plate {
            truck.plate = plate;
        }
        if let Some(category) = patch.category {
            truck.category = category;
        }
    }

    /// Delete a truck, cascading deletion of every vehicle set that
    /// references it. No-op on an unknown id.
    pub fn delete_truck(&mut self, id: TruckId) {
        let Some(pos) = self.trucks.iter().position(|t| t.id == id) else {
            tracing::debug!(%id, "delete for unknown truck ignored");
            return;
        };
        let truck = self.trucks.remove(pos);
        self.release_slots(&truck.slots);
        let before = self.vehicle_sets.len();
        self.vehicle_sets.retain(|s| s.truck_id != id);
        tracing::debug!(
            %id,
            cascaded = before - self.vehicle_sets.len(),
            "truck deleted"
        );
    }

    /// Look up a truck by id.
    pub fn truck(&self, id: TruckId) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id == id)
    }

    /// All trucks, in creation order.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    // ── Trailer operations ───────────────────────────────────────────

    /// Create a trailer with an empty vehicle checklist.
    ///
    /// # Errors
    ///
    /// Fails only on a blank plate.
    pub fn add_trailer(
        &mut self,
        plate: &str,
        category: OwnershipCategory,
    ) -> Result<TrailerId, StoreError> {
        if plate.trim().is_empty() {
            return Err(StoreError::BlankIdentity { field: "plate" });
        }
        let trailer = Trailer::new(plate, category);
        let id = trailer.id;
        tracing::debug!(%id, plate, %category, "trailer added");
        self.trailers.push(trailer);
        Ok(id)
    }

    /// Update a trailer's identity attributes. No-op on an unknown id.
    pub fn update_trailer(&mut self, id: TrailerId, patch: TrailerPatch) {
        let Some(trailer) = self.trailers.iter_mut().find(|t| t.id == id) else {
            tracing::debug!(%id, "update for unknown trailer ignored");
            return;
        };
        if let Some(plate) = patch.plate {
            trailer.plate = plate;
        }
        if let Some(category) = patch.category {
            trailer.category = category;
        }
    }

    /// Delete a trailer, cascading deletion of every vehicle set that
    /// references it. No-op on an unknown id.
    pub fn delete_trailer(&mut self, id: TrailerId) {
        let Some(pos) = self.trailers.iter().position(|t| t.id == id) else {
            tracing::debug!(%id, "delete for unknown trailer ignored");
            return;
        };
        let trailer = self.trailers.remove(pos);
        self.release_slots(&trailer.slots);
        let before = self.vehicle_sets.len();
        self.vehicle_sets.retain(|s| s.trailer_id != id);
        tracing::debug!(
            %id,
            cascaded = before - self.vehicle_sets.len(),
            "trailer deleted"
        );
    }

    /// Look up a trailer by id.
    pub fn trailer(&self, id: TrailerId) -> Option<&Trailer> {
        self.trailers.iter().find(|t| t.id == id)
    }

    /// All trailers, in creation order.
    pub fn trailers(&self) -> &[Trailer] {
        &self.trailers
    }

    // ── Driver operations ────────────────────────────────────────────

    /// Create a driver with an empty driver checklist.
    ///
    /// # Errors
    ///
    /// Fails only on a blank name. Duplicate national ids are accepted,
    /// matching the plate policy.
    pub fn add_driver(
        &mut self,
        name: &str,
        national_id: NationalId,
        phone: &str,
    ) -> Result<DriverId, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::BlankIdentity { field: "name" });
        }
        let driver = Driver::new(name, national_id, phone);
        let id = driver.id;
        tracing::debug!(%id, name, "driver added");
        self.drivers.push(driver);
        Ok(id)
    }

    /// Update a driver's identity attributes. No-op on an unknown id.
    pub fn update_driver(&mut self, id: DriverId, patch: DriverPatch) {
        let Some(driver) = self.drivers.iter_mut().find(|d| d.id == id) else {
            tracing::debug!(%id, "update for unknown driver ignored");
            return;
        };
        if let Some(name) = patch.name {
            driver.name = name;
        }
        if let Some(national_id) = patch.national_id {
            driver.national_id = national_id;
        }
        if let Some(phone) = patch.phone {
            driver.phone = phone;
        }
    }

    /// Delete a driver. No-op on an unknown id. Drivers are never
    /// referenced by vehicle sets, so nothing cascades.
    pub fn delete_driver(&mut self, id: DriverId) {
        let Some(pos) = self.drivers.iter().position(|d| d.id == id) else {
            tracing::debug!(%id, "delete for unknown driver ignored");
            return;
        };
        let driver = self.drivers.remove(pos);
        self.release_slots(&driver.slots);
        tracing::debug!(%id, "driver deleted");
    }

    /// Look up a driver by id.
    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    /// All drivers, in creation order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    // ── Document operations ──────────────────────────────────────────

    /// Upload file content into a holder's slot.
    ///
    /// Stores the bytes in the blob store, sets the slot's attachment,
    /// and releases the superseded attachment if the slot was already
    /// filled. An existing expiry date is preserved. No-op if the holder
    /// is unknown or the document type is not in its catalog.
    pub fn upload_document(
        &mut self,
        holder: HolderRef,
        document_type: DocumentType,
        file_name: &str,
        bytes: Vec<u8>,
    ) {
        let Self {
            trucks,
            trailers,
            drivers,
            blobs,
            ..
        } = self;
        let slot = match holder {
            HolderRef::Truck(id) => trucks
                .iter_mut()
                .find(|t| t.id == id)
                .and_then(|t| t.slot_mut(document_type)),
            HolderRef::Trailer(id) => trailers
                .iter_mut()
                .find(|t| t.id == id)
                .and_then(|t| t.slot_mut(document_type)),
            HolderRef::Driver(id) => drivers
                .iter_mut()
                .find(|d| d.id == id)
                .and_then(|d| d.slot_mut(document_type)),
        };
        let Some(slot) = slot else {
            tracing::debug!(%holder, %document_type, "upload target not found, ignored");
            return;
        };
        let handle = blobs.insert(bytes);
        let superseded = slot.file.replace(FileAttachment {
            file_name: file_name.to_string(),
            handle,
        });
        if let Some(previous) = superseded {
            blobs.release(&previous.handle);
        }
        tracing::debug!(%holder, %document_type, file_name, "document uploaded");
    }

    /// Merge patch fields into a holder's slot. No-op on unknown targets.
    ///
    /// Renaming the file of an empty slot is ignored: a file name cannot
    /// exist without an upload.
    pub fn update_document(
        &mut self,
        holder: HolderRef,
        document_type: DocumentType,
        patch: SlotPatch,
    ) {
        let Some(slot) = self.slot_mut(holder, document_type) else {
            tracing::debug!(%holder, %document_type, "update target not found, ignored");
            return;
        };
        if let Some(expiry) = patch.expiry_date {
            slot.expiry_date = expiry;
        }
        if let Some(file_name) = patch.file_name {
            if let Some(attachment) = slot.file.as_mut() {
                attachment.file_name = file_name;
            }
        }
    }

    /// Reset a holder's slot to empty, clearing attachment and expiry
    /// and releasing the blob reference. No-op on unknown targets.
    pub fn delete_document(&mut self, holder: HolderRef, document_type: DocumentType) {
        let Some(slot) = self.slot_mut(holder, document_type) else {
            tracing::debug!(%holder, %document_type, "delete target not found, ignored");
            return;
        };
        let removed = slot.file.take();
        slot.expiry_date = None;
        if let Some(attachment) = removed {
            self.blobs.release(&attachment.handle);
        }
        tracing::debug!(%holder, %document_type, "document deleted");
    }

    /// Look up a holder's slot for reading.
    pub fn slot(&self, holder: HolderRef, document_type: DocumentType) -> Option<&DocumentSlot> {
        match holder {
            HolderRef::Truck(id) => self.truck(id).and_then(|t| t.slot(document_type)),
            HolderRef::Trailer(id) => self.trailer(id).and_then(|t| t.slot(document_type)),
            HolderRef::Driver(id) => self.driver(id).and_then(|d| d.slot(document_type)),
        }
    }

    /// Resolve the display name of a holder, if it exists.
    pub fn holder_name(&self, holder: HolderRef) -> Option<String> {
        match holder {
            HolderRef::Truck(id) => self.truck(id).map(|t| t.display_name()),
            HolderRef::Trailer(id) => self.trailer(id).map(|t| t.display_name()),
            HolderRef::Driver(id) => self.driver(id).map(|d| d.display_name()),
        }
    }

    /// Resolve blob content for a filled slot's handle.
    pub fn content(&self, handle: &FileHandle) -> Option<Arc<[u8]>> {
        self.blobs.get(handle)
    }

    /// Every holder in the store, trucks first, then trailers, then
    /// drivers, each group in creation order.
    pub fn holders(&self) -> impl Iterator<Item = &dyn DocumentHolder> {
        self.trucks
            .iter()
            .map(|t| t as &dyn DocumentHolder)
            .chain(self.trailers.iter().map(|t| t as &dyn DocumentHolder))
            .chain(self.drivers.iter().map(|d| d as &dyn DocumentHolder))
    }

    // ── Vehicle set operations ───────────────────────────────────────

    /// Register a rig pairing a truck with a trailer.
    ///
    /// # Errors
    ///
    /// Fails with [`ReferentialError`] if either reference does not
    /// resolve or carries a category other than `category`. On error the
    /// store is unchanged.
    pub fn add_vehicle_set(
        &mut self,
        truck_id: TruckId,
        trailer_id: TrailerId,
        category: OwnershipCategory,
    ) -> Result<VehicleSetId, ReferentialError> {
        let truck = self
            .truck(truck_id)
            .ok_or(ReferentialError::UnknownTruck(truck_id))?;
        if truck.category != category {
            return Err(ReferentialError::TruckCategoryMismatch {
                truck: truck_id,
                declared: category,
                found: truck.category,
            });
        }
        let trailer = self
            .trailer(trailer_id)
            .ok_or(ReferentialError::UnknownTrailer(trailer_id))?;
        if trailer.category != category {
            return Err(ReferentialError::TrailerCategoryMismatch {
                trailer: trailer_id,
                declared: category,
                found: trailer.category,
            });
        }
        let set = VehicleSet {
            id: VehicleSetId::new(),
            truck_id,
            trailer_id,
            category,
        };
        let id = set.id;
        tracing::debug!(%id, %truck_id, %trailer_id, %category, "vehicle set added");
        self.vehicle_sets.push(set);
        Ok(id)
    }

    /// Delete a vehicle set record. No-op on an unknown id.
    pub fn delete_vehicle_set(&mut self, id: VehicleSetId) {
        let before = self.vehicle_sets.len();
        self.vehicle_sets.retain(|s| s.id != id);
        if self.vehicle_sets.len() == before {
            tracing::debug!(%id, "delete for unknown vehicle set ignored");
        }
    }

    /// Look up a vehicle set by id.
    pub fn vehicle_set(&self, id: VehicleSetId) -> Option<&VehicleSet> {
        self.vehicle_sets.iter().find(|s| s.id == id)
    }

    /// All vehicle set records, in creation order.
    pub fn vehicle_sets(&self) -> &[VehicleSet] {
        &self.vehicle_sets
    }

    /// Join vehicle sets to their trucks and trailers for display,
    /// optionally filtered by ownership category.
    ///
    /// This is the store's defensive read path: a set whose referent has
    /// gone missing is skipped with a warning, never an error.
    pub fn resolve_vehicle_sets(
        &self,
        category: Option<OwnershipCategory>,
    ) -> Vec<ResolvedVehicleSet<'_>> {
        self.vehicle_sets
            .iter()
            .filter(|set| category.map_or(true, |c| set.category == c))
            .filter_map(|set| {
                let truck = self.truck(set.truck_id);
                let trailer = self.trailer(set.trailer_id);
                match (truck, trailer) {
                    (Some(truck), Some(trailer)) => Some(ResolvedVehicleSet {
                        set,
                        truck,
                        trailer,
                    }),
                    _ => {
                        tracing::warn!(id = %set.id, "vehicle set with missing referent skipped");
                        None
                    }
                }
            })
            .collect()
    }

    // ── Persistence ──────────────────────────────────────────────────

    /// Serialize the metadata snapshot: holders, sets, and slot metadata.
    /// Blob content is not included.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Rehydrate a store from a metadata snapshot. The blob store starts
    /// empty; content must be loaded again before it can be resolved.
    pub fn from_snapshot_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    // ── Internals ────────────────────────────────────────────────────

    fn slot_mut(
        &mut self,
        holder: HolderRef,
        document_type: DocumentType,
    ) -> Option<&mut DocumentSlot> {
        match holder {
            HolderRef::Truck(id) => self
                .trucks
                .iter_mut()
                .find(|t| t.id == id)
                .and_then(|t| t.slot_mut(document_type)),
            HolderRef::Trailer(id) => self
                .trailers
                .iter_mut()
                .find(|t| t.id == id)
                .and_then(|t| t.slot_mut(document_type)),
            HolderRef::Driver(id) => self
                .drivers
                .iter_mut()
                .find(|d| d.id == id)
                .and_then(|d| d.slot_mut(document_type)),
        }
    }

    fn release_slots(&mut self, slots: &[DocumentSlot]) {
        for slot in slots {
            if let Some(attachment) = &slot.file {
                self.blobs.release(&attachment.handle);
            }
        }
    }
}
