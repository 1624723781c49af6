//! # fleetdoc-store: The Fleet Entity Store
//!
//! Owns every entity in the system: trucks, trailers, drivers, the
//! vehicle sets joining trucks to trailers, and the content-addressed
//! blob store holding uploaded file bytes. All mutation enters through
//! the named operations on [`FleetStore`]; nothing outside this crate
//! can touch a holder's slot list directly.
//!
//! ## Contract
//!
//! - Mutations addressing an unknown identifier are silent no-ops, never
//!   errors. A caller racing a deletion cannot crash the store.
//! - Vehicle set creation is the one validated write: both referenced
//!   holders must exist and carry the set's ownership category, or the
//!   operation fails with [`ReferentialError`] and changes nothing.
//! - Deleting a truck or trailer cascades deletion of every vehicle set
//!   referencing it.
//! - Reads are defensive: a join that encounters a missing referent skips
//!   it instead of failing.
//!
//! ## Persistence
//!
//! `FleetStore` serializes to a metadata snapshot: holders, sets, slot
//! metadata including content digests. Blob bytes are excluded; a
//! rehydrated store resolves content only for blobs loaded again since.

pub mod blob;
pub mod holder;
pub mod store;

pub use blob::BlobStore;
pub use holder::{Driver, DriverPatch, Trailer, TrailerPatch, Truck, TruckPatch};
pub use store::{
    FleetStore, ReferentialError, ResolvedVehicleSet, SlotPatch, StoreError, VehicleSet,
};
