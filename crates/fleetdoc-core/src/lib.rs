//! # fleetdoc-core: Foundational Types for the Fleet Document Stack
//!
//! This crate is the bedrock of the fleet document compliance stack. It
//! defines the domain primitives shared by every other crate in the
//! workspace; it depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `TruckId`, `TrailerId`,
//!    `DriverId`, `VehicleSetId`, `NationalId` are all newtypes. No bare
//!    strings or bare UUIDs for identifiers.
//!
//! 2. **Single `DocumentType` enum.** One definition, 25 variants across the
//!    vehicle and driver catalogs, exhaustive `match` everywhere. Adding a
//!    document type forces every consumer to handle it.
//!
//! 3. **Invariants by construction.** A slot's file name and file handle are
//!    one `Option<FileAttachment>`: a slot cannot carry a name without a
//!    handle or a handle without a name.
//!
//! 4. **Calendar-date expiry.** `ExpiryDate` wraps a `chrono::NaiveDate`
//!    with a strict `YYYY-MM-DD` parse. Expiry is a date, never a time.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `fleetdoc-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod catalog;
pub mod digest;
pub mod error;
pub mod holder;
pub mod identity;
pub mod ownership;
pub mod slot;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use catalog::{
    DocumentType, HolderKind, DRIVER_CATALOG, DRIVER_DOCUMENT_COUNT, VEHICLE_CATALOG,
    VEHICLE_DOCUMENT_COUNT,
};
pub use digest::{ContentDigest, FileHandle};
pub use error::CoreError;
pub use holder::DocumentHolder;
pub use identity::{DriverId, HolderRef, NationalId, TrailerId, TruckId, VehicleSetId};
pub use ownership::OwnershipCategory;
pub use slot::{default_slots, DocumentSlot, FileAttachment};
pub use temporal::ExpiryDate;
