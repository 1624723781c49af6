//! # Domain Identity Newtypes
//!
//! Newtype wrappers for all identifiers in the fleet document stack.
//! These prevent accidental identifier confusion: you cannot pass a
//! `TruckId` where a `TrailerId` is expected, even though both are UUIDs
//! underneath.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a truck (tractor unit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TruckId(pub Uuid);

/// Unique identifier for a trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrailerId(pub Uuid);

/// Unique identifier for a driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverId(pub Uuid);

/// Unique identifier for a vehicle set (one truck paired with one trailer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VehicleSetId(pub Uuid);

/// National identity number of a driver.
///
/// Kept as an opaque string: format rules vary by issuing country and are
/// a data-entry concern, not a store invariant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NationalId(pub String);

impl TruckId {
    /// Generate a new random truck identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl TrailerId {
    /// Generate a new random trailer identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl DriverId {
    /// Generate a new random driver identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl VehicleSetId {
    /// Generate a new random vehicle set identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TruckId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for TrailerId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for DriverId {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for VehicleSetId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TruckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "truck:{}", self.0)
    }
}

impl std::fmt::Display for TrailerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "trailer:{}", self.0)
    }
}

impl std::fmt::Display for DriverId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "driver:{}", self.0)
    }
}

impl std::fmt::Display for VehicleSetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "vehicle-set:{}", self.0)
    }
}

impl std::fmt::Display for NationalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ─── Cross-Kind Holder References ────────────────────────────────────

/// A typed reference to any document holder.
///
/// Used wherever an operation targets "some holder" without caring which
/// kind: store document mutations, staging ledger keys, and assembly
/// selections. The editing surface for a vehicle set works on the truck
/// and trailer of the rig through two distinct `HolderRef` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolderRef {
    /// A truck, by identifier.
    Truck(TruckId),
    /// A trailer, by identifier.
    Trailer(TrailerId),
    /// A driver, by identifier.
    Driver(DriverId),
}

impl std::fmt::Display for HolderRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Truck(id) => id.fmt(f),
            Self::Trailer(id) => id.fmt(f),
            Self::Driver(id) => id.fmt(f),
        }
    }
}

impl From<TruckId> for HolderRef {
    fn from(id: TruckId) -> Self {
        Self::Truck(id)
    }
}

impl From<TrailerId> for HolderRef {
    fn from(id: TrailerId) -> Self {
        Self::Trailer(id)
    }
}

impl From<DriverId> for HolderRef {
    fn from(id: DriverId) -> Self {
        Self::Driver(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_distinct() {
        assert_ne!(TruckId::new(), TruckId::new());
    }

    #[test]
    fn test_display_prefixes() {
        let truck = TruckId::new();
        assert!(truck.to_string().starts_with("truck:"));
        let trailer = TrailerId::new();
        assert!(trailer.to_string().starts_with("trailer:"));
        let driver = DriverId::new();
        assert!(driver.to_string().starts_with("driver:"));
        let set = VehicleSetId::new();
        assert!(set.to_string().starts_with("vehicle-set:"));
    }

    #[test]
    fn test_holder_ref_display_matches_inner() {
        let id = TrailerId::new();
        assert_eq!(HolderRef::from(id).to_string(), id.to_string());
    }

    #[test]
    fn test_serde_roundtrip() {
        let id = DriverId::new();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: DriverId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }
}
