//! # Ownership Category
//!
//! Trucks, trailers, and vehicle sets belong either to the operating
//! company (Asmira) or to a third-party supplier. The category partitions
//! the fleet on every listing surface and must agree across a vehicle
//! set's truck and trailer at creation time.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// Who owns a truck, trailer, or vehicle set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OwnershipCategory {
    /// Owned and operated by the company itself.
    Asmira,
    /// Owned by a third-party supplier.
    Supplier,
}

impl OwnershipCategory {
    /// Returns the kebab-case string identifier for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asmira => "asmira",
            Self::Supplier => "supplier",
        }
    }
}

impl std::fmt::Display for OwnershipCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OwnershipCategory {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asmira" => Ok(Self::Asmira),
            "supplier" => Ok(Self::Supplier),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}
