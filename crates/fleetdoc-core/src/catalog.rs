//! # Document Type Catalogs: Single Source of Truth
//!
//! Defines the `DocumentType` enum covering both fixed checklists: 15
//! vehicle document types and 10 driver document types. This is the ONE
//! definition used across the entire stack. Every `match` on
//! `DocumentType` must be exhaustive, so adding a document type forces
//! every consumer to handle it at compile time.
//!
//! ## Invariants
//!
//! - The vehicle and driver catalogs are disjoint: each variant belongs to
//!   exactly one holder kind.
//! - Catalog order is fixed. `VEHICLE_CATALOG` and `DRIVER_CATALOG` define
//!   the checklist order every holder's slot list follows.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::CoreError;

/// The kind of entity a document type belongs to.
///
/// Trucks and trailers share the vehicle checklist; drivers have their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HolderKind {
    /// A truck or trailer.
    Vehicle,
    /// A driver.
    Driver,
}

impl HolderKind {
    /// Returns the kebab-case string identifier for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Vehicle => "vehicle",
            Self::Driver => "driver",
        }
    }

    /// The fixed document catalog for this holder kind.
    pub fn catalog(&self) -> &'static [DocumentType] {
        match self {
            Self::Vehicle => &VEHICLE_CATALOG,
            Self::Driver => &DRIVER_CATALOG,
        }
    }
}

impl std::fmt::Display for HolderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every document type tracked by the stack, across both checklists.
///
/// The first 15 variants form the vehicle catalog, the last 10 the driver
/// catalog; [`DocumentType::holder_kind()`] gives the owning kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentType {
    // ── Vehicle catalog ──────────────────────────────────────────────
    /// Vehicle registration.
    Registration,
    /// Vehicle identity card.
    VehicleCard,
    /// ADR T9 dangerous-goods vehicle approval certificate.
    AdrT9,
    /// Compulsory traffic insurance policy.
    TrafficInsurance,
    /// Hazardous materials liability insurance policy.
    HazmatInsurance,
    /// Comprehensive (own-damage) insurance policy.
    ComprehensiveInsurance,
    /// Periodic technical inspection report.
    PeriodicInspection,
    /// Exhaust emission test report.
    EmissionTest,
    /// Flow meter calibration certificate.
    MeterCalibration,
    /// Tachograph calibration certificate.
    TachographCalibration,
    /// Transport activity license.
    ActivityLicense,
    /// Operating license.
    OperatingLicense,
    /// Discharge hose pressure test report.
    HosePressureTest,
    /// Tank inspection certificate.
    TankInspectionCertificate,
    /// Tax plate.
    TaxPlate,

    // ── Driver catalog ───────────────────────────────────────────────
    /// National identity card.
    IdentityCard,
    /// Driver license.
    DriverLicense,
    /// Psychometric test report.
    PsychometricTest,
    /// Criminal record extract.
    CriminalRecord,
    /// Employment start notice.
    EmploymentStartNotice,
    /// Residence certificate.
    ResidenceCertificate,
    /// Personal protective equipment assignment form.
    PpeAssignment,
    /// Periodic health examination report.
    HealthExam,
    /// Occupational health and safety training certificate.
    OhsTrainingCertificate,
    /// Fire safety training certificate.
    FireSafetyTrainingCertificate,
}

/// Number of entries in the vehicle document catalog.
pub const VEHICLE_DOCUMENT_COUNT: usize = 15;

/// Number of entries in the driver document catalog.
pub const DRIVER_DOCUMENT_COUNT: usize = 10;

/// The fixed vehicle document checklist, in display order.
pub const VEHICLE_CATALOG: [DocumentType; VEHICLE_DOCUMENT_COUNT] = [
    DocumentType::Registration,
    DocumentType::VehicleCard,
    DocumentType::AdrT9,
    DocumentType::TrafficInsurance,
    DocumentType::HazmatInsurance,
    DocumentType::ComprehensiveInsurance,
    DocumentType::PeriodicInspection,
    DocumentType::EmissionTest,
    DocumentType::MeterCalibration,
    DocumentType::TachographCalibration,
    DocumentType::ActivityLicense,
    DocumentType::OperatingLicense,
    DocumentType::HosePressureTest,
    DocumentType::TankInspectionCertificate,
    DocumentType::TaxPlate,
];

/// The fixed driver document checklist, in display order.
pub const DRIVER_CATALOG: [DocumentType; DRIVER_DOCUMENT_COUNT] = [
    DocumentType::IdentityCard,
    DocumentType::DriverLicense,
    DocumentType::PsychometricTest,
    DocumentType::CriminalRecord,
    DocumentType::EmploymentStartNotice,
    DocumentType::ResidenceCertificate,
    DocumentType::PpeAssignment,
    DocumentType::HealthExam,
    DocumentType::OhsTrainingCertificate,
    DocumentType::FireSafetyTrainingCertificate,
];

impl DocumentType {
    /// The holder kind whose catalog this document type belongs to.
    pub fn holder_kind(&self) -> HolderKind {
        match self {
            Self::Registration
            | Self::VehicleCard
            | Self::AdrT9
            | Self::TrafficInsurance
            | Self::HazmatInsurance
            | Self::ComprehensiveInsurance
            | Self::PeriodicInspection
            | Self::EmissionTest
            | Self::MeterCalibration
            | Self::TachographCalibration
            | Self::ActivityLicense
            | Self::OperatingLicense
            | Self::HosePressureTest
            | Self::TankInspectionCertificate
            | Self::TaxPlate => HolderKind::Vehicle,
            Self::IdentityCard
            | Self::DriverLicense
            | Self::PsychometricTest
            | Self::CriminalRecord
            | Self::EmploymentStartNotice
            | Self::ResidenceCertificate
            | Self::PpeAssignment
            | Self::HealthExam
            | Self::OhsTrainingCertificate
            | Self::FireSafetyTrainingCertificate => HolderKind::Driver,
        }
    }

    /// Human-readable display label for checklist rows and alerts.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Registration => "Vehicle registration",
            Self::VehicleCard => "Vehicle identity card",
            Self::AdrT9 => "ADR T9 certificate",
            Self::TrafficInsurance => "Compulsory traffic insurance",
            Self::HazmatInsurance => "Hazardous materials liability insurance",
            Self::ComprehensiveInsurance => "Comprehensive insurance",
            Self::PeriodicInspection => "Periodic technical inspection",
            Self::EmissionTest => "Emission test",
            Self::MeterCalibration => "Meter calibration certificate",
            Self::TachographCalibration => "Tachograph calibration certificate",
            Self::ActivityLicense => "Activity license",
            Self::OperatingLicense => "Operating license",
            Self::HosePressureTest => "Hose pressure test report",
            Self::TankInspectionCertificate => "Tank inspection certificate",
            Self::TaxPlate => "Tax plate",
            Self::IdentityCard => "Identity card",
            Self::DriverLicense => "Driver license",
            Self::PsychometricTest => "Psychometric test report",
            Self::CriminalRecord => "Criminal record extract",
            Self::EmploymentStartNotice => "Employment start notice",
            Self::ResidenceCertificate => "Residence certificate",
            Self::PpeAssignment => "PPE assignment form",
            Self::HealthExam => "Health examination report",
            Self::OhsTrainingCertificate => "OHS training certificate",
            Self::FireSafetyTrainingCertificate => "Fire safety training certificate",
        }
    }

    /// Returns the kebab-case string identifier for this document type.
    ///
    /// This matches the serde serialization format.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Registration => "registration",
            Self::VehicleCard => "vehicle-card",
            Self::AdrT9 => "adr-t9",
            Self::TrafficInsurance => "traffic-insurance",
            Self::HazmatInsurance => "hazmat-insurance",
            Self::ComprehensiveInsurance => "comprehensive-insurance",
            Self::PeriodicInspection => "periodic-inspection",
            Self::EmissionTest => "emission-test",
            Self::MeterCalibration => "meter-calibration",
            Self::TachographCalibration => "tachograph-calibration",
            Self::ActivityLicense => "activity-license",
            Self::OperatingLicense => "operating-license",
            Self::HosePressureTest => "hose-pressure-test",
            Self::TankInspectionCertificate => "tank-inspection-certificate",
            Self::TaxPlate => "tax-plate",
            Self::IdentityCard => "identity-card",
            Self::DriverLicense => "driver-license",
            Self::PsychometricTest => "psychometric-test",
            Self::CriminalRecord => "criminal-record",
            Self::EmploymentStartNotice => "employment-start-notice",
            Self::ResidenceCertificate => "residence-certificate",
            Self::PpeAssignment => "ppe-assignment",
            Self::HealthExam => "health-exam",
            Self::OhsTrainingCertificate => "ohs-training-certificate",
            Self::FireSafetyTrainingCertificate => "fire-safety-training-certificate",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentType {
    type Err = CoreError;

    /// Parse a document type from its kebab-case string identifier.
    ///
    /// Accepts the same identifiers produced by [`DocumentType::as_str()`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "registration" => Ok(Self::Registration),
            "vehicle-card" => Ok(Self::VehicleCard),
            "adr-t9" => Ok(Self::AdrT9),
            "traffic-insurance" => Ok(Self::TrafficInsurance),
            "hazmat-insurance" => Ok(Self::HazmatInsurance),
            "comprehensive-insurance" => Ok(Self::ComprehensiveInsurance),
            "periodic-inspection" => Ok(Self::PeriodicInspection),
            "emission-test" => Ok(Self::EmissionTest),
            "meter-calibration" => Ok(Self::MeterCalibration),
            "tachograph-calibration" => Ok(Self::TachographCalibration),
            "activity-license" => Ok(Self::ActivityLicense),
            "operating-license" => Ok(Self::OperatingLicense),
            "hose-pressure-test" => Ok(Self::HosePressureTest),
            "tank-inspection-certificate" => Ok(Self::TankInspectionCertificate),
            "tax-plate" => Ok(Self::TaxPlate),
            "identity-card" => Ok(Self::IdentityCard),
            "driver-license" => Ok(Self::DriverLicense),
            "psychometric-test" => Ok(Self::PsychometricTest),
            "criminal-record" => Ok(Self::CriminalRecord),
            "employment-start-notice" => Ok(Self::EmploymentStartNotice),
            "residence-certificate" => Ok(Self::ResidenceCertificate),
            "ppe-assignment" => Ok(Self::PpeAssignment),
            "health-exam" => Ok(Self::HealthExam),
            "ohs-training-certificate" => Ok(Self::OhsTrainingCertificate),
            "fire-safety-training-certificate" => Ok(Self::FireSafetyTrainingCertificate),
            other => Err(CoreError::UnknownDocumentType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_counts() {
        assert_eq!(VEHICLE_CATALOG.len(), VEHICLE_DOCUMENT_COUNT);
        assert_eq!(DRIVER_CATALOG.len(), DRIVER_DOCUMENT_COUNT);
    }

    #[test]
    fn test_catalogs_are_disjoint() {
        let vehicle: HashSet<_> = VEHICLE_CATALOG.iter().collect();
        for doc in &DRIVER_CATALOG {
            assert!(!vehicle.contains(doc), "catalog overlap: {doc}");
        }
    }

    #[test]
    fn test_catalog_entries_unique() {
        let mut seen = HashSet::new();
        for doc in VEHICLE_CATALOG.iter().chain(DRIVER_CATALOG.iter()) {
            assert!(seen.insert(doc), "duplicate catalog entry: {doc}");
        }
        assert_eq!(seen.len(), VEHICLE_DOCUMENT_COUNT + DRIVER_DOCUMENT_COUNT);
    }

    #[test]
    fn test_catalog_kinds_match() {
        for doc in &VEHICLE_CATALOG {
            assert_eq!(doc.holder_kind(), HolderKind::Vehicle);
        }
        for doc in &DRIVER_CATALOG {
            assert_eq!(doc.holder_kind(), HolderKind::Driver);
        }
    }

    #[test]
    fn test_kind_catalog_accessor() {
        assert_eq!(HolderKind::Vehicle.catalog(), &VEHICLE_CATALOG);
        assert_eq!(HolderKind::Driver.catalog(), &DRIVER_CATALOG);
    }

    #[test]
    fn test_from_str_roundtrip() {
        for doc in VEHICLE_CATALOG.iter().chain(DRIVER_CATALOG.iter()) {
            let parsed: DocumentType = doc.as_str().parse().unwrap();
            assert_eq!(parsed, *doc);
        }
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("parking-permit".parse::<DocumentType>().is_err());
        assert!("".parse::<DocumentType>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&DocumentType::AdrT9).unwrap();
        assert_eq!(json, "\"adr-t9\"");
        let json = serde_json::to_string(&DocumentType::TachographCalibration).unwrap();
        assert_eq!(json, "\"tachograph-calibration\"");
    }

    #[test]
    fn test_labels_nonempty() {
        for doc in VEHICLE_CATALOG.iter().chain(DRIVER_CATALOG.iter()) {
            assert!(!doc.label().is_empty());
        }
    }
}
