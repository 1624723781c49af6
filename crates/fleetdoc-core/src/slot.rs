//! # Document Slots
//!
//! One slot per catalog entry per holder: the unit of everything this
//! stack tracks. A slot is Empty or Filled, with the expiry date as an
//! orthogonal attribute available in either state.
//!
//! ## Invariants
//!
//! - File name and file handle exist together or not at all. Both live in
//!   `FileAttachment` behind one `Option`, so the invariant cannot be
//!   violated from outside.
//! - An expiry date may be set while the slot is empty. Operators record
//!   the date of an expected document before its scan arrives; the expiry
//!   evaluator only reports filled slots.

use serde::{Deserialize, Serialize};

use crate::catalog::DocumentType;
use crate::digest::FileHandle;
use crate::temporal::ExpiryDate;

/// The uploaded file of a filled slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    /// Display name of the uploaded file, e.g. `traffic-policy-2026.pdf`.
    pub file_name: String,
    /// Opaque reference resolving to the file content in the blob store.
    pub handle: FileHandle,
}

/// One document-type position within a holder's checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentSlot {
    /// The document type this slot tracks.
    pub document_type: DocumentType,
    /// Display label, fixed at slot creation from the document type.
    pub label: String,
    /// The uploaded file, if any. `None` means the slot is empty.
    pub file: Option<FileAttachment>,
    /// Expiry date of the document, independent of upload state.
    pub expiry_date: Option<ExpiryDate>,
}

impl DocumentSlot {
    /// Create an empty slot for the given document type.
    pub fn empty(document_type: DocumentType) -> Self {
        Self {
            document_type,
            label: document_type.label().to_string(),
            file: None,
            expiry_date: None,
        }
    }

    /// Whether a file has been uploaded into this slot.
    pub fn is_filled(&self) -> bool {
        self.file.is_some()
    }

    /// Whether this slot is empty (no uploaded file).
    pub fn is_empty(&self) -> bool {
        self.file.is_none()
    }

    /// Reset the slot to its default empty state, clearing the expiry date.
    pub fn clear(&mut self) {
        self.file = None;
        self.expiry_date = None;
    }
}

/// Build the default slot list for a catalog: one empty slot per entry,
/// in catalog order.
///
/// Pure and infallible. Every holder's slot list is created through this
/// function, which is what guarantees the one-slot-per-catalog-entry
/// shape.
pub fn default_slots(catalog: &[DocumentType]) -> Vec<DocumentSlot> {
    catalog.iter().copied().map(DocumentSlot::empty).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DRIVER_CATALOG, VEHICLE_CATALOG};
    use proptest::prelude::*;

    #[test]
    fn test_default_slots_cover_catalog_in_order() {
        let slots = default_slots(&VEHICLE_CATALOG);
        assert_eq!(slots.len(), VEHICLE_CATALOG.len());
        for (slot, doc) in slots.iter().zip(VEHICLE_CATALOG.iter()) {
            assert_eq!(slot.document_type, *doc);
            assert_eq!(slot.label, doc.label());
            assert!(slot.is_empty());
            assert!(slot.expiry_date.is_none());
        }
    }

    #[test]
    fn test_empty_slot_state() {
        let slot = DocumentSlot::empty(DocumentType::Registration);
        assert!(slot.is_empty());
        assert!(!slot.is_filled());
    }

    #[test]
    fn test_clear_resets_file_and_expiry() {
        let mut slot = DocumentSlot::empty(DocumentType::HealthExam);
        slot.file = Some(FileAttachment {
            file_name: "exam.pdf".to_string(),
            handle: crate::digest::FileHandle::for_content(b"exam"),
        });
        slot.expiry_date = Some(crate::temporal::ExpiryDate::parse("2026-06-01").unwrap());
        slot.clear();
        assert!(slot.is_empty());
        assert!(slot.expiry_date.is_none());
    }

    #[test]
    fn test_expiry_settable_on_empty_slot() {
        // Tolerated on purpose: the date of an expected document can be
        // recorded before its scan is uploaded.
        let mut slot = DocumentSlot::empty(DocumentType::TrafficInsurance);
        slot.expiry_date = Some(crate::temporal::ExpiryDate::parse("2026-09-30").unwrap());
        assert!(slot.is_empty());
        assert!(slot.expiry_date.is_some());
    }

    #[test]
    fn test_slot_serde_roundtrip() {
        let slot = DocumentSlot::empty(DocumentType::AdrT9);
        let json = serde_json::to_string(&slot).unwrap();
        let parsed: DocumentSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, slot);
    }

    proptest! {
        // Any prefix of either catalog yields one slot per entry, in
        // order, with no duplicate document types.
        #[test]
        fn prop_default_slots_shape(len in 0usize..=VEHICLE_CATALOG.len(), driver in proptest::bool::ANY) {
            let catalog: &[DocumentType] = if driver {
                &DRIVER_CATALOG[..len.min(DRIVER_CATALOG.len())]
            } else {
                &VEHICLE_CATALOG[..len]
            };
            let slots = default_slots(catalog);
            prop_assert_eq!(slots.len(), catalog.len());
            let mut seen = std::collections::HashSet::new();
            for (slot, doc) in slots.iter().zip(catalog.iter()) {
                prop_assert_eq!(slot.document_type, *doc);
                prop_assert!(slot.is_empty());
                prop_assert!(seen.insert(slot.document_type));
            }
        }
    }
}
