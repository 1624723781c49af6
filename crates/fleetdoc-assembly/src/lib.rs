//! # fleetdoc-assembly: The Delivery Package Gateway
//!
//! Turns a user's document selection into the ordered list of labeled
//! file contents an external merge collaborator combines into one
//! delivery document. The gateway reads committed store state only and
//! its contract ends at the ordered part list: the binary merge itself
//! (PDF page copying, image embedding) lives behind [`DocumentMerger`].
//!
//! Selections resolving to empty slots are dropped, not errors: the
//! common flow is "select everything, deliver what exists". Only a
//! selection that filters down to nothing fails.

use std::sync::Arc;

use thiserror::Error;

use fleetdoc_core::{DocumentType, HolderRef};
use fleetdoc_store::FleetStore;

/// One `(holder, document type)` pick from a delivery checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentSelection {
    /// The holder whose slot is selected.
    pub holder: HolderRef,
    /// The selected document type.
    pub document_type: DocumentType,
}

/// One resolved document, ready for merging.
#[derive(Debug, Clone)]
pub struct AssemblyPart {
    /// Display label, used for cover sheets and bookmarks.
    pub label: String,
    /// Original upload file name.
    pub file_name: String,
    /// The file content.
    pub content: Arc<[u8]>,
}

/// The ordered merge input plus a suggested output filename.
#[derive(Debug, Clone)]
pub struct AssemblyRequest {
    /// Resolved parts, in selection order.
    pub parts: Vec<AssemblyPart>,
    /// Output name derived from the involved holders, e.g.
    /// `34-DEMO-001_34-DEMO-901_documents.pdf`.
    pub suggested_file_name: String,
}

/// Errors from the assembly gateway.
#[derive(Error, Debug)]
pub enum AssemblyError {
    /// Every selection resolved to an empty or unavailable slot.
    #[error("no selected document resolved to an uploaded file")]
    EmptySelection,

    /// The external merge collaborator failed.
    #[error(transparent)]
    Merge(#[from] MergeError),
}

/// Failure reported by the external merge collaborator.
#[derive(Error, Debug)]
#[error("merge failed: {0}")]
pub struct MergeError(pub String);

/// The external collaborator that combines assembled parts into one
/// output document.
///
/// Implementations receive the parts in order and report plain
/// success or failure; the gateway assumes no partial progress.
pub trait DocumentMerger {
    /// Merge the parts into a single output document.
    fn merge(&self, parts: &[AssemblyPart]) -> Result<Vec<u8>, MergeError>;
}

/// Resolve `selections` against committed store state.
///
/// Selections whose slot is empty, whose holder is gone, or whose
/// content is not loaded (metadata-only rehydration) are dropped with a
/// log line.
///
/// # Errors
///
/// [`AssemblyError::EmptySelection`] if nothing survives the filter.
pub fn assemble(
    store: &FleetStore,
    selections: &[DocumentSelection],
) -> Result<AssemblyRequest, AssemblyError> {
    let mut parts = Vec::new();
    let mut holder_names: Vec<String> = Vec::new();
    for selection in selections {
        let Some(slot) = store.slot(selection.holder, selection.document_type) else {
            tracing::debug!(
                holder = %selection.holder,
                document_type = %selection.document_type,
                "selection does not resolve to a slot, dropped"
            );
            continue;
        };
        let Some(attachment) = &slot.file else {
            tracing::debug!(
                holder = %selection.holder,
                document_type = %selection.document_type,
                "selection resolves to an empty slot, dropped"
            );
            continue;
        };
        let Some(content) = store.content(&attachment.handle) else {
            tracing::warn!(
                holder = %selection.holder,
                document_type = %selection.document_type,
                "file content not loaded, dropped from assembly"
            );
            continue;
        };
        if let Some(name) = store.holder_name(selection.holder) {
            if !holder_names.contains(&name) {
                holder_names.push(name);
            }
        }
        parts.push(AssemblyPart {
            label: slot.label.clone(),
            file_name: attachment.file_name.clone(),
            content,
        });
    }
    if parts.is_empty() {
        return Err(AssemblyError::EmptySelection);
    }
    Ok(AssemblyRequest {
        suggested_file_name: suggested_file_name(&holder_names),
        parts,
    })
}

/// Assemble and hand the parts to the merge collaborator in one step.
///
/// # Errors
///
/// Propagates [`AssemblyError::EmptySelection`] from resolution and
/// wraps collaborator failures as [`AssemblyError::Merge`].
pub fn merge_with<M: DocumentMerger>(
    store: &FleetStore,
    selections: &[DocumentSelection],
    merger: &M,
) -> Result<Vec<u8>, AssemblyError> {
    let request = assemble(store, selections)?;
    Ok(merger.merge(&request.parts)?)
}

/// Join the distinguishing identifiers of the involved holders with
/// underscores, whitespace folded, plus the fixed suffix.
fn suggested_file_name(holder_names: &[String]) -> String {
    let mut name = holder_names
        .iter()
        .map(|n| n.split_whitespace().collect::<Vec<_>>().join("-"))
        .collect::<Vec<_>>()
        .join("_");
    name.push_str("_documents.pdf");
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleetdoc_core::{NationalId, OwnershipCategory};

    /// Test double: concatenates part contents.
    struct ConcatMerger;

    impl DocumentMerger for ConcatMerger {
        fn merge(&self, parts: &[AssemblyPart]) -> Result<Vec<u8>, MergeError> {
            Ok(parts.iter().flat_map(|p| p.content.iter().copied()).collect())
        }
    }

    /// Test double: always fails.
    struct BrokenMerger;

    impl DocumentMerger for BrokenMerger {
        fn merge(&self, _parts: &[AssemblyPart]) -> Result<Vec<u8>, MergeError> {
            Err(MergeError("corrupt page tree".to_string()))
        }
    }

    fn rig_store() -> (FleetStore, HolderRef, HolderRef) {
        let mut store = FleetStore::new();
        let truck = store
            .add_truck("34 DEMO 001", OwnershipCategory::Asmira)
            .unwrap();
        let trailer = store
            .add_trailer("34 DEMO 901", OwnershipCategory::Asmira)
            .unwrap();
        (store, HolderRef::Truck(truck), HolderRef::Trailer(trailer))
    }

    fn select(holder: HolderRef, document_type: DocumentType) -> DocumentSelection {
        DocumentSelection {
            holder,
            document_type,
        }
    }

    #[test]
    fn test_empty_selections_dropped_not_errored() {
        let (mut store, truck, _) = rig_store();
        store.upload_document(truck, DocumentType::Registration, "reg.pdf", b"reg".to_vec());

        let request = assemble(
            &store,
            &[
                select(truck, DocumentType::Registration),
                select(truck, DocumentType::TachographCalibration),
            ],
        )
        .unwrap();
        assert_eq!(request.parts.len(), 1);
        assert_eq!(request.parts[0].label, "Vehicle registration");
        assert_eq!(request.parts[0].file_name, "reg.pdf");
    }

    #[test]
    fn test_all_empty_fails() {
        let (store, truck, _) = rig_store();
        let result = assemble(&store, &[select(truck, DocumentType::Registration)]);
        assert!(matches!(result, Err(AssemblyError::EmptySelection)));
    }

    #[test]
    fn test_parts_keep_selection_order() {
        let (mut store, truck, trailer) = rig_store();
        store.upload_document(truck, DocumentType::Registration, "reg.pdf", b"A".to_vec());
        store.upload_document(trailer, DocumentType::TaxPlate, "tax.pdf", b"B".to_vec());

        let request = assemble(
            &store,
            &[
                select(trailer, DocumentType::TaxPlate),
                select(truck, DocumentType::Registration),
            ],
        )
        .unwrap();
        let labels: Vec<&str> = request.parts.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Tax plate", "Vehicle registration"]);
    }

    #[test]
    fn test_suggested_name_joins_involved_holders() {
        let (mut store, truck, trailer) = rig_store();
        store.upload_document(truck, DocumentType::Registration, "reg.pdf", b"A".to_vec());
        store.upload_document(trailer, DocumentType::TaxPlate, "tax.pdf", b"B".to_vec());

        let request = assemble(
            &store,
            &[
                select(truck, DocumentType::Registration),
                select(trailer, DocumentType::TaxPlate),
            ],
        )
        .unwrap();
        assert_eq!(
            request.suggested_file_name,
            "34-DEMO-001_34-DEMO-901_documents.pdf"
        );
    }

    #[test]
    fn test_driver_selection_uses_name() {
        let mut store = FleetStore::new();
        let driver = store
            .add_driver("Ali Kaya", NationalId("12345678901".into()), "+90 555")
            .unwrap();
        let holder = HolderRef::Driver(driver);
        store.upload_document(holder, DocumentType::DriverLicense, "dl.pdf", b"dl".to_vec());

        let request = assemble(&store, &[select(holder, DocumentType::DriverLicense)]).unwrap();
        assert_eq!(request.suggested_file_name, "Ali-Kaya_documents.pdf");
    }

    #[test]
    fn test_unloaded_content_dropped() {
        let (mut store, truck, _) = rig_store();
        store.upload_document(truck, DocumentType::Registration, "reg.pdf", b"reg".to_vec());
        let rehydrated =
            FleetStore::from_snapshot_json(&store.snapshot_json().unwrap()).unwrap();

        // Metadata survived the snapshot, the bytes did not.
        let result = assemble(&rehydrated, &[select(truck, DocumentType::Registration)]);
        assert!(matches!(result, Err(AssemblyError::EmptySelection)));
    }

    #[test]
    fn test_merge_with_concatenates_in_order() {
        let (mut store, truck, _) = rig_store();
        store.upload_document(truck, DocumentType::Registration, "reg.pdf", b"AB".to_vec());
        store.upload_document(truck, DocumentType::TaxPlate, "tax.pdf", b"CD".to_vec());

        let merged = merge_with(
            &store,
            &[
                select(truck, DocumentType::Registration),
                select(truck, DocumentType::TaxPlate),
            ],
            &ConcatMerger,
        )
        .unwrap();
        assert_eq!(merged, b"ABCD");
    }

    #[test]
    fn test_merge_failure_propagates() {
        let (mut store, truck, _) = rig_store();
        store.upload_document(truck, DocumentType::Registration, "reg.pdf", b"A".to_vec());

        let result = merge_with(
            &store,
            &[select(truck, DocumentType::Registration)],
            &BrokenMerger,
        );
        assert!(matches!(result, Err(AssemblyError::Merge(_))));
    }
}
