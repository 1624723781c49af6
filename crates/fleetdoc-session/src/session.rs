//! # Edit Sessions
//!
//! The staging buffer between a document panel and the fleet store.

use std::sync::Arc;

use thiserror::Error;

use fleetdoc_core::{DocumentSlot, DocumentType, ExpiryDate, FileAttachment, FileHandle, HolderRef, TrailerId, TruckId};
use fleetdoc_store::{FleetStore, SlotPatch};

/// What one editing session is allowed to touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditScope {
    /// A single holder's panel.
    Holder(HolderRef),
    /// A rig panel editing a vehicle set's truck and trailer together.
    Rig {
        /// The rig's truck.
        truck: TruckId,
        /// The rig's trailer.
        trailer: TrailerId,
    },
}

impl EditScope {
    /// Whether `target` is editable within this scope.
    pub fn contains(&self, target: HolderRef) -> bool {
        match self {
            Self::Holder(holder) => *holder == target,
            Self::Rig { truck, trailer } => {
                target == HolderRef::Truck(*truck) || target == HolderRef::Trailer(*trailer)
            }
        }
    }
}

#[derive(Debug, Clone)]
struct StagedUpload {
    target: HolderRef,
    document_type: DocumentType,
    file_name: String,
    bytes: Arc<[u8]>,
}

#[derive(Debug, Clone)]
struct StagedExpiry {
    target: HolderRef,
    document_type: DocumentType,
    expiry: Option<ExpiryDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct StagedDeletion {
    target: HolderRef,
    document_type: DocumentType,
}

/// Attempted to close a session that still has staged changes.
///
/// Not a failure in the store's sense but a confirmation gate: the
/// session is handed back so the caller can commit it or discard it
/// explicitly. Silently dropping staged work is the exact accident this
/// layer exists to prevent.
#[derive(Error, Debug)]
#[error("session has pending changes; commit or discard before closing")]
pub struct UnsavedChanges(pub EditSession);

/// A per-interaction buffer of uncommitted document edits.
///
/// Reads overlay the store without mutating it; [`commit`](Self::commit)
/// writes all staged changes through in one pass; [`discard`](Self::discard)
/// abandons them.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    scope: Option<EditScope>,
    uploads: Vec<StagedUpload>,
    expiry_edits: Vec<StagedExpiry>,
    deletions: Vec<StagedDeletion>,
}

impl EditSession {
    /// Open a session over the given scope with empty ledgers.
    pub fn begin(scope: EditScope) -> Self {
        Self {
            scope: Some(scope),
            ..Self::default()
        }
    }

    /// The scope this session was opened over.
    pub fn scope(&self) -> Option<EditScope> {
        self.scope
    }

    /// Stage an upload for `(target, document_type)`, replacing any
    /// pending upload for the same key and cancelling any pending
    /// deletion for it. The store is not touched.
    pub fn stage_upload(
        &mut self,
        target: HolderRef,
        document_type: DocumentType,
        file_name: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) {
        if !self.in_scope(target) {
            return;
        }
        self.deletions
            .retain(|d| !(d.target == target && d.document_type == document_type));
        let staged = StagedUpload {
            target,
            document_type,
            file_name: file_name.into(),
            bytes: bytes.into(),
        };
        match self
            .uploads
            .iter_mut()
            .find(|u| u.target == target && u.document_type == document_type)
        {
            Some(existing) => *existing = staged,
            None => self.uploads.push(staged),
        }
    }

    /// Stage an expiry date change for `(target, document_type)`,
    /// replacing any pending expiry edit for the same key. `None` stages
    /// clearing the date. Independent of the upload and deletion ledgers.
    pub fn stage_expiry(
        &mut self,
        target: HolderRef,
        document_type: DocumentType,
        expiry: Option<ExpiryDate>,
    ) {
        if !self.in_scope(target) {
            return;
        }
        let staged = StagedExpiry {
            target,
            document_type,
            expiry,
        };
        match self
            .expiry_edits
            .iter_mut()
            .find(|e| e.target == target && e.document_type == document_type)
        {
            Some(existing) => *existing = staged,
            None => self.expiry_edits.push(staged),
        }
    }

    /// Stage a deletion for `(target, document_type)`, cancelling any
    /// pending upload for the same key.
    pub fn stage_deletion(&mut self, target: HolderRef, document_type: DocumentType) {
        if !self.in_scope(target) {
            return;
        }
        self.uploads
            .retain(|u| !(u.target == target && u.document_type == document_type));
        let staged = StagedDeletion {
            target,
            document_type,
        };
        if !self.deletions.contains(&staged) {
            self.deletions.push(staged);
        }
    }

    /// The slot as the user should see it right now: committed state with
    /// the staged ledgers overlaid. Never mutates the store.
    ///
    /// A staged deletion shows the slot empty regardless of the committed
    /// value; otherwise a staged upload overrides the committed
    /// attachment. The expiry shown is the staged edit if one exists,
    /// else the committed date.
    ///
    /// Returns `None` when the store has no such slot (deleted holder or
    /// foreign document type).
    pub fn effective_slot(
        &self,
        store: &FleetStore,
        target: HolderRef,
        document_type: DocumentType,
    ) -> Option<DocumentSlot> {
        let mut slot = store.slot(target, document_type)?.clone();
        if self
            .deletions
            .iter()
            .any(|d| d.target == target && d.document_type == document_type)
        {
            slot.file = None;
        } else if let Some(upload) = self
            .uploads
            .iter()
            .find(|u| u.target == target && u.document_type == document_type)
        {
            slot.file = Some(FileAttachment {
                file_name: upload.file_name.clone(),
                handle: FileHandle::for_content(&upload.bytes),
            });
        }
        if let Some(edit) = self
            .expiry_edits
            .iter()
            .find(|e| e.target == target && e.document_type == document_type)
        {
            slot.expiry_date = edit.expiry;
        }
        Some(slot)
    }

    /// Whether any ledger holds a staged change.
    pub fn has_pending_changes(&self) -> bool {
        !self.uploads.is_empty() || !self.expiry_edits.is_empty() || !self.deletions.is_empty()
    }

    /// Write every staged change through to the store, then clear the
    /// ledgers: all deletions, then all uploads, then all expiry edits.
    ///
    /// Committing an empty session changes nothing, so a second commit
    /// without new staging is a no-op.
    pub fn commit(&mut self, store: &mut FleetStore) {
        let applied =
            self.deletions.len() + self.uploads.len() + self.expiry_edits.len();
        for deletion in self.deletions.drain(..) {
            store.delete_document(deletion.target, deletion.document_type);
        }
        for upload in self.uploads.drain(..) {
            store.upload_document(
                upload.target,
                upload.document_type,
                &upload.file_name,
                upload.bytes.to_vec(),
            );
        }
        for edit in self.expiry_edits.drain(..) {
            store.update_document(
                edit.target,
                edit.document_type,
                SlotPatch {
                    expiry_date: Some(edit.expiry),
                    file_name: None,
                },
            );
        }
        if applied > 0 {
            tracing::debug!(applied, "session committed");
        }
    }

    /// Clear all ledgers without touching the store.
    pub fn discard(&mut self) {
        self.uploads.clear();
        self.expiry_edits.clear();
        self.deletions.clear();
    }

    /// Close the session.
    ///
    /// # Errors
    ///
    /// Refuses while staged changes exist, handing the session back
    /// inside [`UnsavedChanges`] so the caller can commit or discard.
    pub fn close(self) -> Result<(), UnsavedChanges> {
        if self.has_pending_changes() {
            return Err(UnsavedChanges(self));
        }
        Ok(())
    }

    fn in_scope(&self, target: HolderRef) -> bool {
        match self.scope {
            Some(scope) if scope.contains(target) => true,
            Some(_) => {
                tracing::warn!(%target, "staged edit outside session scope ignored");
                false
            }
            // A scopeless session is only constructible via Default; treat
            // it as unrestricted.
            None => true,
        }
    }
}
