//! # The Document Holder Capability
//!
//! Anything that owns a document checklist (truck, trailer, driver)
//! implements `DocumentHolder`. The expiry evaluator and every listing
//! surface work against this trait instead of the concrete holder types,
//! so cross-cutting reads need no knowledge of the store's internals.

use crate::catalog::{DocumentType, HolderKind};
use crate::slot::DocumentSlot;

/// An entity owning a fixed catalog of document slots.
///
/// Implementations guarantee that [`slots()`](Self::slots) contains
/// exactly one slot per entry of the kind's catalog, in catalog order.
pub trait DocumentHolder {
    /// Which checklist this holder carries.
    fn kind(&self) -> HolderKind;

    /// Display name for alerts and listings: a plate number or a person's
    /// name.
    fn display_name(&self) -> String;

    /// The holder's slot list, in catalog order.
    fn slots(&self) -> &[DocumentSlot];

    /// Look up the slot tracking `document_type`, if it belongs to this
    /// holder's catalog.
    fn slot(&self, document_type: DocumentType) -> Option<&DocumentSlot> {
        self.slots()
            .iter()
            .find(|s| s.document_type == document_type)
    }
}
