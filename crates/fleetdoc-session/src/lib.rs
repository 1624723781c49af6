//! # fleetdoc-session: Staged Document Edits
//!
//! One editing interaction on a document panel accumulates several
//! changes: a new scan here, a corrected expiry date there, a stale
//! upload removed. Nothing touches the [`FleetStore`] until the user
//! confirms; everything lands together or not at all.
//!
//! [`EditSession`] is that buffer, implemented once and reused by every
//! document-editing surface: truck panels, trailer panels, driver panels,
//! and the combined rig panel editing a vehicle set's truck and trailer
//! side by side.
//!
//! ## Ledger rules
//!
//! Three ledgers, keyed by `(target, document type)`:
//!
//! - staging an upload removes any pending deletion for the same key;
//! - staging a deletion removes any pending upload for the same key;
//! - expiry edits are independent of both.
//!
//! Because upload and deletion are mutually exclusive per key, the fixed
//! commit order (deletions, then uploads, then expiry edits) applies each
//! key's net change exactly once.
//!
//! [`FleetStore`]: fleetdoc_store::FleetStore

mod session;

pub use session::{EditScope, EditSession, UnsavedChanges};
