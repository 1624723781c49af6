//! # Content-Addressed Blob Store
//!
//! In-memory home of uploaded file bytes, keyed by content digest.
//! Identical content uploaded into several slots is stored once and
//! reference-counted; a slot releasing its handle drops the bytes only
//! when no other slot still points at them.
//!
//! The blob store is deliberately excluded from persistence: snapshots
//! carry slot metadata (including digests) but never content. After
//! rehydration, [`BlobStore::get`] returns `None` for content that has
//! not been loaded again, and consumers treat that as "unavailable".

use std::collections::HashMap;
use std::sync::Arc;

use fleetdoc_core::{ContentDigest, FileHandle};

#[derive(Debug, Clone, PartialEq)]
struct BlobEntry {
    bytes: Arc<[u8]>,
    refs: usize,
}

/// Reference-counted, content-addressed storage for uploaded file bytes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlobStore {
    entries: HashMap<ContentDigest, BlobEntry>,
}

impl BlobStore {
    /// Create an empty blob store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store content and return its handle, taking one reference.
    ///
    /// Content already present is deduplicated; its reference count is
    /// incremented instead.
    pub fn insert(&mut self, bytes: Vec<u8>) -> FileHandle {
        let digest = ContentDigest::compute(&bytes);
        self.entries
            .entry(digest)
            .and_modify(|e| e.refs += 1)
            .or_insert_with(|| BlobEntry {
                bytes: Arc::from(bytes),
                refs: 1,
            });
        FileHandle(digest)
    }

    /// Resolve a handle to its content, if the bytes are loaded.
    pub fn get(&self, handle: &FileHandle) -> Option<Arc<[u8]>> {
        self.entries.get(handle.digest()).map(|e| Arc::clone(&e.bytes))
    }

    /// Whether content for the handle is currently loaded.
    pub fn contains(&self, handle: &FileHandle) -> bool {
        self.entries.contains_key(handle.digest())
    }

    /// Drop one reference to the handle's content, removing the bytes at
    /// zero references.
    ///
    /// Releasing a handle whose content is not loaded is tolerated: the
    /// slot may have been rehydrated from a metadata snapshot.
    pub fn release(&mut self, handle: &FileHandle) {
        match self.entries.get_mut(handle.digest()) {
            Some(entry) if entry.refs > 1 => entry.refs -= 1,
            Some(_) => {
                self.entries.remove(handle.digest());
            }
            None => {
                tracing::debug!(%handle, "released handle with no loaded content");
            }
        }
    }

    /// Number of distinct blobs currently loaded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no blobs are loaded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_then_get() {
        let mut blobs = BlobStore::new();
        let handle = blobs.insert(b"policy scan".to_vec());
        assert_eq!(blobs.get(&handle).unwrap().as_ref(), b"policy scan");
    }

    #[test]
    fn test_get_unknown_is_none() {
        let blobs = BlobStore::new();
        assert!(blobs.get(&FileHandle::for_content(b"missing")).is_none());
    }

    #[test]
    fn test_identical_content_dedups() {
        let mut blobs = BlobStore::new();
        let a = blobs.insert(b"same bytes".to_vec());
        let b = blobs.insert(b"same bytes".to_vec());
        assert_eq!(a, b);
        assert_eq!(blobs.len(), 1);
    }

    #[test]
    fn test_release_sole_reference_drops_content() {
        let mut blobs = BlobStore::new();
        let handle = blobs.insert(b"one owner".to_vec());
        blobs.release(&handle);
        assert!(blobs.get(&handle).is_none());
        assert!(blobs.is_empty());
    }

    #[test]
    fn test_release_shared_reference_keeps_content() {
        let mut blobs = BlobStore::new();
        let a = blobs.insert(b"shared".to_vec());
        let _b = blobs.insert(b"shared".to_vec());
        blobs.release(&a);
        assert!(blobs.contains(&a));
        blobs.release(&a);
        assert!(!blobs.contains(&a));
    }

    #[test]
    fn test_release_unknown_is_tolerated() {
        let mut blobs = BlobStore::new();
        blobs.release(&FileHandle::for_content(b"never stored"));
        assert!(blobs.is_empty());
    }
}
