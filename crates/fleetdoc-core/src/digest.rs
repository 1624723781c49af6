//! # Content Digests and File Handles
//!
//! Uploaded file content is identified by its SHA-256 digest. A slot's
//! `FileHandle` is such a digest: an opaque reference that resolves to the
//! actual bytes through the blob store, and the only part of an upload
//! that survives a metadata snapshot. Identical content uploaded twice
//! resolves to the same handle.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// A SHA-256 digest over raw file content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentDigest(pub [u8; 32]);

impl ContentDigest {
    /// Compute the digest of a byte slice.
    pub fn compute(bytes: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        Self(hasher.finalize().into())
    }

    /// Render the digest as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.0.iter().map(|b| format!("{b:02x}")).collect()
    }
}

impl std::fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "sha256:{}", self.to_hex())
    }
}

/// An opaque reference to uploaded file content.
///
/// Handles are cheap to copy and compare; the bytes live in the blob
/// store. A handle in a rehydrated snapshot may point at content the
/// blob store no longer holds, in which case consumers must treat the
/// content as unavailable rather than fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileHandle(pub ContentDigest);

impl FileHandle {
    /// The handle for the given content.
    pub fn for_content(bytes: &[u8]) -> Self {
        Self(ContentDigest::compute(bytes))
    }

    /// Access the underlying content digest.
    pub fn digest(&self) -> &ContentDigest {
        &self.0
    }
}

impl std::fmt::Display for FileHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_content_same_digest() {
        assert_eq!(
            ContentDigest::compute(b"scan of registration"),
            ContentDigest::compute(b"scan of registration"),
        );
    }

    #[test]
    fn test_different_content_different_digest() {
        assert_ne!(
            ContentDigest::compute(b"front page"),
            ContentDigest::compute(b"back page"),
        );
    }

    #[test]
    fn test_known_vector() {
        // SHA-256 of the empty string.
        let digest = ContentDigest::compute(b"");
        assert_eq!(
            digest.to_hex(),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855",
        );
    }

    #[test]
    fn test_display_prefix() {
        let digest = ContentDigest::compute(b"x");
        assert!(digest.to_string().starts_with("sha256:"));
        assert_eq!(digest.to_string().len(), "sha256:".len() + 64);
    }

    #[test]
    fn test_handle_matches_digest() {
        let handle = FileHandle::for_content(b"policy.pdf bytes");
        assert_eq!(handle.digest(), &ContentDigest::compute(b"policy.pdf bytes"));
    }
}
