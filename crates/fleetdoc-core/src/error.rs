//! # Core Error Types
//!
//! Parse and validation failures for the foundational types. All errors
//! use `thiserror` for derive-based `Display` and `Error` implementations.
//! Store-level and gateway-level errors live in their own crates; this
//! enum only covers what can go wrong while constructing core values.

use thiserror::Error;

/// Errors from parsing or validating core domain values.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A date string was not in `YYYY-MM-DD` form or named an impossible date.
    #[error("invalid expiry date {0}")]
    InvalidDate(String),

    /// A document type identifier did not match either catalog.
    #[error("unknown document type: {0:?}")]
    UnknownDocumentType(String),

    /// An ownership category identifier was not recognized.
    #[error("unknown ownership category: {0:?}")]
    UnknownCategory(String),
}
