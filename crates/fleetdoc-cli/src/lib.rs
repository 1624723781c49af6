//! # fleetdoc-cli: Fleet Document Stack Command-Line Interface
//!
//! Operates the document stack from a terminal against a fleet registry
//! file, the human-edited YAML (or JSON) seed describing holders, their
//! documents, and rigs.
//!
//! ## Subcommands
//!
//! - `catalog`: print the fixed vehicle and driver document checklists
//! - `alerts`: print the expiry alert feed for a fleet registry
//! - `sets`: print the registered rigs joined to their trucks and trailers
//! - `assemble`: plan a delivery package for one holder's documents
//!
//! ## Crate Policy
//!
//! - CLI construction (argument parsing) is separated from business logic.
//! - Handler functions delegate to the domain crates; no store or
//!   evaluation logic lives here.

pub mod alerts;
pub mod assemble;
pub mod catalog;
pub mod registry;
pub mod sets;
