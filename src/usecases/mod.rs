//! Use Cases Layer - Application Business Logic
//!
//! Orchestrates the domain model with the persistence port to
//! implement the user-facing actions the external UI drives.
//!
//! Use cases:
//! - `RecordStore`: load / add / apply_edits / commit workflow
//! - `export`: CSV download snapshot of the current table

pub mod export;
pub mod record_store;

pub use record_store::RecordStore;
