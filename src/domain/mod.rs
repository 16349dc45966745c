//! Domain layer - data model and consistency rules.
//!
//! Pure in-memory logic for the two Fear & Greed daily series.
//! No I/O here (hexagonal architecture inner ring); everything is
//! testable in isolation.

pub mod entry;
pub mod error;
pub mod table;

// Re-export core types for convenience
pub use entry::{Entry, DATE_FORMAT, INDEX_MAX, INDEX_MIN};
pub use error::StoreError;
pub use table::{ChangeSet, Table};
