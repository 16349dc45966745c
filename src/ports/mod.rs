//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interface the record store requires from the outside
//! world. The persistence adapters implement it.
//!
//! Port categories:
//! - `RowStore`: wholesale read/overwrite of the backing store

pub mod row_store;

pub use row_store::{RawRow, RowStore, HEADER};
