//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! external dependencies (file I/O, HTTP).
//!
//! Adapter categories:
//! - `persistence`: local CSV file and remote worksheet backends

pub mod persistence;
