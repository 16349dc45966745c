//! FG Index Board — Library Root
//!
//! Manual data-entry core for two parallel daily series: the CNN and
//! Crypto Fear & Greed indices. Owns the in-memory table and its
//! consistency rules, persists wholesale to a local CSV file or a
//! remote worksheet, and renders CSV download snapshots. The entry
//! form and edit grid live in the host UI and drive this crate
//! through `usecases::RecordStore`.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod logging;
pub mod ports;
pub mod usecases;
