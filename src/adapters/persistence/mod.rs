//! Persistence Adapters - Local File and Remote Worksheet
//!
//! Implements the `RowStore` port with the two interchangeable
//! backends: an atomic CSV file on local disk, and a spreadsheet
//! worksheet behind an HTTP values API. The `Backend` enum is the
//! closed set of variants, selected from configuration at startup.

pub mod local;
pub mod sheet;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::config::{AppConfig, BackendKind};
use crate::ports::row_store::{RawRow, RowStore};

pub use local::LocalFileStore;
pub use sheet::{SheetStore, SheetStoreConfig};

/// The active persistence backend.
///
/// A closed set of two variants behind one capability interface;
/// the variant is picked explicitly from config, not discovered.
pub enum Backend {
    /// Delimited file on local disk.
    Local(LocalFileStore),
    /// Remote spreadsheet worksheet.
    Sheet(SheetStore),
}

impl Backend {
    /// Build the backend selected by the configuration.
    ///
    /// # Errors
    /// Fails when the local data directory can't be created or the
    /// sheet section is missing for the sheet variant (the loader
    /// validates the latter up front).
    pub async fn from_config(config: &AppConfig) -> Result<Self> {
        match config.store.backend {
            BackendKind::Local => {
                let store = LocalFileStore::new(config.local.path.as_str()).await?;
                info!(path = %config.local.path, "Local file backend selected");
                Ok(Self::Local(store))
            }
            BackendKind::Sheet => {
                let sheet = config
                    .sheet
                    .as_ref()
                    .ok_or_else(|| anyhow::anyhow!("[sheet] section missing"))?;
                let store = SheetStore::new(SheetStoreConfig {
                    base_url: sheet.base_url.clone(),
                    worksheet: sheet.worksheet.clone(),
                    api_token: sheet.api_token.clone(),
                    cache_ttl: Duration::from_secs(sheet.cache_ttl_seconds),
                    timeout: Duration::from_secs(sheet.timeout_seconds),
                })?;
                info!(worksheet = %sheet.worksheet, "Worksheet backend selected");
                Ok(Self::Sheet(store))
            }
        }
    }
}

#[async_trait]
impl RowStore for Backend {
    async fn read_rows(&self) -> Result<Vec<RawRow>> {
        match self {
            Self::Local(store) => store.read_rows().await,
            Self::Sheet(store) => store.read_rows().await,
        }
    }

    async fn write_rows(&self, rows: &[RawRow]) -> Result<()> {
        match self {
            Self::Local(store) => store.write_rows(rows).await,
            Self::Sheet(store) => store.write_rows(rows).await,
        }
    }

    async fn is_healthy(&self) -> bool {
        match self {
            Self::Local(store) => store.is_healthy().await,
            Self::Sheet(store) => store.is_healthy().await,
        }
    }
}
