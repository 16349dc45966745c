//! Sheet Store - Remote Worksheet Persistence
//!
//! Persists the table to a named worksheet behind a spreadsheet values
//! API (first three columns). Reads are served from a bounded
//! time-cached snapshot so a burst of renders doesn't hammer the API;
//! the cache lifetime governs staleness, not correctness. Writes
//! upload the full table first and only then trim stale trailing rows,
//! then drop the cache.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::ports::row_store::{strip_header_row, RawRow, RowStore, HEADER};

/// Configuration for the worksheet store.
#[derive(Debug, Clone)]
pub struct SheetStoreConfig {
    /// Base URL of the spreadsheet values API
    /// (e.g. `https://sheets.googleapis.com/v4/spreadsheets/<id>`).
    pub base_url: String,
    /// Worksheet (tab) name holding the table.
    pub worksheet: String,
    /// Bearer token for the API; empty for unauthenticated access.
    pub api_token: String,
    /// How long a read snapshot stays fresh.
    pub cache_ttl: Duration,
    /// Request timeout.
    pub timeout: Duration,
}

/// A cached read snapshot.
struct CachedSnapshot {
    rows: Vec<RawRow>,
    fetched_at: Instant,
}

/// Remote worksheet store with a bounded read cache.
pub struct SheetStore {
    /// Underlying HTTP client.
    http: Client,
    /// Store configuration.
    config: SheetStoreConfig,
    /// Last fetched snapshot, if still within TTL.
    cache: RwLock<Option<CachedSnapshot>>,
}

impl SheetStore {
    /// Create a new worksheet store.
    pub fn new(config: SheetStoreConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            config,
            cache: RwLock::new(None),
        })
    }

    fn values_url(&self, range: &str, suffix: &str) -> String {
        format!(
            "{}/values/{}!{}{}",
            self.config.base_url, self.config.worksheet, range, suffix
        )
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.config.api_token.is_empty() {
            request
        } else {
            request.bearer_auth(&self.config.api_token)
        }
    }

    /// Fetch the worksheet's first three columns from the API.
    async fn fetch_rows(&self) -> Result<Vec<RawRow>> {
        let response = self
            .authorize(self.http.get(self.values_url("A:C", "")))
            .send()
            .await
            .context("Worksheet read request failed")?;
        let response = ensure_success(response, "read").await?;

        let range: ValueRange = response
            .json()
            .await
            .context("Failed to parse worksheet response")?;

        Ok(rows_from_values(range.values))
    }
}

#[async_trait]
impl RowStore for SheetStore {
    /// Read all rows, serving a cached snapshot when fresh.
    #[instrument(skip(self))]
    async fn read_rows(&self) -> Result<Vec<RawRow>> {
        {
            let guard = self.cache.read().await;
            if let Some(cached) = guard.as_ref() {
                if cached.fetched_at.elapsed() < self.config.cache_ttl {
                    debug!(count = cached.rows.len(), "Serving worksheet snapshot from cache");
                    return Ok(cached.rows.clone());
                }
            }
        }

        let rows = self.fetch_rows().await?;
        info!(count = rows.len(), worksheet = %self.config.worksheet, "Worksheet snapshot fetched");

        let mut guard = self.cache.write().await;
        *guard = Some(CachedSnapshot {
            rows: rows.clone(),
            fetched_at: Instant::now(),
        });
        Ok(rows)
    }

    /// Overwrite the worksheet in full.
    ///
    /// Uploads header + rows at `A1` first, and only then clears the
    /// trailing range a shorter table leaves behind. A mid-write
    /// failure can therefore never leave the worksheet empty: the
    /// store holds either the old table or the new one, at worst with
    /// stale rows below it.
    #[instrument(skip(self, rows), fields(count = rows.len()))]
    async fn write_rows(&self, rows: &[RawRow]) -> Result<()> {
        let mut values: Vec<[&str; 3]> = Vec::with_capacity(rows.len() + 1);
        values.push(HEADER);
        values.extend(rows.iter().map(RawRow::cells));

        let url = self.values_url("A1", "?valueInputOption=RAW");
        let response = self
            .authorize(self.http.put(&url))
            .json(&json!({ "values": values }))
            .send()
            .await
            .context("Worksheet update request failed")?;
        ensure_success(response, "update").await?;

        // Header occupies row 1, data rows 2..=len+1
        let first_stale = rows.len() + 2;
        let response = self
            .authorize(self.http.post(self.values_url(&format!("A{first_stale}:C"), ":clear")))
            .send()
            .await
            .context("Worksheet clear request failed")?;
        ensure_success(response, "clear").await?;

        // Snapshot is stale now
        let mut guard = self.cache.write().await;
        *guard = None;

        info!(worksheet = %self.config.worksheet, "Worksheet saved");
        Ok(())
    }

    /// Check that the worksheet is reachable.
    async fn is_healthy(&self) -> bool {
        match self.authorize(self.http.get(self.values_url("A:C", ""))).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

/// Values API response body.
#[derive(Debug, Deserialize)]
struct ValueRange {
    /// Row-major cell values; omitted entirely for an empty range.
    #[serde(default)]
    values: Vec<Vec<String>>,
}

async fn ensure_success(response: Response, action: &str) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(anyhow::anyhow!("Worksheet {action} failed with {status}: {body}"))
}

/// Convert API cell values to raw rows, padding short rows and
/// skipping the header row when present.
fn rows_from_values(values: Vec<Vec<String>>) -> Vec<RawRow> {
    let mut rows: Vec<RawRow> = values
        .into_iter()
        .map(|cells| {
            let mut cells = cells.into_iter();
            RawRow {
                date: cells.next().unwrap_or_default(),
                cnn: cells.next().unwrap_or_default(),
                crypto: cells.next().unwrap_or_default(),
            }
        })
        .collect();

    strip_header_row(&mut rows);
    rows
}
