//! Local File Store - Atomic CSV Persistence
//!
//! Persists the table to a single delimited file with a `Data,
//! CNN FG, Crypto FG` header. Writes go to a temporary sibling file
//! first, then rename, so the file is always either the old or the
//! new version — never a partial write.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::fs;
use tracing::{info, instrument};

use crate::ports::row_store::{strip_header_row, RawRow, RowStore, HEADER};

/// CSV file store with crash-safe overwrite.
pub struct LocalFileStore {
    /// Path to the data file.
    path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
}

impl LocalFileStore {
    /// Create a store for the given file path.
    ///
    /// Creates the parent directory if it doesn't exist. The file
    /// itself is only created on the first write.
    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path: PathBuf = path.into();
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                fs::create_dir_all(dir)
                    .await
                    .context("Failed to create data directory")?;
            }
        }
        let tmp_path = path.with_extension("csv.tmp");
        Ok(Self { path, tmp_path })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RowStore for LocalFileStore {
    /// Read all rows from the data file.
    ///
    /// Returns an empty sequence when the file does not exist yet
    /// (first session). Short records are padded with empty cells.
    /// The header row is stripped only when actually present, so a
    /// hand-edited file without one loses no data.
    #[instrument(skip(self))]
    async fn read_rows(&self) -> Result<Vec<RawRow>> {
        if !self.path.exists() {
            info!(path = %self.path.display(), "No data file yet, starting empty");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.context("Failed to read CSV record")?;
            rows.push(RawRow::new(
                record.get(0).unwrap_or(""),
                record.get(1).unwrap_or(""),
                record.get(2).unwrap_or(""),
            ));
        }
        strip_header_row(&mut rows);

        info!(count = rows.len(), "Rows loaded from data file");
        Ok(rows)
    }

    /// Overwrite the data file atomically (tmp → rename).
    #[instrument(skip(self, rows), fields(count = rows.len()))]
    async fn write_rows(&self, rows: &[RawRow]) -> Result<()> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(HEADER)
            .context("Failed to write CSV header")?;
        for row in rows {
            writer
                .write_record(row.cells())
                .context("Failed to write CSV row")?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {e}"))?;

        // Write to tmp file
        fs::write(&self.tmp_path, &bytes)
            .await
            .context("Failed to write tmp data file")?;

        // Atomic rename
        fs::rename(&self.tmp_path, &self.path)
            .await
            .context("Failed to rename data file")?;

        info!(path = %self.path.display(), "Data file saved");
        Ok(())
    }

    /// Check that the data directory is reachable.
    async fn is_healthy(&self) -> bool {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => {
                fs::metadata(dir).await.is_ok()
            }
            _ => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn rows() -> Vec<RawRow> {
        vec![
            RawRow::new("2024-01-02", "72", ""),
            RawRow::new("2024-01-01", "65", "30"),
        ]
    }

    #[tokio::test]
    async fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path().join("fg.csv")).await.unwrap();
        assert!(store.read_rows().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_write_then_read_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path().join("fg.csv")).await.unwrap();

        store.write_rows(&rows()).await.unwrap();
        assert_eq!(store.read_rows().await.unwrap(), rows());
    }

    #[tokio::test]
    async fn test_write_replaces_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path().join("fg.csv")).await.unwrap();

        store.write_rows(&rows()).await.unwrap();
        let replacement = vec![RawRow::new("2024-02-01", "10", "90")];
        store.write_rows(&replacement).await.unwrap();

        assert_eq!(store.read_rows().await.unwrap(), replacement);
    }

    #[tokio::test]
    async fn test_header_written_once() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fg.csv");
        let store = LocalFileStore::new(&path).await.unwrap();

        store.write_rows(&rows()).await.unwrap();
        let content = std::fs::read_to_string(&path).unwrap();

        assert!(content.starts_with("Data,CNN FG,Crypto FG\n"));
        assert_eq!(content.matches("Data").count(), 1);
    }

    #[tokio::test]
    async fn test_file_without_header_loses_no_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("fg.csv");
        std::fs::write(&path, "2024-01-01,65,30\n2024-01-02,72,\n").unwrap();

        let store = LocalFileStore::new(&path).await.unwrap();
        assert_eq!(
            store.read_rows().await.unwrap(),
            vec![
                RawRow::new("2024-01-01", "65", "30"),
                RawRow::new("2024-01-02", "72", ""),
            ]
        );
    }

    #[tokio::test]
    async fn test_no_tmp_file_left_behind() {
        let dir = TempDir::new().unwrap();
        let store = LocalFileStore::new(dir.path().join("fg.csv")).await.unwrap();

        store.write_rows(&rows()).await.unwrap();
        assert!(!store.tmp_path.exists());
    }

    #[tokio::test]
    async fn test_creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("data").join("fg.csv");
        let store = LocalFileStore::new(&nested).await.unwrap();

        assert!(store.is_healthy().await);
        store.write_rows(&rows()).await.unwrap();
        assert!(nested.exists());
    }
}
