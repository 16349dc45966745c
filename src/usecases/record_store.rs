//! Record Store - Session Table and Mutation Workflow
//!
//! Owns the in-memory table for the session and orchestrates the four
//! user actions against the persistence port: load at session start,
//! add from the entry form, diff from the edit grid, and commit on the
//! explicit save. The external UI serializes actions, so no locking
//! discipline is needed around the table.

use chrono::NaiveDate;
use tracing::{info, instrument, warn};

use crate::domain::{ChangeSet, Entry, StoreError, Table};
use crate::ports::row_store::{RawRow, RowStore};

/// Session-scoped record store over a persistence backend.
pub struct RecordStore<S: RowStore> {
    /// Active persistence backend.
    backend: S,
    /// The session's table.
    table: Table,
}

impl<S: RowStore> RecordStore<S> {
    /// Create a store with an empty table. Call [`Self::load`] to pull
    /// the persisted state in.
    pub fn new(backend: S) -> Self {
        Self {
            backend,
            table: Table::new(),
        }
    }

    /// The current table, for rendering.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Load the table wholesale from the backing store.
    ///
    /// All-blank rows are skipped; rows with an unparseable date are
    /// dropped; bad numeric cells coerce to absent. Duplicate dates
    /// resolve last-write-wins in storage order.
    ///
    /// # Errors
    /// [`StoreError::Persistence`] when the backend read fails.
    #[instrument(skip(self))]
    pub async fn load(&mut self) -> Result<&Table, StoreError> {
        let raw = self
            .backend
            .read_rows()
            .await
            .map_err(StoreError::Persistence)?;
        let total = raw.len();

        let entries = raw.iter().filter(|row| !row.is_blank()).filter_map(|row| {
            let parsed = Entry::from_raw(&row.date, &row.cnn, &row.crypto);
            if parsed.is_none() {
                warn!(date = %row.date, "Dropping row with unparseable date");
            }
            parsed
        });
        self.table = Table::from_entries(entries);

        info!(rows = total, entries = self.table.len(), "Table loaded");
        Ok(&self.table)
    }

    /// Add a new dated entry from the form.
    ///
    /// Values may be absent (not yet known). The table re-sorts
    /// descending after the insert.
    ///
    /// # Errors
    /// [`StoreError::DuplicateDate`] when the date is already present;
    /// the table is left unchanged.
    pub fn add(
        &mut self,
        date: NaiveDate,
        cnn: Option<u8>,
        crypto: Option<u8>,
    ) -> Result<(), StoreError> {
        self.table.insert(Entry::new(date, cnn, crypto))?;
        info!(%date, "Entry added");
        Ok(())
    }

    /// Compare a full replacement table from the edit grid against the
    /// current one. Never persists.
    pub fn apply_edits(&self, proposed: Table) -> ChangeSet {
        self.table.diff(proposed)
    }

    /// Persist a pending change set and adopt it in memory.
    ///
    /// An empty change set is a no-op and issues no write. On backend
    /// failure the in-memory table keeps its pre-commit state — a
    /// commit either fully replaces the persisted state or leaves it
    /// untouched.
    ///
    /// # Errors
    /// [`StoreError::Persistence`] when the backend write fails.
    #[instrument(skip(self, change_set))]
    pub async fn commit(&mut self, change_set: ChangeSet) -> Result<(), StoreError> {
        let proposed = match change_set {
            ChangeSet::Unchanged => {
                info!("No pending changes, skipping write");
                return Ok(());
            }
            ChangeSet::Pending(table) => table,
        };

        let rows: Vec<RawRow> = proposed.entries().iter().map(RawRow::from).collect();
        self.backend
            .write_rows(&rows)
            .await
            .map_err(StoreError::Persistence)?;

        self.table = proposed;
        info!(entries = self.table.len(), "Table committed");
        Ok(())
    }
}
