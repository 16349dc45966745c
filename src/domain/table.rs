//! In-memory table of dated index entries.
//!
//! The table holds at most one entry per date and every externally
//! observed listing is descending by date. It is loaded wholesale at
//! session start, mutated in memory, and written back wholesale on an
//! explicit save — never incrementally.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::entry::Entry;
use super::error::StoreError;

/// The full in-memory collection of entries, unique by date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    /// Entries kept sorted descending by date.
    entries: Vec<Entry>,
}

impl Table {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from parsed entries.
    ///
    /// Duplicate dates resolve last-write-wins in input order, matching
    /// how repeated rows in the backing store are read.
    pub fn from_entries(entries: impl IntoIterator<Item = Entry>) -> Self {
        let mut by_date: BTreeMap<NaiveDate, Entry> = BTreeMap::new();
        for entry in entries {
            by_date.insert(entry.date, entry);
        }
        Self {
            entries: by_date.into_values().rev().collect(),
        }
    }

    /// Insert a new entry, keeping the descending order.
    ///
    /// # Errors
    /// Returns [`StoreError::DuplicateDate`] when the date is already
    /// present; the table is left unchanged.
    pub fn insert(&mut self, entry: Entry) -> Result<(), StoreError> {
        if self.contains_date(entry.date) {
            return Err(StoreError::DuplicateDate(entry.date));
        }
        let at = self
            .entries
            .partition_point(|existing| existing.date > entry.date);
        self.entries.insert(at, entry);
        Ok(())
    }

    /// Whether an entry for the given date is present.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|e| e.date == date)
    }

    /// Look up the entry for a date.
    pub fn get(&self, date: NaiveDate) -> Option<&Entry> {
        self.entries.iter().find(|e| e.date == date)
    }

    /// Entries in listing order (descending by date).
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Diff a proposed full replacement against this table.
    ///
    /// Row-wise equality, including absent-value equality. The result
    /// is only a proposal; nothing is persisted here.
    pub fn diff(&self, proposed: Self) -> ChangeSet {
        if proposed == *self {
            ChangeSet::Unchanged
        } else {
            ChangeSet::Pending(proposed)
        }
    }
}

/// A proposed replacement table pending explicit confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeSet {
    /// The proposed table matches the current one; nothing to save.
    Unchanged,
    /// The proposed table differs and awaits an explicit commit.
    Pending(Table),
}

impl ChangeSet {
    /// Whether there is nothing to commit.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}
