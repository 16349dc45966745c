//! Row Store Port - Table Persistence Interface
//!
//! Defines the capability trait both persistence variants implement:
//! read every stored row, overwrite the whole store. Rows cross this
//! boundary as raw text cells; parsing and coercion belong to the
//! record store, never to a backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::entry::{value_cell, Entry};

/// Column header shared by every backing store and the CSV export.
pub const HEADER: [&str; 3] = ["Data", "CNN FG", "Crypto FG"];

/// One raw storage row: the date and the two index cells as stored text.
///
/// An empty string means absent. A backend returns cells exactly as
/// stored — malformed content is the record store's concern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// Date cell, canonically `YYYY-MM-DD`.
    pub date: String,
    /// CNN Fear & Greed cell.
    pub cnn: String,
    /// Crypto Fear & Greed cell.
    pub crypto: String,
}

impl RawRow {
    /// Create a row from cell text.
    pub fn new(
        date: impl Into<String>,
        cnn: impl Into<String>,
        crypto: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            cnn: cnn.into(),
            crypto: crypto.into(),
        }
    }

    /// Whether every cell is blank. Such rows are skipped on load.
    pub fn is_blank(&self) -> bool {
        self.date.trim().is_empty()
            && self.cnn.trim().is_empty()
            && self.crypto.trim().is_empty()
    }

    /// The three cells in column order.
    pub fn cells(&self) -> [&str; 3] {
        [&self.date, &self.cnn, &self.crypto]
    }
}

impl From<&Entry> for RawRow {
    fn from(entry: &Entry) -> Self {
        Self {
            date: entry.date_cell(),
            cnn: value_cell(entry.cnn),
            crypto: value_cell(entry.crypto),
        }
    }
}

/// Drop the leading header row when present (case-insensitive match on
/// the first cell).
///
/// Stores written by this crate always carry the header, but a
/// hand-edited file or a fresh worksheet may not; their first row is
/// data and must survive the load.
pub fn strip_header_row(rows: &mut Vec<RawRow>) {
    if rows
        .first()
        .is_some_and(|row| row.date.trim().eq_ignore_ascii_case(HEADER[0]))
    {
        rows.remove(0);
    }
}

/// Trait for table persistence providers.
///
/// Implemented by the local CSV file backend and the remote worksheet
/// backend. There is no append or incremental mode — a write always
/// replaces the entire backing store.
#[async_trait]
pub trait RowStore: Send + Sync {
    /// Read every stored row in storage order.
    ///
    /// Missing storage (e.g. the data file does not exist yet) yields
    /// an empty sequence, not an error. Individual malformed cells
    /// must never fail the read.
    async fn read_rows(&self) -> anyhow::Result<Vec<RawRow>>;

    /// Overwrite the entire backing store with the given rows.
    async fn write_rows(&self, rows: &[RawRow]) -> anyhow::Result<()>;

    /// Cheap reachability / writability probe.
    async fn is_healthy(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::parse_date;

    #[test]
    fn test_raw_row_from_entry() {
        let entry = Entry::new(parse_date("2024-01-02").unwrap(), Some(72), None);
        let row = RawRow::from(&entry);
        assert_eq!(row.cells(), ["2024-01-02", "72", ""]);
    }

    #[test]
    fn test_blank_detection() {
        assert!(RawRow::new("", " ", "").is_blank());
        assert!(!RawRow::new("2024-01-01", "", "").is_blank());
        assert!(!RawRow::new("", "65", "").is_blank());
    }

    #[test]
    fn test_strip_header_row_only_when_present() {
        let mut with_header = vec![
            RawRow::new("data", "CNN FG", "Crypto FG"),
            RawRow::new("2024-01-01", "65", "30"),
        ];
        strip_header_row(&mut with_header);
        assert_eq!(with_header, vec![RawRow::new("2024-01-01", "65", "30")]);

        let mut without_header = vec![RawRow::new("2024-01-01", "65", "30")];
        strip_header_row(&mut without_header);
        assert_eq!(without_header.len(), 1);

        let mut empty: Vec<RawRow> = Vec::new();
        strip_header_row(&mut empty);
        assert!(empty.is_empty());
    }
}
