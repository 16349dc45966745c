//! CSV Export - Download Snapshot of the Current Table
//!
//! Renders the table as CSV bytes with the same column layout as the
//! backing stores, descending by date, for the download button.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::domain::{Table, DATE_FORMAT};
use crate::ports::row_store::{RawRow, HEADER};

/// MIME type of the exported snapshot.
pub const EXPORT_MIME: &str = "text/csv";

/// Render the table as a CSV snapshot.
pub fn csv_snapshot(table: &Table) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(HEADER)
        .context("Failed to write CSV header")?;
    for entry in table.entries() {
        let row = RawRow::from(entry);
        writer
            .write_record(row.cells())
            .context("Failed to write CSV row")?;
    }
    writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV buffer: {e}"))
}

/// File name for a snapshot downloaded on the given day.
pub fn export_file_name(today: NaiveDate) -> String {
    format!("fg_indeksai_{}.csv", today.format(DATE_FORMAT))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::parse_date;
    use crate::domain::Entry;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_snapshot_layout_and_order() {
        let table = Table::from_entries([
            Entry::new(date("2024-01-01"), Some(65), Some(30)),
            Entry::new(date("2024-01-02"), Some(72), None),
        ]);

        let csv = String::from_utf8(csv_snapshot(&table).unwrap()).unwrap();
        assert_eq!(
            csv,
            "Data,CNN FG,Crypto FG\n2024-01-02,72,\n2024-01-01,65,30\n"
        );
    }

    #[test]
    fn test_snapshot_of_empty_table_is_header_only() {
        let csv = String::from_utf8(csv_snapshot(&Table::new()).unwrap()).unwrap();
        assert_eq!(csv, "Data,CNN FG,Crypto FG\n");
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(
            export_file_name(date("2024-03-07")),
            "fg_indeksai_2024-03-07.csv"
        );
    }
}
