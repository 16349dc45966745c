//! Index entry model and raw cell coercion.
//!
//! An entry is one dated record of the two Fear & Greed series.
//! Cells arrive from storage as text; coercion turns anything that is
//! not a clean in-range integer into an absent value, never an error.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lower bound of both index scales.
pub const INDEX_MIN: u8 = 0;

/// Upper bound of both index scales.
pub const INDEX_MAX: u8 = 100;

/// Date format used everywhere: storage, export, and display.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One dated record of the CNN and Crypto index values.
///
/// Either value may be absent (not yet known for that day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Calendar date — unique key within a table.
    pub date: NaiveDate,
    /// CNN Fear & Greed value in [0, 100].
    pub cnn: Option<u8>,
    /// Crypto Fear & Greed value in [0, 100].
    pub crypto: Option<u8>,
}

impl Entry {
    /// Create an entry from already-validated parts.
    pub fn new(date: NaiveDate, cnn: Option<u8>, crypto: Option<u8>) -> Self {
        Self { date, cnn, crypto }
    }

    /// Build an entry from one raw storage row.
    ///
    /// Returns `None` when the date cell does not parse — such rows are
    /// dropped wholesale. Numeric cells coerce independently, so a bad
    /// value never takes the row (or the load) down with it.
    pub fn from_raw(date: &str, cnn: &str, crypto: &str) -> Option<Self> {
        let date = parse_date(date)?;
        Some(Self {
            date,
            cnn: coerce_value(cnn),
            crypto: coerce_value(crypto),
        })
    }

    /// The date rendered in the canonical `YYYY-MM-DD` form.
    pub fn date_cell(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Parse a date cell in `YYYY-MM-DD` form.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

/// Coerce a raw numeric cell to a bounded index value.
///
/// Empty, non-numeric, non-integral, or out-of-range input all coerce
/// to absent.
pub fn coerce_value(raw: &str) -> Option<u8> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed: i64 = trimmed.parse().ok()?;
    u8::try_from(parsed)
        .ok()
        .filter(|v| (INDEX_MIN..=INDEX_MAX).contains(v))
}

/// Render an optional value as its storage cell: integer string, or
/// empty string when absent.
pub fn value_cell(value: Option<u8>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
