//! Errors surfaced by record-store operations.
//!
//! Cell-level parse failures are never represented here — they are
//! recovered locally by coercing the offending cell to absent.

use chrono::NaiveDate;
use thiserror::Error;

/// Failures a user action can surface.
///
/// Every failure is terminal for the triggering action; there is no
/// automatic retry anywhere. The in-memory table is untouched in both
/// variants.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An entry for this date already exists. Recoverable — the user
    /// edits the existing row instead.
    #[error("an entry for {0} already exists")]
    DuplicateDate(NaiveDate),

    /// The backing store failed to read or write.
    #[error("persistence failure: {0}")]
    Persistence(#[source] anyhow::Error),
}
