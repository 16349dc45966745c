//! Property-Based Tests — Domain Layer Invariants
//!
//! Uses `proptest` to verify that the table and cell coercion maintain
//! their invariants across random inputs.

use proptest::prelude::*;

use fg_board::domain::entry::{coerce_value, Entry};
use fg_board::domain::Table;
use fg_board::ports::row_store::RawRow;

fn entry_strategy() -> impl Strategy<Value = Entry> {
    (
        (2000i32..2100, 1u32..=12, 1u32..=28),
        proptest::option::of(0u8..=100),
        proptest::option::of(0u8..=100),
    )
        .prop_map(|((y, m, d), cnn, crypto)| {
            Entry::new(
                chrono::NaiveDate::from_ymd_opt(y, m, d).unwrap(),
                cnn,
                crypto,
            )
        })
}

// ── Table Properties ────────────────────────────────────────

proptest! {
    /// Listings are strictly descending by date, so dates are unique.
    #[test]
    fn table_listing_descending_and_unique(
        entries in proptest::collection::vec(entry_strategy(), 0..50),
    ) {
        let table = Table::from_entries(entries);
        for pair in table.entries().windows(2) {
            prop_assert!(
                pair[0].date > pair[1].date,
                "listing must be strictly descending: {} before {}",
                pair[0].date,
                pair[1].date
            );
        }
    }

    /// Table → raw rows → table round-trips exactly.
    #[test]
    fn raw_row_round_trip(
        entries in proptest::collection::vec(entry_strategy(), 0..50),
    ) {
        let table = Table::from_entries(entries);
        let rows: Vec<RawRow> =
            table.entries().iter().map(RawRow::from).collect();
        let rebuilt = Table::from_entries(
            rows.iter()
                .filter_map(|r| Entry::from_raw(&r.date, &r.cnn, &r.crypto)),
        );
        prop_assert_eq!(rebuilt, table);
    }
}

// ── Cell Coercion Properties ────────────────────────────────

proptest! {
    /// In-range integers coerce to themselves.
    #[test]
    fn coerce_accepts_in_range(v in 0u8..=100) {
        prop_assert_eq!(coerce_value(&v.to_string()), Some(v));
    }

    /// Out-of-range integers coerce to absent in both directions.
    #[test]
    fn coerce_rejects_out_of_range(v in 101i64..100_000) {
        prop_assert_eq!(coerce_value(&v.to_string()), None);
        prop_assert_eq!(coerce_value(&(-v).to_string()), None);
    }

    /// Arbitrary non-numeric text coerces to absent, never panics.
    #[test]
    fn coerce_never_panics(s in "[a-zA-Z .,-]{0,16}") {
        let coerced = coerce_value(&s);
        if let Some(v) = coerced {
            prop_assert!(v <= 100);
        }
    }
}
