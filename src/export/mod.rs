//! Export module for PocketSpend
//!
//! Exports the full spend history in two formats:
//! - JSON: machine-readable, pretty-printed entry list
//! - CSV: spreadsheet-compatible rows
//!
//! Both formats consume the same flattened, timestamp-descending entry list
//! the ledger produces. Export failures are the one I/O failure class that
//! surfaces to the user instead of being swallowed.

pub mod csv;
pub mod json;

pub use csv::export_entries_csv;
pub use json::{export_entries_json, ExportedEntry};

use crate::models::{DayKey, ExpenseEntry, Ledger};

/// Export file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// The export filename for the given day: `expenses-<day>.<ext>`
    pub fn filename(&self, today: DayKey) -> String {
        match self {
            ExportFormat::Json => format!("expenses-{}.json", today),
            ExportFormat::Csv => format!("expenses-{}.csv", today),
        }
    }
}

/// The full entry list flattened across buckets, newest timestamp first
pub fn flattened_entries(ledger: &Ledger) -> Vec<(DayKey, ExpenseEntry)> {
    ledger
        .entries_by_time_desc()
        .into_iter()
        .map(|(day, e)| (day, e.clone()))
        .collect()
}
