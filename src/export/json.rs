//! JSON export functionality
//!
//! Exports the full entry list as a pretty-printed JSON document, newest
//! entry first.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{SpendError, SpendResult};
use crate::models::Ledger;

use super::flattened_entries;

/// One exported entry record
#[derive(Debug, Clone, Serialize)]
pub struct ExportedEntry {
    /// Entry id (full UUID)
    pub id: String,

    /// Bucket day key (`YYYY-MM-DD`)
    pub date: String,

    /// Amount in major units
    pub amount: f64,

    /// Category id (full UUID)
    pub category: String,

    /// Note text (empty when absent)
    pub note: String,

    /// Creation instant
    pub timestamp: DateTime<Utc>,
}

/// Write the full entry list as pretty-printed JSON
pub fn export_entries_json<W: Write>(ledger: &Ledger, writer: &mut W) -> SpendResult<()> {
    let entries: Vec<ExportedEntry> = flattened_entries(ledger)
        .into_iter()
        .map(|(day, e)| ExportedEntry {
            id: e.id.as_uuid().to_string(),
            date: day.to_string(),
            amount: e.amount.to_major_units(),
            category: e.category_id.as_uuid().to_string(),
            note: e.note_text().to_string(),
            timestamp: e.timestamp,
        })
        .collect();

    serde_json::to_writer_pretty(writer, &entries)
        .map_err(|e| SpendError::Export(e.to_string()))?;

    Ok(())
}
