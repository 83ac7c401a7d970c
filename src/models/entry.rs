//! Expense entry model
//!
//! An entry records a single spend: amount, creation instant, category
//! reference, and an optional note. Entries are immutable once created;
//! the only lifecycle operation after creation is deletion.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{CategoryId, EntryId};
use super::money::Money;

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier
    pub id: EntryId,

    /// Positive spend amount
    pub amount: Money,

    /// Instant of creation (stored UTC, classified in local time)
    pub timestamp: DateTime<Utc>,

    /// Weak reference to a category; display falls back to a default
    /// category if the id dangles
    pub category_id: CategoryId,

    /// Optional free-text note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ExpenseEntry {
    /// Create a new entry with a fresh id, timestamped now
    pub fn new(amount: Money, category_id: CategoryId, note: Option<String>) -> Self {
        Self {
            id: EntryId::new(),
            amount,
            timestamp: Utc::now(),
            category_id,
            note: note.filter(|n| !n.trim().is_empty()),
        }
    }

    /// The note, or an empty string when absent
    pub fn note_text(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }
}
