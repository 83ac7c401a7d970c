//! Ledger repository for JSON storage
//!
//! Holds the in-memory ledger and persists snapshots of it to ledger.json
//! through the coalescing write-behind queue. Reads load synchronously at
//! startup; writes are fire-and-forget off the interaction path.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::{DayKey, EntryId, ExpenseEntry, Ledger};

use super::file_io::read_json;
use super::write_behind::WriteBehind;

/// Repository for the day-keyed expense ledger
pub struct LedgerRepository {
    path: PathBuf,
    data: RwLock<Ledger>,
    writer: WriteBehind<Ledger>,
}

impl LedgerRepository {
    /// Create a new ledger repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            writer: WriteBehind::new(path.clone()),
            path,
            data: RwLock::new(Ledger::new()),
        }
    }

    /// Load the ledger from disk, replacing in-memory state
    pub fn load(&self) -> Result<(), SpendError> {
        let ledger: Ledger = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = ledger;

        Ok(())
    }

    /// Queue the current ledger state for persistence (fire-and-forget)
    pub fn persist(&self) -> Result<(), SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        self.writer.enqueue(data.clone());
        Ok(())
    }

    /// Flush pending writes and stop the background writer
    pub fn shutdown(&mut self) {
        self.writer.shutdown();
    }

    /// A full copy of the current ledger state (for aggregate projections)
    pub fn snapshot(&self) -> Result<Ledger, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Create `day`'s bucket if absent. Returns true if one was created.
    pub fn ensure_day(&self, day: DayKey) -> Result<bool, SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.ensure_day(day))
    }

    /// Append an entry to `day`'s bucket
    pub fn add(&self, day: DayKey, entry: ExpenseEntry) -> Result<(), SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.add(day, entry);
        Ok(())
    }

    /// Remove an entry from `day`'s bucket; `None` if absent
    pub fn remove(&self, day: DayKey, id: EntryId) -> Result<Option<ExpenseEntry>, SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.remove(day, id))
    }

    /// Replace `day`'s bucket with an empty list
    pub fn clear_day(&self, day: DayKey) -> Result<(), SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        data.clear_day(day);
        Ok(())
    }

    /// The entries in `day`'s bucket, insertion order (empty if untouched)
    pub fn entries_for(&self, day: DayKey) -> Result<Vec<ExpenseEntry>, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.bucket(day).map(|b| b.to_vec()).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, Money};
    use tempfile::TempDir;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn entry(cents: i64) -> ExpenseEntry {
        ExpenseEntry::new(Money::from_cents(cents), CategoryId::new(), None)
    }

    #[test]
    fn test_persist_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ledger.json");

        let mut repo = LedgerRepository::new(path.clone());
        repo.add(day("2024-01-01"), entry(500)).unwrap();
        repo.persist().unwrap();
        repo.shutdown();

        let repo2 = LedgerRepository::new(path);
        repo2.load().unwrap();
        let snapshot = repo2.snapshot().unwrap();
        assert_eq!(snapshot.day_total(day("2024-01-01")).cents(), 500);
    }

    #[test]
    fn test_load_missing_file_gives_empty_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));
        repo.load().unwrap();
        assert_eq!(repo.snapshot().unwrap().touched_day_count(), 0);
    }

    #[test]
    fn test_entries_for_untouched_day_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = LedgerRepository::new(temp_dir.path().join("ledger.json"));
        assert!(repo.entries_for(day("2024-01-01")).unwrap().is_empty());
    }
}
