//! Quick-amount repository for JSON storage
//!
//! Persists the ordered list of quick-add shortcuts to quick_amounts.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::{Money, QuickAmounts};

use super::file_io::{read_json, write_json_atomic};

/// Repository for quick-add amounts
pub struct QuickAmountRepository {
    path: PathBuf,
    data: RwLock<QuickAmounts>,
}

impl QuickAmountRepository {
    /// Create a new quick-amount repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(QuickAmounts::new()),
        }
    }

    /// Load quick amounts from disk
    pub fn load(&self) -> Result<(), SpendError> {
        let amounts: QuickAmounts = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = amounts;

        Ok(())
    }

    /// Save quick amounts to disk
    pub fn save(&self) -> Result<(), SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        write_json_atomic(&self.path, &*data)
    }

    /// The current quick amounts, ascending
    pub fn get(&self) -> Result<QuickAmounts, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Replace the whole set (used by init seeding)
    pub fn set(&self, amounts: QuickAmounts) -> Result<(), SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = amounts;
        Ok(())
    }

    /// Add an amount (dedup + sort). Returns true if the set changed.
    pub fn add(&self, amount: Money) -> Result<bool, SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.add(amount))
    }

    /// Remove an amount; idempotent. Returns true if the set changed.
    pub fn remove(&self, amount: Money) -> Result<bool, SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        Ok(data.remove(amount))
    }
}
