//! Currency selection repository for JSON storage
//!
//! Persists the selected display currency to currency.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::Currency;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the selected currency
pub struct CurrencyRepository {
    path: PathBuf,
    data: RwLock<Currency>,
}

impl CurrencyRepository {
    /// Create a new currency repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Currency::default()),
        }
    }

    /// Load the selection from disk; a missing file keeps the default (USD)
    pub fn load(&self) -> Result<(), SpendError> {
        let currency: Currency = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = currency;

        Ok(())
    }

    /// Save the selection to disk
    pub fn save(&self) -> Result<(), SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        write_json_atomic(&self.path, &*data)
    }

    /// The currently selected currency
    pub fn get(&self) -> Result<Currency, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Replace the selection
    pub fn set(&self, currency: Currency) -> Result<(), SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = currency;
        Ok(())
    }
}
