//! Daily budget repository for JSON storage
//!
//! The budget is a single process-wide amount, the same every day. On disk
//! it is stored as a decimal string in budget.json.

use std::path::PathBuf;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};

use crate::error::SpendError;
use crate::models::Money;

use super::file_io::{read_json, write_json_atomic};

/// On-disk shape: the amount is kept as text
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct BudgetData {
    amount: String,
}

/// Repository for the daily budget
pub struct BudgetRepository {
    path: PathBuf,
    data: RwLock<Money>,
}

impl BudgetRepository {
    /// Create a new budget repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Money::zero()),
        }
    }

    /// Load the budget from disk; a missing file leaves the budget at zero
    pub fn load(&self) -> Result<(), SpendError> {
        let file_data: BudgetData = read_json(&self.path)?;

        let amount = if file_data.amount.is_empty() {
            Money::zero()
        } else {
            Money::parse(&file_data.amount).map_err(|e| {
                SpendError::Storage(format!("Failed to parse stored budget: {}", e))
            })?
        };

        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = amount;

        Ok(())
    }

    /// Save the budget to disk
    pub fn save(&self) -> Result<(), SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = BudgetData {
            amount: data.to_string(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// The current budget amount
    pub fn get(&self) -> Result<Money, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(*data)
    }

    /// Replace the budget amount
    pub fn set(&self, amount: Money) -> Result<(), SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = amount;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_save_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");

        let repo = BudgetRepository::new(path.clone());
        repo.set(Money::from_cents(3000)).unwrap();
        repo.save().unwrap();

        let repo2 = BudgetRepository::new(path);
        repo2.load().unwrap();
        assert_eq!(repo2.get().unwrap().cents(), 3000);
    }

    #[test]
    fn test_stored_as_text() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("budget.json");

        let repo = BudgetRepository::new(path.clone());
        repo.set(Money::from_cents(5000)).unwrap();
        repo.save().unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"50.00\""));
    }

    #[test]
    fn test_load_missing_is_zero() {
        let temp_dir = TempDir::new().unwrap();
        let repo = BudgetRepository::new(temp_dir.path().join("budget.json"));
        repo.load().unwrap();
        assert_eq!(repo.get().unwrap(), Money::zero());
    }
}
