//! Category repository for JSON storage
//!
//! Persists the ordered category list to categories.json.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::SpendError;
use crate::models::Category;

use super::file_io::{read_json, write_json_atomic};

/// Repository for spending categories
pub struct CategoryRepository {
    path: PathBuf,
    data: RwLock<Vec<Category>>,
}

impl CategoryRepository {
    /// Create a new category repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load categories from disk
    pub fn load(&self) -> Result<(), SpendError> {
        let categories: Vec<Category> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = categories;

        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        write_json_atomic(&self.path, &*data)
    }

    /// All categories in display order
    pub fn list(&self) -> Result<Vec<Category>, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data.clone())
    }

    /// Find a category by name (case-insensitive)
    pub fn find_by_name(&self, name: &str) -> Result<Option<Category>, SpendError> {
        let data = self
            .data
            .read()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(data
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Replace the whole list (used by init seeding)
    pub fn set(&self, categories: Vec<Category>) -> Result<(), SpendError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| SpendError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        *data = categories;
        Ok(())
    }
}
