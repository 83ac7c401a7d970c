//! Storage initialization
//!
//! Handles first-run setup and default data creation.

use crate::config::paths::SpendPaths;
use crate::error::SpendError;
use crate::models::{Category, Currency, Money, QuickAmounts};

use super::budget::BudgetRepository;
use super::categories::CategoryRepository;
use super::currency::CurrencyRepository;
use super::quick_amounts::QuickAmountRepository;

/// The daily budget seeded on first run
pub fn default_budget() -> Money {
    Money::from_units(50)
}

/// Initialize storage for a fresh installation
///
/// Seeds the data documents that don't exist yet through their
/// repositories: categories, quick amounts, budget, and currency get
/// defaults; the ledger starts empty and is created lazily on the first
/// touched day.
pub fn initialize_storage(paths: &SpendPaths) -> Result<(), SpendError> {
    paths.ensure_directories()?;

    if !paths.categories_file().exists() {
        let repo = CategoryRepository::new(paths.categories_file());
        repo.set(Category::defaults())?;
        repo.save()?;
    }

    if !paths.quick_amounts_file().exists() {
        let repo = QuickAmountRepository::new(paths.quick_amounts_file());
        repo.set(QuickAmounts::defaults())?;
        repo.save()?;
    }

    if !paths.budget_file().exists() {
        let repo = BudgetRepository::new(paths.budget_file());
        repo.set(default_budget())?;
        repo.save()?;
    }

    if !paths.currency_file().exists() {
        let repo = CurrencyRepository::new(paths.currency_file());
        repo.set(Currency::default())?;
        repo.save()?;
    }

    Ok(())
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &SpendPaths) -> bool {
    !paths.categories_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_documents() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();

        assert!(paths.categories_file().exists());
        assert!(paths.quick_amounts_file().exists());
        assert!(paths.budget_file().exists());
        assert!(paths.currency_file().exists());
        assert!(!paths.ledger_file().exists());
        assert!(!needs_initialization(&paths));
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SpendPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        let before = std::fs::read_to_string(paths.categories_file()).unwrap();

        initialize_storage(&paths).unwrap();
        let after = std::fs::read_to_string(paths.categories_file()).unwrap();

        // Re-running must not reseed (category ids would change)
        assert_eq!(before, after);
    }
}
