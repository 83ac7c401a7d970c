//! Storage layer for PocketSpend
//!
//! Five independent JSON documents (budget, quick amounts, ledger,
//! categories, currency) with atomic writes. There is no transactional
//! guarantee across documents; each persists on its own.

pub mod budget;
pub mod categories;
pub mod currency;
pub mod file_io;
pub mod init;
pub mod ledger;
pub mod quick_amounts;
pub mod write_behind;

pub use budget::BudgetRepository;
pub use categories::CategoryRepository;
pub use currency::CurrencyRepository;
pub use file_io::{read_json, write_json_atomic};
pub use init::initialize_storage;
pub use ledger::LedgerRepository;
pub use quick_amounts::QuickAmountRepository;
pub use write_behind::WriteBehind;

use crate::config::paths::SpendPaths;
use crate::error::SpendError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: SpendPaths,
    pub ledger: LedgerRepository,
    pub budget: BudgetRepository,
    pub quick_amounts: QuickAmountRepository,
    pub categories: CategoryRepository,
    pub currency: CurrencyRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: SpendPaths) -> Result<Self, SpendError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            ledger: LedgerRepository::new(paths.ledger_file()),
            budget: BudgetRepository::new(paths.budget_file()),
            quick_amounts: QuickAmountRepository::new(paths.quick_amounts_file()),
            categories: CategoryRepository::new(paths.categories_file()),
            currency: CurrencyRepository::new(paths.currency_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &SpendPaths {
        &self.paths
    }

    /// Load all five documents from disk
    ///
    /// Called once at startup, before anything renders, so the UI never
    /// shows default values over restored state.
    pub fn load_all(&mut self) -> Result<(), SpendError> {
        self.ledger.load()?;
        self.budget.load()?;
        self.quick_amounts.load()?;
        self.categories.load()?;
        self.currency.load()?;
        Ok(())
    }

    /// Flush pending ledger writes; called before process exit
    pub fn shutdown(&mut self) {
        self.ledger.shutdown();
    }
}
