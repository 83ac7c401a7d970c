//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod category;
pub mod currency;
pub mod entry;
pub mod export;
pub mod quick;
pub mod report;

pub use budget::{handle_budget_command, BudgetCommands};
pub use category::{handle_category_command, CategoryCommands};
pub use currency::{handle_currency_command, CurrencyCommands};
pub use entry::{handle_add, handle_clear, handle_delete, handle_list};
pub use export::{handle_export_command, ExportCommands};
pub use quick::{handle_quick_command, QuickCommands};
pub use report::{handle_month, handle_summary, handle_week};
