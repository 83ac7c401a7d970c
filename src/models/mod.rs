//! Core data models for PocketSpend
//!
//! This module contains all the data structures that represent the spending
//! domain: expense entries, the day-keyed ledger, categories, currencies,
//! and quick-add amounts.

pub mod category;
pub mod currency;
pub mod day_key;
pub mod entry;
pub mod ids;
pub mod ledger;
pub mod money;
pub mod quick_amounts;

pub use category::Category;
pub use currency::Currency;
pub use day_key::DayKey;
pub use entry::ExpenseEntry;
pub use ids::{CategoryId, EntryId};
pub use ledger::Ledger;
pub use money::Money;
pub use quick_amounts::QuickAmounts;
