//! Business logic layer for PocketSpend
//!
//! Services sit between the CLI/TUI and the storage layer: the ledger
//! service owns all spend-data mutations, and the day clock owns "today"
//! detection and rollover.

pub mod clock;
pub mod ledger;

pub use clock::{DayChange, DayClock};
pub use ledger::LedgerService;
