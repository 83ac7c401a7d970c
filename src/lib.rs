//! PocketSpend - Terminal-based daily spending tracker
//!
//! This library provides the core functionality for the PocketSpend
//! application: a day-keyed expense ledger with a daily budget, quick-tap
//! amounts, derived spending aggregates, and JSON/CSV export, driven from
//! both CLI subcommands and an interactive TUI dashboard.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (entries, ledger, categories, money, etc.)
//! - `storage`: JSON file storage layer
//! - `services`: Business logic (ledger mutations, day clock)
//! - `reports`: Pure aggregate projections over the ledger
//! - `export`: JSON and CSV export
//! - `display`: Terminal formatting helpers
//! - `cli`: CLI command handlers
//! - `tui`: Interactive dashboard

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;
pub mod tui;

pub use error::{SpendError, SpendResult};
