//! Terminal User Interface module
//!
//! This module provides the interactive dashboard for PocketSpend using
//! ratatui: a budget gauge, today's entry list, quick-add chips, and a
//! weekly bar chart. Ticks and terminal focus-gain events both feed the
//! day-clock refresh so the dashboard rolls over at midnight.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

pub use app::App;
pub use terminal::run_tui;
