//! Aggregate projections over the ledger
//!
//! Everything in this module is a pure, read-only projection of ledger
//! state, recomputed on every read. No incremental aggregate state is
//! maintained anywhere.

pub mod month;
pub mod summary;
pub mod week;

pub use month::monthly_total;
pub use summary::{average_daily, progress_ratio, remaining, today_total, DailySummary};
pub use week::{weekly_totals, DayTotal};
