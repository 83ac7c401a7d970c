//! Daily summary projections
//!
//! Today's total, remaining budget, progress ratio, and the all-time
//! running average. All of these are recomputed from ledger state on every
//! read; nothing is cached, so there is no invalidation to get wrong.

use crate::models::{DayKey, Ledger, Money};

/// Sum of amounts in `day`'s bucket; an absent bucket counts as zero
pub fn today_total(ledger: &Ledger, day: DayKey) -> Money {
    ledger.day_total(day)
}

/// Budget left for the day, clamped at zero
pub fn remaining(budget: Money, total: Money) -> Money {
    budget.saturating_sub(total)
}

/// Fraction of the budget spent, clamped to [0, 1]
///
/// A zero or negative budget yields 0 rather than dividing by zero or
/// producing an unbounded ratio.
pub fn progress_ratio(budget: Money, total: Money) -> f64 {
    if !budget.is_positive() {
        return 0.0;
    }
    (total.cents() as f64 / budget.cents() as f64).clamp(0.0, 1.0)
}

/// All-time total divided by the number of day keys ever touched
///
/// The denominator counts ledger keys that exist, including explicitly
/// cleared/empty ones, not calendar days elapsed. A day that was touched
/// and then cleared still counts as a day with 0 total, pulling the
/// average down.
pub fn average_daily(ledger: &Ledger) -> Money {
    let days = ledger.touched_day_count().max(1) as i64;
    Money::from_cents(ledger.total_all_time().cents() / days)
}

/// One-stop summary for the dashboard and the `summary` subcommand
#[derive(Debug, Clone)]
pub struct DailySummary {
    pub day: DayKey,
    pub budget: Money,
    pub total: Money,
    pub remaining: Money,
    pub progress: f64,
    pub average_daily: Money,
}

impl DailySummary {
    /// Compute the summary for `day` against the given budget
    pub fn generate(ledger: &Ledger, budget: Money, day: DayKey) -> Self {
        let total = today_total(ledger, day);
        Self {
            day,
            budget,
            total,
            remaining: remaining(budget, total),
            progress: progress_ratio(budget, total),
            average_daily: average_daily(ledger),
        }
    }
}
