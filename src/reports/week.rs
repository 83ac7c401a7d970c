//! Weekly totals projection
//!
//! Totals for the 7 calendar days ending at and including today, oldest
//! first. Days absent from the ledger count as zero; computing the report
//! never creates buckets.

use crate::models::{DayKey, Ledger, Money};

/// One day's total within the weekly report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTotal {
    pub day: DayKey,
    pub total: Money,
}

/// Totals for the 7 days ending at `today`, oldest first
pub fn weekly_totals(ledger: &Ledger, today: DayKey) -> Vec<DayTotal> {
    (0..7)
        .rev()
        .map(|back| {
            let day = today.days_back(back);
            DayTotal {
                day,
                total: ledger.day_total(day),
            }
        })
        .collect()
}
