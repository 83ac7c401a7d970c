//! Report CLI commands
//!
//! Renders the summary, week, and month projections as plain terminal text.

use chrono::Local;

use crate::display::{format_amount, progress_bar};
use crate::error::SpendResult;
use crate::models::DayKey;
use crate::reports::{monthly_total, weekly_totals, DailySummary};
use crate::storage::Storage;

const BAR_WIDTH: usize = 20;

/// Handle `summary`: today's total, remaining, progress, running average
pub fn handle_summary(storage: &Storage) -> SpendResult<()> {
    let today = DayKey::now();
    let ledger = storage.ledger.snapshot()?;
    let budget = storage.budget.get()?;
    let currency = storage.currency.get()?;

    let summary = DailySummary::generate(&ledger, budget, today);

    println!("Today ({})", summary.day);
    println!("  Spent:     {}", format_amount(summary.total, &currency));
    println!("  Budget:    {}", format_amount(summary.budget, &currency));
    println!("  Remaining: {}", format_amount(summary.remaining, &currency));
    println!("  {}", progress_bar(summary.progress, BAR_WIDTH));
    println!();
    println!(
        "  Daily average (all time): {}",
        format_amount(summary.average_daily, &currency)
    );

    Ok(())
}

/// Handle `week`: the 7 days ending today, oldest first
pub fn handle_week(storage: &Storage) -> SpendResult<()> {
    let today = DayKey::now();
    let ledger = storage.ledger.snapshot()?;
    let currency = storage.currency.get()?;

    let totals = weekly_totals(&ledger, today);
    let max_cents = totals.iter().map(|t| t.total.cents()).max().unwrap_or(0);

    println!("Last 7 days");
    for day_total in totals {
        let ratio = if max_cents > 0 {
            day_total.total.cents() as f64 / max_cents as f64
        } else {
            0.0
        };
        let marker = if day_total.day == today { " <- today" } else { "" };
        println!(
            "  {}  {:>10}  {}{}",
            day_total.day,
            format_amount(day_total.total, &currency),
            progress_bar(ratio, BAR_WIDTH),
            marker
        );
    }

    Ok(())
}

/// Handle `month`: total spend in the current calendar month
pub fn handle_month(storage: &Storage) -> SpendResult<()> {
    let now = Local::now();
    let ledger = storage.ledger.snapshot()?;
    let currency = storage.currency.get()?;

    let total = monthly_total(&ledger, now);
    println!(
        "Spent in {}: {}",
        now.format("%B %Y"),
        format_amount(total, &currency)
    );

    Ok(())
}
