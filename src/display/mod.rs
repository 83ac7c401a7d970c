//! Display formatting for terminal output
//!
//! Provides utilities for formatting amounts and progress for plain CLI
//! output (the TUI renders with ratatui widgets instead).

use crate::models::{Currency, Money};

/// Format an amount with the selected currency's symbol
pub fn format_amount(amount: Money, currency: &Currency) -> String {
    amount.format_with_symbol(&currency.symbol)
}

/// Render a text progress bar for the given ratio in [0, 1]
///
/// ```text
/// [██████████░░░░░░░░░░] 50%
/// ```
pub fn progress_bar(ratio: f64, width: usize) -> String {
    let ratio = ratio.clamp(0.0, 1.0);
    let filled = (ratio * width as f64).round() as usize;
    let filled = filled.min(width);

    let mut bar = String::with_capacity(width + 8);
    bar.push('[');
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar.push(']');
    bar.push_str(&format!(" {:.0}%", ratio * 100.0));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        let eur = Currency::by_code("EUR").unwrap();
        assert_eq!(format_amount(Money::from_cents(1050), &eur), "€10.50");
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0, 10), "[░░░░░░░░░░] 0%");
        assert_eq!(progress_bar(1.0, 10), "[██████████] 100%");
        // Out-of-range input clamps
        assert_eq!(progress_bar(2.5, 10), "[██████████] 100%");
    }

    #[test]
    fn test_progress_bar_half() {
        assert_eq!(progress_bar(0.5, 10), "[█████░░░░░] 50%");
    }
}
