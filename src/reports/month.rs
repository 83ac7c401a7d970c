//! Monthly total projection
//!
//! Sums every entry whose creation timestamp falls in the same local
//! calendar month and year as `now`, by timestamp rather than bucket key.
//! Under clock-skew edge cases an entry's bucket key and timestamp can
//! disagree; this aggregate classifies by the entry's own timestamp, a
//! deliberate inconsistency with the day/week aggregates.

use chrono::{DateTime, Datelike, Local};

use crate::models::{Ledger, Money};

/// Total spend in `now`'s local calendar month
pub fn monthly_total(ledger: &Ledger, now: DateTime<Local>) -> Money {
    let (year, month) = (now.year(), now.month());
    ledger
        .entries()
        .filter(|(_, e)| {
            let local = e.timestamp.with_timezone(&Local);
            local.year() == year && local.month() == month
        })
        .map(|(_, e)| e.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryId, DayKey, EntryId, ExpenseEntry};
    use chrono::{TimeZone, Utc};

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn entry_at(cents: i64, y: i32, mo: u32, d: u32) -> ExpenseEntry {
        // Noon local, expressed in UTC storage form
        let local = Local.with_ymd_and_hms(y, mo, d, 12, 0, 0).unwrap();
        ExpenseEntry {
            id: EntryId::new(),
            amount: Money::from_cents(cents),
            timestamp: local.with_timezone(&Utc),
            category_id: CategoryId::new(),
            note: None,
        }
    }

    #[test]
    fn test_sums_only_current_month() {
        let mut ledger = Ledger::new();
        ledger.add(day("2024-03-05"), entry_at(500, 2024, 3, 5));
        ledger.add(day("2024-03-20"), entry_at(700, 2024, 3, 20));
        ledger.add(day("2024-02-28"), entry_at(900, 2024, 2, 28));

        let now = Local.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        assert_eq!(monthly_total(&ledger, now).cents(), 1200);
    }

    #[test]
    fn test_same_month_different_year_excluded() {
        let mut ledger = Ledger::new();
        ledger.add(day("2023-03-05"), entry_at(500, 2023, 3, 5));

        let now = Local.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        assert_eq!(monthly_total(&ledger, now), Money::zero());
    }

    #[test]
    fn test_classifies_by_timestamp_not_bucket_key() {
        let mut ledger = Ledger::new();
        // Clock skew: bucketed under an April key, but the entry's own
        // timestamp is in March
        ledger.add(day("2024-04-01"), entry_at(800, 2024, 3, 31));

        let march = Local.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        let april = Local.with_ymd_and_hms(2024, 4, 15, 10, 0, 0).unwrap();

        assert_eq!(monthly_total(&ledger, march).cents(), 800);
        assert_eq!(monthly_total(&ledger, april), Money::zero());
    }

    #[test]
    fn test_empty_ledger_is_zero() {
        let now = Local.with_ymd_and_hms(2024, 3, 15, 10, 0, 0).unwrap();
        assert_eq!(monthly_total(&Ledger::new(), now), Money::zero());
    }
}
