//! The day-keyed expense ledger
//!
//! The ledger maps calendar-day keys to insertion-ordered buckets of
//! expense entries. A key, once touched, always maps to a list (possibly
//! empty) and is never removed: clearing a day empties its bucket but the
//! day still counts as "touched" for the running average.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::day_key::DayKey;
use super::entry::ExpenseEntry;
use super::ids::EntryId;
use super::money::Money;

/// Day-keyed collection of expense entries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    days: BTreeMap<DayKey, Vec<ExpenseEntry>>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the bucket for `day` if absent. Returns true if a bucket was
    /// created, false if the day was already touched. Idempotent.
    pub fn ensure_day(&mut self, day: DayKey) -> bool {
        if self.days.contains_key(&day) {
            false
        } else {
            self.days.insert(day, Vec::new());
            true
        }
    }

    /// Append an entry to `day`'s bucket, creating the bucket if absent
    pub fn add(&mut self, day: DayKey, entry: ExpenseEntry) {
        self.days.entry(day).or_default().push(entry);
    }

    /// Remove the entry with the given id from `day`'s bucket
    ///
    /// Returns the removed entry, or `None` if no such entry exists
    /// (idempotent no-op, not an error).
    pub fn remove(&mut self, day: DayKey, id: EntryId) -> Option<ExpenseEntry> {
        let bucket = self.days.get_mut(&day)?;
        let pos = bucket.iter().position(|e| e.id == id)?;
        Some(bucket.remove(pos))
    }

    /// Replace `day`'s bucket with an empty list; the key stays touched
    pub fn clear_day(&mut self, day: DayKey) {
        self.days.insert(day, Vec::new());
    }

    /// The bucket for `day`, if the day has been touched
    pub fn bucket(&self, day: DayKey) -> Option<&[ExpenseEntry]> {
        self.days.get(&day).map(|v| v.as_slice())
    }

    /// Whether `day` has been touched (has a bucket, possibly empty)
    pub fn contains_day(&self, day: DayKey) -> bool {
        self.days.contains_key(&day)
    }

    /// Sum of amounts in `day`'s bucket; an absent bucket counts as zero
    pub fn day_total(&self, day: DayKey) -> Money {
        self.days
            .get(&day)
            .map(|bucket| bucket.iter().map(|e| e.amount).sum())
            .unwrap_or_else(Money::zero)
    }

    /// Number of day keys ever touched, including cleared/empty ones
    pub fn touched_day_count(&self) -> usize {
        self.days.len()
    }

    /// Sum of all entry amounts across every bucket
    pub fn total_all_time(&self) -> Money {
        self.entries().map(|(_, e)| e.amount).sum()
    }

    /// Iterate over every entry with its day key, in day order
    pub fn entries(&self) -> impl Iterator<Item = (DayKey, &ExpenseEntry)> {
        self.days
            .iter()
            .flat_map(|(day, bucket)| bucket.iter().map(move |e| (*day, e)))
    }

    /// All entries flattened across buckets, newest timestamp first
    pub fn entries_by_time_desc(&self) -> Vec<(DayKey, &ExpenseEntry)> {
        let mut all: Vec<_> = self.entries().collect();
        all.sort_by(|a, b| b.1.timestamp.cmp(&a.1.timestamp));
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ids::CategoryId;

    fn day(s: &str) -> DayKey {
        s.parse().unwrap()
    }

    fn entry(cents: i64) -> ExpenseEntry {
        ExpenseEntry::new(Money::from_cents(cents), CategoryId::new(), None)
    }

    #[test]
    fn test_ensure_day_idempotent() {
        let mut ledger = Ledger::new();
        assert!(ledger.ensure_day(day("2024-01-01")));
        assert!(!ledger.ensure_day(day("2024-01-01")));
        assert_eq!(ledger.touched_day_count(), 1);
        assert_eq!(ledger.bucket(day("2024-01-01")), Some(&[][..]));
    }

    #[test]
    fn test_add_creates_bucket() {
        let mut ledger = Ledger::new();
        ledger.add(day("2024-01-01"), entry(500));
        assert!(ledger.contains_day(day("2024-01-01")));
        assert_eq!(ledger.day_total(day("2024-01-01")).cents(), 500);
    }

    #[test]
    fn test_add_then_remove_round_trip() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        ledger.add(d, entry(500));
        let before = ledger.bucket(d).unwrap().to_vec();

        let e = entry(1200);
        let id = e.id;
        ledger.add(d, e);
        assert_eq!(ledger.day_total(d).cents(), 1700);

        ledger.remove(d, id).unwrap();
        assert_eq!(ledger.bucket(d).unwrap(), before.as_slice());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        ledger.add(d, entry(500));

        assert!(ledger.remove(d, EntryId::new()).is_none());
        assert!(ledger.remove(day("2024-01-02"), EntryId::new()).is_none());
        assert_eq!(ledger.day_total(d).cents(), 500);
    }

    #[test]
    fn test_clear_day_keeps_key_touched() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        ledger.add(d, entry(500));
        ledger.clear_day(d);

        assert!(ledger.contains_day(d));
        assert_eq!(ledger.day_total(d), Money::zero());
        assert_eq!(ledger.touched_day_count(), 1);
    }

    #[test]
    fn test_clear_untouched_day_touches_it() {
        let mut ledger = Ledger::new();
        ledger.clear_day(day("2024-01-01"));
        assert_eq!(ledger.touched_day_count(), 1);
    }

    #[test]
    fn test_day_total_absent_is_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.day_total(day("2024-01-01")), Money::zero());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut ledger = Ledger::new();
        let d = day("2024-01-01");
        let (a, b, c) = (entry(100), entry(200), entry(300));
        let ids = [a.id, b.id, c.id];
        ledger.add(d, a);
        ledger.add(d, b);
        ledger.add(d, c);

        let bucket = ledger.bucket(d).unwrap();
        let got: Vec<_> = bucket.iter().map(|e| e.id).collect();
        assert_eq!(got, ids);
    }

    #[test]
    fn test_total_all_time() {
        let mut ledger = Ledger::new();
        ledger.add(day("2024-01-01"), entry(1000));
        ledger.add(day("2024-01-02"), entry(250));
        assert_eq!(ledger.total_all_time().cents(), 1250);
    }

    #[test]
    fn test_serialization_keys_are_day_strings() {
        let mut ledger = Ledger::new();
        ledger.add(day("2024-01-05"), entry(100));
        let json = serde_json::to_string(&ledger).unwrap();
        assert!(json.contains("\"2024-01-05\""));

        let back: Ledger = serde_json::from_str(&json).unwrap();
        assert_eq!(ledger, back);
    }
}
