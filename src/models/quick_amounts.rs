//! Quick-tap amount shortcuts
//!
//! A deduplicated, ascending-sorted set of positive amounts offered as
//! one-tap shortcuts for logging a spend.

use serde::{Deserialize, Serialize};

use super::money::Money;

/// Ordered set of quick-add amounts
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuickAmounts(Vec<Money>);

impl QuickAmounts {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// The default shortcuts shipped on first run
    pub fn defaults() -> Self {
        Self(vec![
            Money::from_units(1),
            Money::from_units(5),
            Money::from_units(10),
            Money::from_units(20),
        ])
    }

    /// Add an amount, keeping the set deduplicated and sorted ascending.
    /// Non-positive amounts are rejected. Returns true if the set changed.
    pub fn add(&mut self, amount: Money) -> bool {
        if !amount.is_positive() || self.0.contains(&amount) {
            return false;
        }
        self.0.push(amount);
        self.0.sort();
        true
    }

    /// Remove an amount; no-op if absent. Returns true if the set changed.
    pub fn remove(&mut self, amount: Money) -> bool {
        let before = self.0.len();
        self.0.retain(|&a| a != amount);
        self.0.len() != before
    }

    /// The amounts in ascending order
    pub fn as_slice(&self) -> &[Money] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_keeps_sorted() {
        let mut quick = QuickAmounts::new();
        assert!(quick.add(Money::from_units(10)));
        assert!(quick.add(Money::from_units(2)));
        assert!(quick.add(Money::from_cents(550)));

        let cents: Vec<_> = quick.as_slice().iter().map(|m| m.cents()).collect();
        assert_eq!(cents, vec![200, 550, 1000]);
    }

    #[test]
    fn test_add_deduplicates() {
        let mut quick = QuickAmounts::new();
        assert!(quick.add(Money::from_units(5)));
        assert!(!quick.add(Money::from_units(5)));
        assert_eq!(quick.len(), 1);
    }

    #[test]
    fn test_add_rejects_non_positive() {
        let mut quick = QuickAmounts::new();
        assert!(!quick.add(Money::zero()));
        assert!(!quick.add(Money::from_cents(-100)));
        assert!(quick.is_empty());
    }

    #[test]
    fn test_remove_idempotent() {
        let mut quick = QuickAmounts::defaults();
        let len = quick.len();

        assert!(quick.remove(Money::from_units(5)));
        assert_eq!(quick.len(), len - 1);
        assert!(!quick.remove(Money::from_units(5)));
        assert_eq!(quick.len(), len - 1);
    }

    #[test]
    fn test_defaults_sorted() {
        let quick = QuickAmounts::defaults();
        let amounts = quick.as_slice();
        assert!(amounts.windows(2).all(|w| w[0] < w[1]));
    }
}
