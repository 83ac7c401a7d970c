//! Ledger service
//!
//! The narrow mutation API over spend data: entry CRUD, day-bucket
//! initialization, and the budget/currency/quick-amount setters. Every
//! mutation applies to in-memory state first; persistence is queued (or
//! written) afterwards. Persistence failures are logged and swallowed, so
//! in-memory state remains the source of truth for the session.

use tracing::{debug, warn};

use crate::error::SpendResult;
use crate::models::{CategoryId, Currency, DayKey, EntryId, ExpenseEntry, Money};
use crate::storage::Storage;

/// Service for ledger mutations
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create the bucket for `day` if it doesn't exist yet. Idempotent:
    /// when the day is already touched nothing changes and nothing is
    /// re-persisted.
    pub fn ensure_day(&self, day: DayKey) -> SpendResult<()> {
        if self.storage.ledger.ensure_day(day)? {
            debug!("initialized bucket for {}", day);
            self.persist_ledger();
        }
        Ok(())
    }

    /// Add an entry to `day`'s bucket
    ///
    /// Non-positive amounts are silently rejected (`Ok(None)`, no-op).
    /// Otherwise the entry gets a fresh id and a now timestamp, the bucket
    /// is created if absent, and the ledger is queued for persistence.
    pub fn add_entry(
        &self,
        day: DayKey,
        amount: Money,
        category_id: CategoryId,
        note: Option<String>,
    ) -> SpendResult<Option<EntryId>> {
        if !amount.is_positive() {
            debug!("ignoring non-positive amount {}", amount);
            return Ok(None);
        }

        let entry = ExpenseEntry::new(amount, category_id, note);
        let id = entry.id;
        self.storage.ledger.add(day, entry)?;
        self.persist_ledger();
        Ok(Some(id))
    }

    /// Remove the entry with the given id from `day`'s bucket
    ///
    /// Deleting a non-existent id is an idempotent no-op, not a fault.
    /// Returns true if an entry was removed.
    pub fn delete_entry(&self, day: DayKey, id: EntryId) -> SpendResult<bool> {
        let removed = self.storage.ledger.remove(day, id)?.is_some();
        if removed {
            self.persist_ledger();
        }
        Ok(removed)
    }

    /// Replace `day`'s bucket with an empty list
    ///
    /// The caller is responsible for confirming destructive intent before
    /// calling; the service performs no confirmation.
    pub fn clear_day(&self, day: DayKey) -> SpendResult<()> {
        self.storage.ledger.clear_day(day)?;
        self.persist_ledger();
        Ok(())
    }

    /// Set the daily budget. Non-positive amounts are silently ignored.
    /// Returns true if the budget changed.
    pub fn set_budget(&self, amount: Money) -> SpendResult<bool> {
        if !amount.is_positive() {
            debug!("ignoring non-positive budget {}", amount);
            return Ok(false);
        }
        self.storage.budget.set(amount)?;
        self.persist("budget", self.storage.budget.save());
        Ok(true)
    }

    /// Select the display currency
    pub fn set_currency(&self, currency: Currency) -> SpendResult<()> {
        self.storage.currency.set(currency)?;
        self.persist("currency", self.storage.currency.save());
        Ok(())
    }

    /// Add a quick-add amount (deduplicated, kept sorted ascending).
    /// Returns true if the set changed.
    pub fn add_quick_amount(&self, amount: Money) -> SpendResult<bool> {
        let changed = self.storage.quick_amounts.add(amount)?;
        if changed {
            self.persist("quick amounts", self.storage.quick_amounts.save());
        }
        Ok(changed)
    }

    /// Remove a quick-add amount; idempotent no-op if absent.
    /// Returns true if the set changed.
    pub fn remove_quick_amount(&self, amount: Money) -> SpendResult<bool> {
        let changed = self.storage.quick_amounts.remove(amount)?;
        if changed {
            self.persist("quick amounts", self.storage.quick_amounts.save());
        }
        Ok(changed)
    }

    /// Queue the ledger for write-behind persistence, swallowing failures
    fn persist_ledger(&self) {
        if let Err(e) = self.storage.ledger.persist() {
            warn!("failed to queue ledger persistence: {}", e);
        }
    }

    /// Log and swallow a synchronous persistence failure
    fn persist(&self, what: &str, result: SpendResult<()>) {
        if let Err(e) = result {
            warn!("failed to persist {}: {}", what, e);
        }
    }
}
