//! Day clock
//!
//! Tracks the authoritative "current day key" and detects calendar-day
//! transitions. Two independent producers feed it (the periodic tick and
//! the terminal focus-gained event) and both funnel into the one
//! idempotent `refresh` reducer, so no ordering between them matters:
//! refreshing twice with the same resolved key is a no-op.

use chrono::{DateTime, Local};
use tracing::debug;

use crate::models::DayKey;

/// A detected day transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayChange {
    /// The key that was current before the transition
    pub previous: DayKey,
    /// The key that is current now
    pub current: DayKey,
}

/// Tracks the current calendar-day key
#[derive(Debug, Clone)]
pub struct DayClock {
    current: DayKey,
}

impl DayClock {
    /// Create a clock tracking the day containing the given instant
    pub fn new(now: DateTime<Local>) -> Self {
        Self {
            current: DayKey::today(now),
        }
    }

    /// Create a clock tracking the current wall-clock day
    pub fn start() -> Self {
        Self::new(Local::now())
    }

    /// The currently tracked day key
    pub fn current(&self) -> DayKey {
        self.current
    }

    /// Re-evaluate the day key for the given instant
    ///
    /// Returns the transition if the computed key differs from the tracked
    /// one, `None` otherwise. A backward clock movement (timezone change,
    /// manual adjustment) is not an error: the older key simply becomes
    /// current again and new entries land in its existing bucket.
    pub fn refresh(&mut self, now: DateTime<Local>) -> Option<DayChange> {
        let computed = DayKey::today(now);
        if computed == self.current {
            return None;
        }

        let change = DayChange {
            previous: self.current,
            current: computed,
        };
        debug!("day rolled over: {} -> {}", change.previous, change.current);
        self.current = computed;
        Some(change)
    }
}
