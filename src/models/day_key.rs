//! Calendar-day keys for the ledger
//!
//! A `DayKey` identifies one calendar day in the device's local calendar and
//! is the bucketing key for the ledger. Keys format as `YYYY-MM-DD`
//! (zero-padded, locale-independent), so their lexicographic order matches
//! chronological order.

use chrono::{DateTime, Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A single local calendar day, used as the ledger bucket key
///
/// The mapping from instants to keys is total and deterministic: every
/// instant on the same local calendar day yields the same key, and no two
/// distinct days share a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayKey(NaiveDate);

impl DayKey {
    /// The key for the local calendar day containing the given instant
    pub fn today(now: DateTime<Local>) -> Self {
        Self(now.date_naive())
    }

    /// The key for the current wall-clock day
    pub fn now() -> Self {
        Self::today(Local::now())
    }

    /// Wrap an existing calendar date
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// The underlying calendar date
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The key `n` days before this one
    pub fn days_back(&self, n: u64) -> Self {
        Self(self.0 - chrono::Duration::days(n as i64))
    }

    /// Year component
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month component (1-12)
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day-of-month component (1-31)
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}",
            self.0.year(),
            self.0.month(),
            self.0.day()
        )
    }
}

impl FromStr for DayKey {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(NaiveDate::parse_from_str(s, "%Y-%m-%d")?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn local(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn test_same_day_same_key() {
        let morning = local(2024, 3, 5, 0, 0);
        let night = local(2024, 3, 5, 23, 59);
        assert_eq!(DayKey::today(morning), DayKey::today(night));
    }

    #[test]
    fn test_different_days_different_keys() {
        let before_midnight = local(2024, 3, 5, 23, 59);
        let after_midnight = local(2024, 3, 6, 0, 1);
        assert_ne!(DayKey::today(before_midnight), DayKey::today(after_midnight));
    }

    #[test]
    fn test_display_zero_padded() {
        let key = DayKey::from_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap());
        assert_eq!(key.to_string(), "2024-01-05");
    }

    #[test]
    fn test_parse_round_trip() {
        let key: DayKey = "2024-12-31".parse().unwrap();
        assert_eq!(key.to_string(), "2024-12-31");
        assert!("not-a-date".parse::<DayKey>().is_err());
    }

    #[test]
    fn test_ordering_matches_chronology() {
        let a: DayKey = "2024-01-31".parse().unwrap();
        let b: DayKey = "2024-02-01".parse().unwrap();
        assert!(a < b);
        // Lexicographic string order agrees
        assert!(a.to_string() < b.to_string());
    }

    #[test]
    fn test_days_back() {
        let key: DayKey = "2024-03-01".parse().unwrap();
        assert_eq!(key.days_back(1).to_string(), "2024-02-29");
        assert_eq!(key.days_back(0), key);
    }

    #[test]
    fn test_serialization_as_string() {
        let key: DayKey = "2024-06-07".parse().unwrap();
        let json = serde_json::to_string(&key).unwrap();
        assert_eq!(json, "\"2024-06-07\"");
        let back: DayKey = serde_json::from_str(&json).unwrap();
        assert_eq!(key, back);
    }
}
