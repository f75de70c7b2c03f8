//! Wall-clock source for the `index_date` field

use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

/// `yyyyMMddHHmmss`, UTC, second resolution. Sorts lexically by time.
pub const INDEX_DATE_FORMAT: &str = "%Y%m%d%H%M%S";

/// Source of the current time
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// The system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }

    /// Fixed at a Unix timestamp in seconds; `None` when out of range
    pub fn at_timestamp(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Render an instant in the `index_date` format
pub fn format_index_date(instant: &DateTime<Utc>) -> String {
    instant.format(INDEX_DATE_FORMAT).to_string()
}
