//! Remaining time until a task deadline.
//!
//! Pure functions: the caller passes "now" so results are reproducible.
//! Past deadlines keep their sign. Components are split with truncating
//! division, so `-1h30m` renders as `0日 -1時間 -30分` rather than mixing
//! floored and truncated parts.

use std::fmt;

use chrono::{DateTime, FixedOffset, Utc};

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Days, hours and minutes until a deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    millis: i64,
}

impl Remaining {
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self {
            days: millis / DAY_MS,
            hours: (millis % DAY_MS) / HOUR_MS,
            minutes: (millis % HOUR_MS) / MINUTE_MS,
            millis,
        }
    }

    /// True once the deadline has passed.
    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.millis < 0
    }
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}日 {}時間 {}分", self.days, self.hours, self.minutes)
    }
}

/// Time left from `now` until `limit`.
#[must_use]
pub fn remaining(limit: &DateTime<FixedOffset>, now: DateTime<Utc>) -> Remaining {
    let diff = limit.with_timezone(&Utc) - now;
    Remaining::from_millis(diff.num_milliseconds())
}

/// Formatted remaining time for a raw `limit` field.
///
/// Returns an empty string when the task has no deadline or the stored value
/// is not a valid RFC 3339 timestamp.
#[must_use]
pub fn remaining_label(limit: Option<&str>, now: DateTime<Utc>) -> String {
    let Some(raw) = limit.map(str::trim).filter(|raw| !raw.is_empty()) else {
        return String::new();
    };
    match DateTime::parse_from_rfc3339(raw) {
        Ok(deadline) => remaining(&deadline, now).to_string(),
        Err(e) => {
            tracing::warn!(limit = raw, error = %e, "ignoring unparseable task deadline");
            String::new()
        }
    }
}

#[cfg(test)]
#[path = "remaining_test.rs"]
mod tests;
