//! # Temporal Types — UTC Timestamps and the Clock Oracle
//!
//! `Timestamp` is UTC-only and truncated to seconds, rendered as
//! `YYYY-MM-DDTHH:MM:SSZ`. Non-UTC inputs are rejected by [`Timestamp::parse`].
//!
//! The registry stamps each credential with an issue date taken from a
//! [`Clock`]. Production code uses [`SystemClock`]; tests and fixtures use
//! [`ManualClock`] so that issue dates are predictable.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A UTC-only timestamp, truncated to seconds precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Current UTC time, truncated to seconds.
    pub fn now() -> Self {
        Self(truncate_to_seconds(Utc::now()))
    }

    /// From a `chrono::DateTime<Utc>`, truncating sub-seconds.
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(truncate_to_seconds(dt))
    }

    /// Parse an RFC 3339 string. Only the `Z` suffix is accepted; explicit
    /// offsets, `+00:00` included, are rejected.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        if !s.ends_with('Z') {
            return Err(CoreError::InvalidTimestamp(format!(
                "timestamp must use Z suffix (UTC only), got: {s:?}"
            )));
        }

        let dt = DateTime::parse_from_rfc3339(s).map_err(|e| {
            CoreError::InvalidTimestamp(format!("invalid RFC 3339 timestamp {s:?}: {e}"))
        })?;

        Ok(Self(truncate_to_seconds(dt.with_timezone(&Utc))))
    }

    /// From a Unix epoch value in seconds.
    pub fn from_epoch_secs(secs: i64) -> Result<Self, CoreError> {
        let dt = DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| CoreError::InvalidTimestamp(format!("invalid Unix timestamp: {secs}")))?;
        Ok(Self(dt))
    }

    /// Access the inner `DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Unix epoch seconds.
    pub fn epoch_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Render as ISO8601 with Z suffix (e.g., `2026-01-15T12:00:00Z`).
    pub fn to_iso8601(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso8601())
    }
}

fn truncate_to_seconds(dt: DateTime<Utc>) -> DateTime<Utc> {
    dt.with_nanosecond(0).unwrap_or(dt)
}

// ─── Clock ───────────────────────────────────────────────────────────

/// Source of "current time" for issuance timestamps.
pub trait Clock: Send + Sync {
    /// The current time.
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// A clock that only moves when told to.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
#[derive(Debug, Default)]
pub struct ManualClock {
    epoch_secs: AtomicI64,
}

impl ManualClock {
    /// A clock frozen at `start`.
    pub fn at(start: Timestamp) -> Self {
        Self {
            epoch_secs: AtomicI64::new(start.epoch_secs()),
        }
    }

    /// Move the clock forward by `secs` seconds, saturating at the ends of
    /// the `i64` range.
    pub fn advance(&self, secs: i64) {
        let _ = self
            .epoch_secs
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |now| Some(now.saturating_add(secs)));
    }

    /// Jump to an absolute time, forwards or backwards.
    pub fn set(&self, to: Timestamp) {
        self.epoch_secs.store(to.epoch_secs(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        let secs = self.epoch_secs.load(Ordering::SeqCst);
        // Out-of-range values can only come from advancing past chrono's limits.
        Timestamp::from_epoch_secs(secs).unwrap_or_else(|_| Timestamp::from_utc(DateTime::<Utc>::MAX_UTC))
    }
}

impl<C: Clock + ?Sized> Clock for std::sync::Arc<C> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn now_has_no_subseconds() {
        let ts = Timestamp::now();
        assert_eq!(ts.as_datetime().nanosecond(), 0);
    }

    #[test]
    fn from_utc_truncates() {
        let dt = Utc.with_ymd_and_hms(2026, 1, 15, 12, 30, 45).unwrap();
        let ts = Timestamp::from_utc(dt.with_nanosecond(123_456_789).unwrap());
        assert_eq!(ts.to_iso8601(), "2026-01-15T12:30:45Z");
    }

    #[test]
    fn parse_z_suffix_accepted() {
        let ts = Timestamp::parse("2026-01-15T12:00:00Z").unwrap();
        assert_eq!(ts.to_string(), "2026-01-15T12:00:00Z");
    }

    #[test]
    fn parse_offsets_rejected() {
        assert!(Timestamp::parse("2026-01-15T12:00:00+00:00").is_err());
        assert!(Timestamp::parse("2026-01-15T17:00:00+05:00").is_err());
    }

    #[test]
    fn parse_invalid_format() {
        assert!(Timestamp::parse("not-a-date").is_err());
        assert!(Timestamp::parse("").is_err());
    }

    #[test]
    fn manual_clock_is_frozen_until_advanced() {
        let start = Timestamp::parse("2026-03-01T09:00:00Z").unwrap();
        let clock = ManualClock::at(start);
        assert_eq!(clock.now(), start);
        assert_eq!(clock.now(), start);

        clock.advance(90);
        assert_eq!(clock.now().to_iso8601(), "2026-03-01T09:01:30Z");
    }

    #[test]
    fn manual_clock_advance_saturates() {
        let clock = ManualClock::at(Timestamp::parse("2026-03-01T09:00:00Z").unwrap());
        clock.advance(i64::MAX);
        assert_eq!(clock.epoch_secs.load(Ordering::SeqCst), i64::MAX);
        clock.advance(1);
        assert_eq!(clock.epoch_secs.load(Ordering::SeqCst), i64::MAX);
        assert_eq!(clock.now(), Timestamp::from_utc(DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn manual_clock_can_be_set_backwards() {
        let start = Timestamp::parse("2026-03-01T09:00:00Z").unwrap();
        let earlier = Timestamp::parse("2025-03-01T09:00:00Z").unwrap();
        let clock = ManualClock::at(start);
        clock.set(earlier);
        assert_eq!(clock.now(), earlier);
    }

    #[test]
    fn shared_clock_reads_through_arc() {
        let start = Timestamp::parse("2026-03-01T09:00:00Z").unwrap();
        let clock = std::sync::Arc::new(ManualClock::at(start));
        let handle = std::sync::Arc::clone(&clock);
        clock.advance(5);
        assert_eq!(handle.now().epoch_secs(), start.epoch_secs() + 5);
    }
}
