//! Timestamp formatting utilities
//!
//! Log lines carry an RFC 3339 UTC timestamp with nanosecond precision and
//! trailing zeros trimmed, left-aligned in a fixed-width column so that the
//! level column lines up regardless of the fractional part.

use chrono::{DateTime, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

/// Width of the timestamp column in standard log lines
pub const TIMESTAMP_COLUMN_WIDTH: usize = 35;

/// Format `datetime` as RFC 3339 with up to nine fractional digits
///
/// # Examples
///
/// ```
/// use rust_logger_facade::core::timestamp::format_rfc3339_nanos;
/// use chrono::TimeZone;
///
/// let dt = chrono::Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(format_rfc3339_nanos(&dt), "2025-01-08T10:30:45Z");
/// ```
#[must_use]
pub fn format_rfc3339_nanos(datetime: &DateTime<Utc>) -> String {
    let base = datetime.format("%Y-%m-%dT%H:%M:%S");
    let nanos = datetime.timestamp_subsec_nanos();
    if nanos == 0 {
        return format!("{}Z", base);
    }

    let fraction = format!("{:09}", nanos);
    format!("{}.{}Z", base, fraction.trim_end_matches('0'))
}

/// Timestamp padded to [`TIMESTAMP_COLUMN_WIDTH`]
#[must_use]
pub fn format_padded(datetime: &DateTime<Utc>) -> String {
    format!(
        "{:<width$}",
        format_rfc3339_nanos(datetime),
        width = TIMESTAMP_COLUMN_WIDTH
    )
}

/// Wall clock that never goes backwards
///
/// Shared by every logger derived from one root, so lines written through a
/// logger tree carry non-decreasing timestamps even if the system clock is
/// stepped back.
#[derive(Debug, Default)]
pub struct MonotonicClock {
    last_nanos: AtomicI64,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current time, clamped to be no earlier than the previous reading
    pub fn now(&self) -> DateTime<Utc> {
        self.observe(Utc::now())
    }

    fn observe(&self, candidate: DateTime<Utc>) -> DateTime<Utc> {
        let Some(candidate_nanos) = candidate.timestamp_nanos_opt() else {
            return candidate;
        };
        let previous = self.last_nanos.fetch_max(candidate_nanos, Ordering::AcqRel);
        if previous > candidate_nanos {
            DateTime::from_timestamp_nanos(previous)
        } else {
            candidate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_trailing_zeros_trimmed() {
        assert_eq!(
            format_rfc3339_nanos(&fixed_datetime()),
            "2025-01-08T10:30:45.123456Z"
        );

        let dt = fixed_datetime() + chrono::Duration::nanoseconds(7);
        assert_eq!(format_rfc3339_nanos(&dt), "2025-01-08T10:30:45.123456007Z");
    }

    #[test]
    fn test_padded_width() {
        let padded = format_padded(&fixed_datetime());
        assert_eq!(padded.len(), TIMESTAMP_COLUMN_WIDTH);
        assert!(padded.starts_with("2025-01-08T10:30:45.123456Z "));
    }

    #[test]
    fn test_clock_never_goes_backwards() {
        let clock = MonotonicClock::new();
        let later = fixed_datetime();
        let earlier = later - chrono::Duration::seconds(5);

        assert_eq!(clock.observe(later), later);
        assert_eq!(clock.observe(earlier), later);
        assert!(clock.now() >= later);
    }
}
