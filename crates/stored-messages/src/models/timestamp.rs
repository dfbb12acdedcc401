//! Fixed-format UTC timestamps for stored messages
//!
//! Pure functions that can be tested without a clock.

use chrono::{DateTime, Timelike, Utc};

/// Format an instant as `YYYY-MM-DDTHH:MM:SS.mmmZ`, or `YYYY-MM-DDTHH:MM:SSZ`
/// when it has no sub-second part.
///
/// Precision is truncated to milliseconds. The fractional part is only
/// written when the microsecond component is nonzero, so an instant with
/// 123 microseconds still renders as `.000`.
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    let micros = at.nanosecond() % 1_000_000_000 / 1_000;
    if micros == 0 {
        at.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    } else {
        format!(
            "{}.{:03}Z",
            at.format("%Y-%m-%dT%H:%M:%S"),
            micros / 1_000
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(nanos: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 2)
            .unwrap()
            .with_nanosecond(nanos)
            .unwrap()
    }

    #[test]
    fn test_whole_seconds_have_no_fraction() {
        assert_eq!(format_timestamp(at(0)), "2024-03-09T07:05:02Z");
    }

    #[test]
    fn test_microseconds_truncate_to_millis() {
        assert_eq!(format_timestamp(at(123_456_000)), "2024-03-09T07:05:02.123Z");
        assert_eq!(format_timestamp(at(999_999_000)), "2024-03-09T07:05:02.999Z");
    }

    #[test]
    fn test_sub_millisecond_keeps_zero_fraction() {
        assert_eq!(format_timestamp(at(456_000)), "2024-03-09T07:05:02.000Z");
    }

    #[test]
    fn test_nanoseconds_below_microsecond_are_ignored() {
        assert_eq!(format_timestamp(at(500)), "2024-03-09T07:05:02Z");
    }
}
