//! Relative Time Formatting
//!
//! Turns timestamps into "N units ago" strings for activity feeds.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Seconds per unit, largest unit first. The scan below returns on the first
/// unit that fits at least once.
const UNITS: &[(&str, i64)] = &[
    ("year", 31_536_000),
    ("month", 2_592_000),
    ("week", 604_800),
    ("day", 86_400),
    ("hour", 3_600),
    ("minute", 60),
    ("second", 1),
];

/// Format a timestamp string as time elapsed since now.
///
/// Accepts RFC 3339, `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD`. Absent, empty,
/// and unparseable input all render as an empty string so a bad stamp never
/// breaks a row.
pub fn time_ago(timestamp: Option<&str>) -> String {
    let raw = match timestamp {
        Some(s) if !s.is_empty() => s,
        _ => return String::new(),
    };

    match parse_timestamp(raw) {
        Some(then) => relative_from(then, Utc::now()),
        None => String::new(),
    }
}

/// Format the elapsed time between two instants.
///
/// Anything under one second, including instants in the future, renders as
/// "just now".
pub fn relative_from(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = (now - then).num_seconds();

    for &(unit, unit_seconds) in UNITS {
        let count = elapsed / unit_seconds;
        if count >= 1 {
            return if count == 1 {
                format!("1 {} ago", unit)
            } else {
                format!("{} {}s ago", count, unit)
            };
        }
    }

    "just now".to_string()
}

/// Parse the timestamp formats the ledger serves.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn base() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn zero_elapsed_is_just_now() {
        let now = base();
        assert_eq!(relative_from(now, now), "just now");
    }

    #[test]
    fn one_second() {
        let now = base();
        assert_eq!(relative_from(now - Duration::seconds(1), now), "1 second ago");
    }

    #[test]
    fn ninety_seconds_is_one_minute() {
        let now = base();
        assert_eq!(relative_from(now - Duration::seconds(90), now), "1 minute ago");
    }

    #[test]
    fn just_over_an_hour() {
        let now = base();
        assert_eq!(relative_from(now - Duration::seconds(3_700), now), "1 hour ago");
    }

    #[test]
    fn two_days() {
        let now = base();
        assert_eq!(relative_from(now - Duration::days(2), now), "2 days ago");
    }

    #[test]
    fn four_hundred_days_is_one_year() {
        let now = base();
        assert_eq!(relative_from(now - Duration::days(400), now), "1 year ago");
    }

    #[test]
    fn future_instants_render_just_now() {
        let now = base();
        assert_eq!(relative_from(now + Duration::seconds(30), now), "just now");
    }

    #[test]
    fn absent_and_empty_render_empty() {
        assert_eq!(time_ago(None), "");
        assert_eq!(time_ago(Some("")), "");
    }

    #[test]
    fn unparseable_renders_empty() {
        assert_eq!(time_ago(Some("not a date")), "");
        assert_eq!(time_ago(Some("2025-13-45")), "");
    }

    #[test]
    fn parses_ledger_timestamp_formats() {
        assert!(parse_timestamp("2025-06-15T12:00:00Z").is_some());
        assert!(parse_timestamp("2025-06-15T12:00:00+02:00").is_some());
        assert!(parse_timestamp("2025-06-15 12:00:00").is_some());
        assert!(parse_timestamp("2025-06-15").is_some());
    }

    #[test]
    fn time_ago_tracks_the_clock() {
        // Now-relative smoke check; 90 s sits far from both unit boundaries,
        // so the moment of the call cannot flip the result.
        let stamp = (Utc::now() - Duration::seconds(90)).to_rfc3339();
        assert_eq!(time_ago(Some(&stamp)), "1 minute ago");
    }

    #[test]
    fn singular_and_plural_for_every_unit() {
        let now = base();
        for &(unit, unit_seconds) in UNITS {
            let one = relative_from(now - Duration::seconds(unit_seconds), now);
            assert_eq!(one, format!("1 {} ago", unit));

            let two = relative_from(now - Duration::seconds(2 * unit_seconds), now);
            assert_eq!(two, format!("2 {}s ago", unit));
        }
    }

    #[test]
    fn chosen_unit_never_shrinks_as_duration_grows() {
        // Rank 0 = "just now", larger = larger unit.
        fn rank(rendered: &str) -> usize {
            UNITS
                .iter()
                .position(|(unit, _)| rendered.contains(unit))
                .map(|i| UNITS.len() - i)
                .unwrap_or(0)
        }

        let now = base();
        let samples: &[i64] = &[
            0, 1, 2, 59, 60, 61, 3_599, 3_600, 86_399, 86_400, 604_799,
            604_800, 2_591_999, 2_592_000, 31_535_999, 31_536_000, 99_999_999,
        ];

        let mut previous = 0;
        for &secs in samples {
            let current = rank(&relative_from(now - Duration::seconds(secs), now));
            assert!(
                current >= previous,
                "unit shrank at {} seconds: rank {} after {}",
                secs,
                current,
                previous
            );
            previous = current;
        }
    }
}
