//! Time handling for upstream timestamps.
//!
//! Every canonical record carries an ISO-8601 UTC timestamp rendered with
//! millisecond precision and a `Z` suffix.

use chrono::{DateTime, Duration, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Render a UTC instant as `2024-01-15T12:00:00.000Z`.
pub fn to_iso(dt: DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Convert Unix epoch seconds to an ISO timestamp.
pub fn epoch_to_iso(secs: i64) -> Option<String> {
    Utc.timestamp_opt(secs, 0).single().map(to_iso)
}

/// Parse the timestamp shapes the upstreams emit.
///
/// Accepts RFC 3339, naive `YYYY-MM-DDTHH:MM:SS`, WeatherAPI's
/// `YYYY-MM-DD HH:MM` (treated as UTC), and bare dates.
pub fn parse_iso8601(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }

    NaiveDateTime::parse_from_str(&format!("{}T00:00:00", s), "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|ndt| Utc.from_utc_datetime(&ndt))
}

/// Normalize an upstream timestamp string, keeping it verbatim if unparseable.
pub fn normalize_iso(s: &str) -> String {
    parse_iso8601(s).map(to_iso).unwrap_or_else(|| s.to_string())
}

/// Open-ended trailing interval `[now - hours, ..]` in ISO-8601 interval form.
pub fn trailing_interval(now: DateTime<Utc>, hours: i64) -> String {
    format!("{}/..", to_iso(now - Duration::hours(hours)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_to_iso_millis_z() {
        let dt = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(to_iso(dt), "2024-01-15T12:00:00.000Z");
    }

    #[test]
    fn test_epoch_to_iso() {
        assert_eq!(epoch_to_iso(0).unwrap(), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_parse_weatherapi_local_format() {
        let dt = parse_iso8601("2024-06-01 14:30").unwrap();
        assert_eq!(dt.day(), 1);
        assert_eq!(dt.hour(), 14);
        assert_eq!(dt.minute(), 30);
    }

    #[test]
    fn test_trailing_interval() {
        let now = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        assert_eq!(trailing_interval(now, 2), "2024-01-15T10:00:00.000Z/..");
    }

    #[test]
    fn test_normalize_keeps_garbage() {
        assert_eq!(normalize_iso("not a time"), "not a time");
    }
}
