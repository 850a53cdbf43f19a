// time.rs — Display timestamp formatting.
//
// All timestamps in Keel are UTC. Neither format emits a timezone suffix:
// these strings are for human display, not for interchange.

use chrono::{DateTime, Utc};

/// Format a timestamp as ISO 8601 with second precision and no timezone
/// suffix, e.g. `2024-01-15T10:30:00`.
///
/// Passing `None` formats the current UTC time.
pub fn format_timestamp(dt: Option<DateTime<Utc>>) -> String {
    let dt = dt.unwrap_or_else(Utc::now);
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}

/// Format a timestamp as `HH:MM:SS`, e.g. `10:30:45`.
///
/// Passing `None` formats the current UTC time.
pub fn format_timestamp_short(dt: Option<DateTime<Utc>>) -> String {
    let dt = dt.unwrap_or_else(Utc::now);
    dt.format("%H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};

    #[test]
    fn iso_format_has_second_precision_and_no_offset() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 14, 30, 45).unwrap();
        assert_eq!(format_timestamp(Some(dt)), "2024-06-15T14:30:45");
    }

    #[test]
    fn short_format_zero_pads_fields() {
        let dt = Utc.with_ymd_and_hms(2024, 6, 15, 9, 5, 3).unwrap();
        assert_eq!(format_timestamp_short(Some(dt)), "09:05:03");
    }

    #[test]
    fn none_formats_current_time() {
        let before = Utc::now();
        let formatted = format_timestamp(None);
        let after = Utc::now();

        let parsed = chrono::NaiveDateTime::parse_from_str(&formatted, "%Y-%m-%dT%H:%M:%S")
            .unwrap()
            .and_utc();
        // Second precision truncates sub-second components, so compare
        // against a window widened to whole seconds.
        assert!(parsed >= before.with_nanosecond(0).unwrap());
        assert!(parsed <= after);
    }

    #[test]
    fn none_short_format_shape() {
        let formatted = format_timestamp_short(None);
        let parts: Vec<&str> = formatted.split(':').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts.iter().all(|p| p.len() == 2));
    }
}
