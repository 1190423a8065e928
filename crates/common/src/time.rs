use chrono::{DateTime, SecondsFormat, Utc};

/// Returns the current UTC time as an ISO-8601 string with millisecond precision.
pub fn timestamp() -> String {
    format_timestamp(Utc::now())
}

/// Renders `at` in the same format as [`timestamp`].
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn formats_with_millis_and_zulu_suffix() {
        let at = Utc.with_ymd_and_hms(2026, 10, 15, 9, 30, 0).unwrap();
        assert_eq!(format_timestamp(at), "2026-10-15T09:30:00.000Z");
    }

    #[test]
    fn timestamp_parses_back() {
        let ts = timestamp();
        assert!(ts.ends_with('Z'));
        assert!(DateTime::parse_from_rfc3339(&ts).is_ok());
    }
}
