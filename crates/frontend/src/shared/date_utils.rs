/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application
use chrono::{DateTime, SecondsFormat, Utc};

/// Format ISO datetime string to DD.MM.YYYY HH:MM:SS format
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part
                    .split(['.', 'Z', '+'])
                    .next()
                    .unwrap_or(time_part);
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Same as `format_datetime`, for an optional value ("—" when absent)
pub fn format_datetime_opt(value: Option<&str>) -> String {
    value.map(format_datetime).unwrap_or_else(|| "—".to_string())
}

/// Export file name: `{prefix}-{ISO-8601 with ':' and '.' replaced by '-'}.csv`
/// Example: "audit-log", 2024-03-15T14:02:26.123Z -> "audit-log-2024-03-15T14-02-26-123Z.csv"
pub fn export_file_name(prefix: &str, now: DateTime<Utc>) -> String {
    let stamp = now
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    format!("{}-{}.csv", prefix, stamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(
            format_datetime("2024-12-31T23:59:59Z"),
            "31.12.2024 23:59:59"
        );
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_datetime_opt(None), "—");
    }

    #[test]
    fn test_export_file_name() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 2, 26).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(
            export_file_name("audit-log", now),
            "audit-log-2024-03-15T14-02-26-123Z.csv"
        );
    }
}
