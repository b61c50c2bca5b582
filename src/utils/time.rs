use chrono::{DateTime, FixedOffset, ParseError};
use chrono_tz::Tz;

/// Format used for the date segment of slugs
pub const SLUG_DATE_FORMAT: &str = "%m-%d-%Y";

/// Parse an RFC 3339 timestamp, keeping its offset
pub fn parse_timestamp(timestamp: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_rfc3339(timestamp)
}

/// Calendar date of a timestamp as `MM-DD-YYYY`.
///
/// The date is taken in `time_zone` when it names a known IANA zone, otherwise in
/// the timestamp's own offset.
pub fn format_local_date(timestamp: &str, time_zone: Option<&str>) -> Result<String, ParseError> {
    let parsed = parse_timestamp(timestamp)?;

    let formatted = match time_zone.and_then(|tz| tz.parse::<Tz>().ok()) {
        Some(tz) => parsed.with_timezone(&tz).format(SLUG_DATE_FORMAT).to_string(),
        None => parsed.format(SLUG_DATE_FORMAT).to_string(),
    };
    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utc_timestamp() {
        assert_eq!(
            format_local_date("2024-05-01T18:00:00Z", None).unwrap(),
            "05-01-2024"
        );
    }

    #[test]
    fn test_offset_is_respected() {
        // 23:30 in Helsinki is still May 1st locally
        assert_eq!(
            format_local_date("2024-05-01T23:30:00+03:00", None).unwrap(),
            "05-01-2024"
        );
    }

    #[test]
    fn test_time_zone_wins_over_offset() {
        assert_eq!(
            format_local_date("2024-05-01T23:30:00Z", Some("Europe/Helsinki")).unwrap(),
            "05-02-2024"
        );
        assert_eq!(
            format_local_date("2024-05-01T23:30:00Z", Some("Not/AZone")).unwrap(),
            "05-01-2024"
        );
    }

    #[test]
    fn test_garbage_is_error() {
        assert!(format_local_date("tomorrow", None).is_err());
    }
}
