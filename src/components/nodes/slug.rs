use crate::components::geocoding::location::hyphenate;
use crate::components::google_calendar::CalendarEvent;
use crate::error::{malformed_event, SourceResult};
use crate::utils::time::format_local_date;

/// Build the `<date>/<summary>` slug of an event.
///
/// Whole-day events use their date verbatim, timed events their local calendar
/// date as `MM-DD-YYYY`.
pub fn build_slug(event: &CalendarEvent) -> SourceResult<String> {
    let summary = event
        .summary
        .as_deref()
        .ok_or_else(|| malformed_event(&event.id, "missing summary"))?;
    let start = event
        .start
        .as_ref()
        .ok_or_else(|| malformed_event(&event.id, "missing start"))?;

    let whole_day = start.date.as_deref().filter(|date| !date.is_empty());
    let date = match (whole_day, start.date_time.as_deref()) {
        (Some(date), _) => date.to_string(),
        (None, Some(date_time)) => format_local_date(date_time, start.time_zone.as_deref())
            .map_err(|e| malformed_event(&event.id, &format!("invalid start dateTime: {}", e)))?,
        (None, None) => {
            return Err(malformed_event(
                &event.id,
                "start has neither date nor dateTime",
            ))
        }
    };

    Ok(format!("{}/{}", date, hyphenate(summary)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::google_calendar::EventTime;
    use crate::error::SourceError;

    fn event(summary: Option<&str>, start: Option<EventTime>) -> CalendarEvent {
        CalendarEvent {
            id: "evt".to_string(),
            summary: summary.map(str::to_string),
            start,
            ..Default::default()
        }
    }

    #[test]
    fn test_whole_day_event() {
        let event = event(Some("Art Opening!"), Some(EventTime::date("2024-05-01")));
        assert_eq!(build_slug(&event).unwrap(), "2024-05-01/art-opening");
    }

    #[test]
    fn test_timed_event() {
        let event = event(
            Some("Board Meeting #3"),
            Some(EventTime::date_time("2024-05-01T18:00:00Z")),
        );
        assert_eq!(build_slug(&event).unwrap(), "05-01-2024/board-meeting-3");
    }

    #[test]
    fn test_missing_summary() {
        let event = event(None, Some(EventTime::date("2024-05-01")));
        assert!(matches!(
            build_slug(&event),
            Err(SourceError::MalformedEvent { ref id, .. }) if id == "evt"
        ));
    }

    #[test]
    fn test_missing_start() {
        assert!(build_slug(&event(Some("Talk"), None)).is_err());
        assert!(build_slug(&event(Some("Talk"), Some(EventTime::default()))).is_err());
    }

    #[test]
    fn test_unparsable_date_time() {
        let event = event(Some("Talk"), Some(EventTime::date_time("soon")));
        assert!(build_slug(&event).is_err());
    }
}
