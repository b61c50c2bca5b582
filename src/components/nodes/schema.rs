/// GraphQL type definitions for the nodes this source creates
const TYPE_DEFINITIONS: &str = r#"
type EventAttachment {
    fileUrl: String
    title: String
}

type EventTime {
    date: Date
    dateTime: Date
    timeZone: String
}

type EventCoordinates {
    lat: Float
    long: Float
}

type EventOrganizer {
    email: String
    displayName: String
}

type GoogleCalendarEvent implements Node {
    id: ID!
    slug: String
    status: String
    start: EventTime
    end: EventTime
    summary: String
    organizer: EventOrganizer
    description: String
    location: String
    attachments: [EventAttachment]
    geoCoordinates: EventCoordinates
    created: Date
}
"#;

/// Schema declaration passed to the host's `create_types`
pub fn type_definitions() -> &'static str {
    TYPE_DEFINITIONS.trim()
}
