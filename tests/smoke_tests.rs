use calendar_event_source::config::{SourceOptions, DEFAULT_INCLUDED_FIELDS, DEFAULT_SCOPES};
use calendar_event_source::error::SourceError;
use std::collections::HashMap;
use std::io::Write;

/// Smoke test for the default options
#[test]
fn test_default_options() {
    let options = SourceOptions::default();

    assert_eq!(options.included_fields.len(), DEFAULT_INCLUDED_FIELDS.len());
    assert!(options.included_fields.contains(&"slug".to_string()));
    assert_eq!(options.scopes.len(), DEFAULT_SCOPES.len());
    assert!(options.time_min < options.time_max);
    assert!(!options.geocoding_enabled());
}

/// An empty calendar id is rejected
#[test]
fn test_validate_requires_calendar_id() {
    let options = SourceOptions::default();
    assert!(matches!(options.validate(), Err(SourceError::Config(_))));

    let options = SourceOptions {
        calendar_id: "team@example.com".to_string(),
        ..Default::default()
    };
    assert!(options.validate().is_ok());
}

/// Options file keys are camelCase and missing keys keep their defaults
#[test]
fn test_options_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
calendarId = "team@example.com"
includedFields = ["summary", "location"]
geoCodeApiKey = "maps-key"
timeMin = "2024-01-01T00:00:00Z"
timeMax = "2025-01-01T00:00:00Z"
"#
    )
    .unwrap();

    let options = SourceOptions::from_file(file.path()).unwrap();

    assert_eq!(options.calendar_id, "team@example.com");
    assert_eq!(options.included_fields, vec!["summary", "location"]);
    assert!(options.geocoding_enabled());
    assert_eq!(options.time_min.to_rfc3339(), "2024-01-01T00:00:00+00:00");
    assert_eq!(options.request_timeout_secs, 30);
    assert!(options.validate().is_ok());
}

/// A broken options file is an error, not silently ignored
#[test]
fn test_invalid_options_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "calendarId = [").unwrap();

    assert!(matches!(
        SourceOptions::from_file(file.path()),
        Err(SourceError::Serialization(_))
    ));
}

/// Environment overrides win over file values; empty values are ignored
#[test]
fn test_environment_overrides() {
    let env: HashMap<&str, &str> = HashMap::from([
        ("GOOGLE_CALENDAR_ID", "override@example.com"),
        ("GOOGLE_MAPS_API_KEY", ""),
        ("GOOGLE_ASSUMED_USER", "admin@example.com"),
    ]);

    let options = SourceOptions {
        calendar_id: "file@example.com".to_string(),
        geo_code_api_key: Some("file-key".to_string()),
        ..Default::default()
    }
    .with_overrides(|name| env.get(name).map(|value| value.to_string()));

    assert_eq!(options.calendar_id, "override@example.com");
    assert_eq!(options.geo_code_api_key.as_deref(), Some("file-key"));
    assert_eq!(options.assumed_user.as_deref(), Some("admin@example.com"));
}

/// timeMin must come before timeMax
#[test]
fn test_inverted_window_is_rejected() {
    let defaults = SourceOptions::default();
    let options = SourceOptions {
        calendar_id: "team@example.com".to_string(),
        time_min: defaults.time_max,
        time_max: defaults.time_min,
        ..defaults
    };

    assert!(options.validate().is_err());
}

/// A zero request timeout would fail every request, so it is rejected
#[test]
fn test_zero_timeout_is_rejected() {
    let options = SourceOptions {
        calendar_id: "team@example.com".to_string(),
        request_timeout_secs: 0,
        ..Default::default()
    };

    assert!(matches!(options.validate(), Err(SourceError::Config(_))));
}
