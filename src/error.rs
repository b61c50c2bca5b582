use miette::{Diagnostic, Result};
use thiserror::Error;

/// Main error type for the event source
#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(calendar_source::config))]
    Config(String),

    #[error("Authentication error: {0}")]
    #[diagnostic(
        code(calendar_source::auth),
        help("check the service account key and the assumed user")
    )]
    Auth(String),

    #[error("Google Calendar API error: {0}")]
    #[diagnostic(code(calendar_source::google_calendar))]
    GoogleCalendar(String),

    #[error("Geocoding error: {0}")]
    #[diagnostic(code(calendar_source::geocoding))]
    Geocoding(String),

    #[error("Malformed event {id}: {reason}")]
    #[diagnostic(code(calendar_source::malformed_event))]
    MalformedEvent { id: String, reason: String },

    #[error("Host error: {0}")]
    #[diagnostic(code(calendar_source::host))]
    Host(String),

    #[error(transparent)]
    #[diagnostic(code(calendar_source::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(calendar_source::serialization))]
    Serialization(String),
}

impl From<toml::de::Error> for SourceError {
    fn from(err: toml::de::Error) -> Self {
        SourceError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Serialization(err.to_string())
    }
}

/// Type alias for Result with our error type
pub type SourceResult<T> = Result<T, SourceError>;

/// Helper to create configuration errors
pub fn config_error(message: &str) -> SourceError {
    SourceError::Config(message.to_string())
}

/// Helper to create authentication errors
pub fn auth_error(message: &str) -> SourceError {
    SourceError::Auth(message.to_string())
}

/// Helper to create Google Calendar errors
pub fn google_calendar_error(message: &str) -> SourceError {
    SourceError::GoogleCalendar(message.to_string())
}

/// Helper to create geocoding errors
pub fn geocoding_error(message: &str) -> SourceError {
    SourceError::Geocoding(message.to_string())
}

/// Helper to create host errors
pub fn host_error(message: &str) -> SourceError {
    SourceError::Host(message.to_string())
}

/// Helper to create malformed event errors
pub fn malformed_event(id: &str, reason: &str) -> SourceError {
    SourceError::MalformedEvent {
        id: id.to_string(),
        reason: reason.to_string(),
    }
}
