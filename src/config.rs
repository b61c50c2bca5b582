use crate::error::{config_error, SourceResult};
use chrono::{DateTime, Months, Utc};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default location of the options file
pub const DEFAULT_CONFIG_PATH: &str = "config/source.toml";

/// Environment variable that overrides the options file location
pub const CONFIG_PATH_VAR: &str = "CALENDAR_SOURCE_CONFIG";

/// Fields kept on every node unless the options say otherwise
pub const DEFAULT_INCLUDED_FIELDS: [&str; 8] = [
    "start",
    "end",
    "summary",
    "status",
    "organizer",
    "description",
    "location",
    "slug",
];

/// OAuth scopes requested for the service account
pub const DEFAULT_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/calendar.events.readonly",
    "https://www.googleapis.com/auth/calendar.readonly",
];

/// Options of the event source, as read from `config/source.toml` and the environment
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SourceOptions {
    /// Event fields copied onto the nodes
    pub included_fields: Vec<String>,
    /// Calendar to list events from
    pub calendar_id: String,
    /// User the service account acts on behalf of
    pub assumed_user: Option<String>,
    /// Google Maps key; geocoding is skipped without one
    pub geo_code_api_key: Option<String>,
    /// Inline service account key (JSON)
    pub credentials_json: Option<String>,
    /// Path to a service account key file (JSON)
    pub key_file_path: Option<String>,
    /// Lower bound of event start times
    pub time_min: DateTime<Utc>,
    /// Upper bound of event start times
    pub time_max: DateTime<Utc>,
    /// OAuth scopes
    pub scopes: Vec<String>,
    /// Timeout for every HTTP request, in seconds
    pub request_timeout_secs: u64,
}

impl Default for SourceOptions {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            included_fields: DEFAULT_INCLUDED_FIELDS.iter().map(|f| f.to_string()).collect(),
            calendar_id: String::new(),
            assumed_user: None,
            geo_code_api_key: None,
            credentials_json: None,
            key_file_path: None,
            time_min: now,
            // only events up to two years from now
            time_max: now.checked_add_months(Months::new(24)).unwrap_or(now),
            scopes: DEFAULT_SCOPES.iter().map(|s| s.to_string()).collect(),
            request_timeout_secs: 30,
        }
    }
}

impl SourceOptions {
    /// Load options from `.env`, the options file and the environment
    pub fn load() -> SourceResult<Self> {
        // Load .env file if it exists
        dotenv().ok();

        let path = env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let options = if Path::new(&path).exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        let options = options.with_overrides(|name| env::var(name).ok());
        options.validate()?;
        Ok(options)
    }

    /// Read options from a TOML file; missing keys take their defaults
    pub fn from_file(path: impl AsRef<Path>) -> SourceResult<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Apply environment overrides through `lookup`
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        if let Some(calendar_id) = get("GOOGLE_CALENDAR_ID") {
            self.calendar_id = calendar_id;
        }
        if let Some(user) = get("GOOGLE_ASSUMED_USER") {
            self.assumed_user = Some(user);
        }
        if let Some(key) = get("GOOGLE_MAPS_API_KEY") {
            self.geo_code_api_key = Some(key);
        }
        if let Some(json) = get("GOOGLE_SERVICE_ACCOUNT_JSON") {
            self.credentials_json = Some(json);
        }
        if let Some(path) = get("GOOGLE_KEY_FILE_PATH") {
            self.key_file_path = Some(path);
        }
        self
    }

    /// Check the options are usable for a run
    pub fn validate(&self) -> SourceResult<()> {
        if self.calendar_id.trim().is_empty() {
            return Err(config_error("calendarId must be set (or GOOGLE_CALENDAR_ID)"));
        }
        if self.time_min >= self.time_max {
            return Err(config_error("timeMin must be earlier than timeMax"));
        }
        if self.request_timeout_secs == 0 {
            return Err(config_error("requestTimeoutSecs must be greater than zero"));
        }
        Ok(())
    }

    /// Timeout applied to the HTTP clients
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Whether locations should be geocoded
    pub fn geocoding_enabled(&self) -> bool {
        self.geo_code_api_key
            .as_deref()
            .is_some_and(|key| !key.trim().is_empty())
    }
}
