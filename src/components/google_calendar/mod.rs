mod client;
pub mod models;
pub mod token;

pub use client::{GoogleCalendarClient, CALENDAR_API_BASE};
pub use models::{CalendarEvent, EventTime};
pub use token::{ServiceAccountKey, TokenManager};

use crate::config::SourceOptions;
use crate::error::SourceResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Parameters of one events listing
#[derive(Debug, Clone, PartialEq)]
pub struct EventQuery {
    pub calendar_id: String,
    pub time_min: DateTime<Utc>,
    pub time_max: DateTime<Utc>,
    /// Expand recurring events into their instances
    pub single_events: bool,
}

impl EventQuery {
    pub fn from_options(options: &SourceOptions) -> Self {
        Self {
            calendar_id: options.calendar_id.clone(),
            time_min: options.time_min,
            time_max: options.time_max,
            single_events: true,
        }
    }
}

/// Anything that can list calendar events, in ascending start order
#[async_trait]
pub trait EventLister: Send + Sync {
    async fn list_events(&self, query: &EventQuery) -> SourceResult<Vec<CalendarEvent>>;
}
