use super::models::{CalendarEvent, EventListPage};
use super::token::TokenManager;
use super::{EventLister, EventQuery};
use crate::error::{google_calendar_error, SourceResult};
use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

/// Base URL of the Calendar API v3
pub const CALENDAR_API_BASE: &str = "https://www.googleapis.com/calendar/v3";

/// Lists calendar events over HTTP
#[derive(Debug, Clone)]
pub struct GoogleCalendarClient {
    token_manager: TokenManager,
    client: Client,
    base_url: String,
}

impl GoogleCalendarClient {
    pub fn new(token_manager: TokenManager, client: Client) -> Self {
        Self {
            token_manager,
            client,
            base_url: CALENDAR_API_BASE.to_string(),
        }
    }

    /// Point the client at another API root
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build the events.list URL for one page
    pub fn events_url(&self, query: &EventQuery, page_token: Option<&str>) -> SourceResult<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| google_calendar_error(&format!("Failed to parse URL: {}", e)))?;

        url.path_segments_mut()
            .map_err(|_| google_calendar_error("API base URL cannot hold a path"))?
            .pop_if_empty()
            .extend(["calendars", query.calendar_id.as_str(), "events"]);

        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("timeMin", &query.time_min.to_rfc3339())
                .append_pair("timeMax", &query.time_max.to_rfc3339())
                // recurring events are expanded into single instances
                .append_pair("singleEvents", &query.single_events.to_string())
                // ascending
                .append_pair("orderBy", "startTime")
                .append_pair("showDeleted", "false");
            if let Some(token) = page_token {
                pairs.append_pair("pageToken", token);
            }
        }

        Ok(url)
    }

    async fn fetch_page(
        &self,
        access_token: &str,
        query: &EventQuery,
        page_token: Option<&str>,
    ) -> SourceResult<EventListPage> {
        let url = self.events_url(query, page_token)?;

        let response = self
            .client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to fetch events: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response".to_string());
            return Err(google_calendar_error(&format!(
                "Failed to fetch events: HTTP {} - {}",
                status, error_body
            )));
        }

        response
            .json()
            .await
            .map_err(|e| google_calendar_error(&format!("Failed to parse events response: {}", e)))
    }
}

#[async_trait]
impl EventLister for GoogleCalendarClient {
    async fn list_events(&self, query: &EventQuery) -> SourceResult<Vec<CalendarEvent>> {
        let access_token = self.token_manager.access_token().await?;

        let mut events = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let page = self
                .fetch_page(&access_token, query, page_token.as_deref())
                .await?;
            debug!("Fetched page with {} events", page.items.len());
            events.extend(page.items);

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }

        info!("Fetched {} events from calendar {}", events.len(), query.calendar_id);
        Ok(events)
    }
}
