use super::geocoding::{resolve_locations, Geocoder, GoogleGeocoder, LocationTable};
use super::google_calendar::{
    EventLister, EventQuery, GoogleCalendarClient, ServiceAccountKey, TokenManager,
};
use super::nodes::{assemble, type_definitions};
use super::NodeActions;
use crate::config::SourceOptions;
use crate::error::{config_error, SourceResult};
use reqwest::Client;
use tracing::{debug, info};

/// Lists calendar events and turns them into nodes
pub struct EventSource {
    lister: Box<dyn EventLister>,
    geocoder: Option<Box<dyn Geocoder>>,
    query: EventQuery,
    included_fields: Vec<String>,
}

impl EventSource {
    /// Create a source without geocoding
    pub fn new(
        lister: Box<dyn EventLister>,
        query: EventQuery,
        included_fields: Vec<String>,
    ) -> Self {
        Self {
            lister,
            geocoder: None,
            query,
            included_fields,
        }
    }

    /// Geocode event locations with `geocoder`
    pub fn with_geocoder(mut self, geocoder: Box<dyn Geocoder>) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    /// Wire the Google clients described by `options`
    pub fn from_options(options: &SourceOptions) -> SourceResult<Self> {
        let client = Client::builder()
            .timeout(options.request_timeout())
            .build()
            .map_err(|e| config_error(&format!("Failed to create HTTP client: {}", e)))?;

        let key = ServiceAccountKey::load(options)?;
        let token_manager = TokenManager::new(
            key,
            options.scopes.clone(),
            options.assumed_user.clone(),
            client.clone(),
        );
        let calendar = GoogleCalendarClient::new(token_manager, client.clone());

        let source = Self::new(
            Box::new(calendar),
            EventQuery::from_options(options),
            options.included_fields.clone(),
        );

        match options.geo_code_api_key.as_deref() {
            Some(api_key) if options.geocoding_enabled() => {
                Ok(source.with_geocoder(Box::new(GoogleGeocoder::new(api_key, client))))
            }
            _ => {
                info!("No geocoding API key configured, locations will not be geocoded");
                Ok(source)
            }
        }
    }

    /// Fetch events and create one node per event, in calendar order.
    ///
    /// Returns the number of nodes created. The first failure stops the run;
    /// nodes created before it stay with the host.
    pub async fn source_nodes(&self, actions: &dyn NodeActions) -> SourceResult<usize> {
        let events = self.lister.list_events(&self.query).await?;

        let table = match &self.geocoder {
            Some(geocoder) => resolve_locations(&events, &**geocoder).await?,
            None => LocationTable::new(),
        };

        let mut created = 0;
        for event in &events {
            let node = assemble(event, &table, &self.included_fields)?;
            debug!("Creating node {}", event.id);
            actions.create_node(node).await?;
            created += 1;
        }

        info!("Created {} nodes", created);
        Ok(created)
    }
}

/// Declare the node types with the host
pub async fn create_schema_customization(actions: &dyn NodeActions) -> SourceResult<()> {
    actions.create_types(type_definitions()).await
}
