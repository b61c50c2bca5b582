use super::{Coordinates, Geocoder};
use crate::error::{geocoding_error, SourceResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

/// Google Geocoding API endpoint
pub const GEOCODE_API_URL: &str = "https://maps.googleapis.com/maps/api/geocode/json";

#[derive(Debug, Deserialize, Default)]
struct GeocodeResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    results: Vec<GeocodeResult>,
    #[serde(default)]
    error_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeocodeResult {
    #[serde(default)]
    geometry: Option<Geometry>,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    #[serde(default)]
    location: Option<Coordinates>,
}

impl GeocodeResponse {
    /// Location of the first result that has one
    fn first_location(&self) -> Option<Coordinates> {
        self.results
            .iter()
            .find_map(|result| result.geometry.as_ref().and_then(|g| g.location))
    }

    /// Fail on statuses that mean the request itself was rejected
    fn check_status(&self) -> SourceResult<()> {
        match self.status.as_deref() {
            None | Some("OK") | Some("ZERO_RESULTS") => Ok(()),
            Some(status) => Err(geocoding_error(&format!(
                "{}{}",
                status,
                self.error_message
                    .as_deref()
                    .map(|m| format!(" - {}", m))
                    .unwrap_or_default()
            ))),
        }
    }
}

/// Geocoder backed by the Google Geocoding API.
///
/// Never returns `Err`: request failures are logged and reported as "not found"
/// so one bad address does not abort a run.
#[derive(Debug, Clone)]
pub struct GoogleGeocoder {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl GoogleGeocoder {
    pub fn new(api_key: impl Into<String>, client: Client) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            endpoint: GEOCODE_API_URL.to_string(),
        }
    }

    /// Send requests somewhere other than the public endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    async fn request(&self, location: &str) -> SourceResult<Option<Coordinates>> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("address", location), ("key", self.api_key.as_str())])
            .send()
            .await
            .map_err(|e| geocoding_error(&format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(geocoding_error(&format!("HTTP {}", response.status())));
        }

        let body: GeocodeResponse = response
            .json()
            .await
            .map_err(|e| geocoding_error(&format!("failed to parse response: {}", e)))?;

        body.check_status()?;
        Ok(body.first_location())
    }
}

#[async_trait]
impl Geocoder for GoogleGeocoder {
    async fn resolve(&self, location: &str) -> SourceResult<Option<Coordinates>> {
        match self.request(location).await {
            Ok(Some(coordinates)) => Ok(Some(coordinates)),
            Ok(None) => {
                debug!("No geocoding result for {}", location);
                Ok(None)
            }
            Err(e) => {
                error!("error fetching long and lat for {}: {}", location, e);
                Ok(None)
            }
        }
    }
}
