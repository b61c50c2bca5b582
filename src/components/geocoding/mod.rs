//! Location geocoding: key normalization, the Google client and the
//! deduplicating pipeline that resolves every distinct location once.

mod client;
pub mod location;
pub mod pipeline;

pub use client::{GoogleGeocoder, GEOCODE_API_URL};
pub use location::normalize_location;
pub use pipeline::{resolve_locations, LocationTable};

use crate::error::SourceResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A resolved position
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    #[serde(alias = "lng")]
    pub long: f64,
}

/// Resolves free-text locations to coordinates.
///
/// `Ok(None)` means the location could not be found. Implementations that talk
/// to a remote service should absorb their own failures into `Ok(None)`; an
/// `Err` aborts the whole pipeline.
#[async_trait]
pub trait Geocoder: Send + Sync {
    async fn resolve(&self, location: &str) -> SourceResult<Option<Coordinates>>;
}
