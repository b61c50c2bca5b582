use super::location::normalize_location;
use super::{Coordinates, Geocoder};
use crate::components::google_calendar::CalendarEvent;
use crate::error::SourceResult;
use std::collections::HashMap;
use tracing::{debug, error, info};

/// Geocode results of one run, keyed by canonical location.
///
/// Entries are only ever added.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationTable {
    entries: HashMap<String, Option<Coordinates>>,
}

impl LocationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the result for a canonical key
    pub fn insert(&mut self, key: String, coordinates: Option<Coordinates>) {
        self.entries.insert(key, coordinates);
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Result stored under a canonical key; `None` when unknown or not found
    pub fn get(&self, key: &str) -> Option<Coordinates> {
        self.entries.get(key).copied().flatten()
    }

    /// Coordinates for a raw location text, normalizing it first
    pub fn coordinates_for(&self, location: Option<&str>) -> Option<Coordinates> {
        location.and_then(|location| self.get(&normalize_location(location)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Geocode every distinct event location, strictly in event order.
///
/// Each geocode call finishes before the next event is inspected, so a later
/// event with an already-resolved key always reuses the stored result and at
/// most one request is in flight. Events without a location are skipped. An
/// error from the geocoder stops the run.
pub async fn resolve_locations<G>(
    events: &[CalendarEvent],
    geocoder: &G,
) -> SourceResult<LocationTable>
where
    G: Geocoder + ?Sized,
{
    let mut table = LocationTable::new();

    if !events.iter().any(|event| event.location().is_some()) {
        debug!("No event has a location, nothing to geocode");
        return Ok(table);
    }

    let mut seen_location = false;
    let mut calls = 0usize;

    for event in events {
        let Some(location) = event.location() else {
            continue;
        };
        let key = normalize_location(location);

        if seen_location && table.contains_key(&key) {
            debug!("Reusing coordinates of {} for event {}", key, event.id);
            continue;
        }
        seen_location = true;

        let coordinates = geocoder.resolve(location).await.map_err(|e| {
            error!("error during geocoding request for {}: {}", location, e);
            e
        })?;
        calls += 1;
        table.insert(key, coordinates);
    }

    info!(
        "Resolved {} distinct locations for {} events with {} geocode calls",
        table.len(),
        events.len(),
        calls
    );
    Ok(table)
}
