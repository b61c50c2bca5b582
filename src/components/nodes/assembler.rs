use super::slug::build_slug;
use super::EventNode;
use crate::components::geocoding::LocationTable;
use crate::components::google_calendar::CalendarEvent;
use crate::error::{SourceError, SourceResult};
use serde::Serialize;
use serde_json::Value;

/// Node type registered with the host
pub const NODE_TYPE: &str = "GoogleCalendarEvent";

/// Fields every node keeps, whatever the whitelist says
pub const REQUIRED_FIELDS: [&str; 2] = ["id", "internal"];

/// Fields the source adds to every node
pub const ENRICHMENT_FIELDS: [&str; 2] = ["slug", "geoCoordinates"];

/// Host bookkeeping attached to each node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInternal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_digest: Option<String>,
    #[serde(rename = "type")]
    pub node_type: &'static str,
}

impl NodeInternal {
    pub fn for_event(event: &CalendarEvent) -> Self {
        Self {
            content_digest: event.updated.clone(),
            node_type: NODE_TYPE,
        }
    }
}

fn is_kept(key: &str, included_fields: &[String]) -> bool {
    REQUIRED_FIELDS.contains(&key)
        || ENRICHMENT_FIELDS.contains(&key)
        || included_fields.iter().any(|field| field == key)
}

/// Build the node for `event`.
///
/// Adds the slug, the coordinates found in `table` and the internal metadata,
/// then drops every field that is neither whitelisted nor required.
pub fn assemble(
    event: &CalendarEvent,
    table: &LocationTable,
    included_fields: &[String],
) -> SourceResult<EventNode> {
    let slug = build_slug(event)?;
    let coordinates = table.coordinates_for(event.location());

    let mut fields = match serde_json::to_value(event)? {
        Value::Object(fields) => fields,
        other => {
            return Err(SourceError::Serialization(format!(
                "event {} serialized to {}",
                event.id, other
            )))
        }
    };

    fields.insert("slug".to_string(), Value::String(slug));
    fields.insert("geoCoordinates".to_string(), serde_json::to_value(coordinates)?);
    fields.insert(
        "internal".to_string(),
        serde_json::to_value(NodeInternal::for_event(event))?,
    );

    fields.retain(|key, _| is_kept(key, included_fields));
    Ok(EventNode::new(fields))
}
