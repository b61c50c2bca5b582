//! Turning calendar events into content nodes.

pub mod assembler;
pub mod schema;
pub mod slug;

pub use assembler::{assemble, NodeInternal, NODE_TYPE, REQUIRED_FIELDS};
pub use schema::type_definitions;
pub use slug::build_slug;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A content node handed to the host.
///
/// Keys are kept sorted, so the serialized form of a node is stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventNode(Map<String, Value>);

impl EventNode {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Node id, copied from the event
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}
