use crate::error::SourceResult;
use async_trait::async_trait;

pub mod geocoding;
pub mod google_calendar;
pub mod nodes;
pub mod source;

pub use nodes::EventNode;
pub use source::{create_schema_customization, EventSource};

/// Capabilities the host framework lends to the source
#[async_trait]
pub trait NodeActions: Send + Sync {
    /// Register one content node
    async fn create_node(&self, node: EventNode) -> SourceResult<()>;

    /// Declare GraphQL types for the nodes
    async fn create_types(&self, type_definitions: &str) -> SourceResult<()>;
}
