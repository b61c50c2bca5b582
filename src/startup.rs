use async_trait::async_trait;
use calendar_event_source::components::{
    create_schema_customization, EventNode, EventSource, NodeActions,
};
use calendar_event_source::config::SourceOptions;
use calendar_event_source::error::{host_error, SourceError, SourceResult};
use std::io::{self, Write};
use std::sync::Mutex;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Initialize logging with environment-based configuration.
///
/// Logs go to stderr; stdout carries the nodes.
pub fn init_logging() -> miette::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,reqwest=warn,hyper=warn")),
        )
        .with_writer(io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| SourceError::Config(format!("Failed to set up logging: {}", e)))?;

    Ok(())
}

/// Load the source options
pub fn load_config() -> miette::Result<SourceOptions> {
    match SourceOptions::load() {
        Ok(options) => Ok(options),
        Err(e) => {
            error!("Failed to load configuration: {:?}", e);
            Err(e.into())
        }
    }
}

/// Host that writes every node as one JSON line
struct JsonLinesActions<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLinesActions<W> {
    fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

#[async_trait]
impl<W: Write + Send> NodeActions for JsonLinesActions<W> {
    async fn create_node(&self, node: EventNode) -> SourceResult<()> {
        let line = serde_json::to_string(&node)?;
        let mut out = self
            .out
            .lock()
            .map_err(|_| host_error("node writer lock poisoned"))?;
        writeln!(out, "{}", line)
            .and_then(|_| out.flush())
            .map_err(|e| host_error(&format!("Failed to write node: {}", e)))
    }

    async fn create_types(&self, type_definitions: &str) -> SourceResult<()> {
        debug!("Declared types:\n{}", type_definitions);
        Ok(())
    }
}

/// Declare the schema and source every node
pub async fn run(options: SourceOptions) -> miette::Result<()> {
    let source = EventSource::from_options(&options)?;
    let actions = JsonLinesActions::new(io::stdout());

    create_schema_customization(&actions).await?;
    let created = source.source_nodes(&actions).await?;

    info!("Done, {} nodes written", created);
    Ok(())
}
