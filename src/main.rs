mod startup;

use tracing::info;

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Initialize logging
    startup::init_logging()?;

    info!("Starting calendar event source");

    // Load configuration
    let options = startup::load_config()?;

    // Source the nodes
    startup::run(options).await
}
