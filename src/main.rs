use anyhow::Context;
use tracing_subscriber::EnvFilter;

use blog_api::config;
use blog_api::database::DatabaseManager;
use blog_api::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, BLOG_STORAGE, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("blog_api=info,tower_http=info")),
        )
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config::config();
    tracing::info!(
        "Starting Blog API in {:?} mode with {:?} storage",
        config.environment,
        config.database.storage
    );

    let store = DatabaseManager::open_store(&config.database)
        .await
        .context("failed to open blog store")?;

    let handle = server::start(config, store).await?;

    tokio::signal::ctrl_c()
        .await
        .context("failed to listen for shutdown signal")?;
    tracing::info!("Shutdown signal received");

    handle.stop().await?;
    Ok(())
}
