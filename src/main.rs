//! trigger-gateway server entry point.
//!
//! Loads configuration, opens the configured store and starts the Axum
//! HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use trigger_gateway::api;
use trigger_gateway::app_state::AppState;
use trigger_gateway::config::{GatewayConfig, LogFormat, StoreBackend};
use trigger_gateway::store::{MemoryRepoStore, PostgresRepoStore, RepoStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = GatewayConfig::from_env().context("loading configuration")?;

    // Initialize tracing
    init_tracing(config.log_format);
    tracing::info!(
        addr = %config.listen_addr,
        backend = %config.store_backend,
        "starting trigger-gateway"
    );

    // Open the store
    let repo_store = open_store(&config).await?;

    // Build router
    let app = api::build_router(AppState::new(repo_store));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await.context("serving HTTP")?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

async fn open_store(config: &GatewayConfig) -> anyhow::Result<Arc<dyn RepoStore>> {
    match config.store_backend {
        StoreBackend::Postgres => {
            let store = PostgresRepoStore::connect(&config.database)
                .await
                .context("connecting to PostgreSQL")?;
            if config.ensure_schema {
                store
                    .ensure_schema()
                    .await
                    .context("creating git_repos table")?;
            }
            Ok(Arc::new(store))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; registered repos are lost on exit");
            Ok(Arc::new(MemoryRepoStore::new()))
        }
    }
}
