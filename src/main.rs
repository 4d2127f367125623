//! Signage registry server.

use std::sync::Arc;

use signage_registry::adapters::http::{router, AppState};
use signage_registry::adapters::{in_memory_registry, ChangeLogger};
use signage_registry::application::RegistryOptions;
use signage_registry::config::{AppConfig, LogFormat, ServerConfig};
use signage_registry::domain::registry::EventKind;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = AppConfig::load()?;
    config.validate()?;

    init_tracing(&config.server)?;

    let registry = Arc::new(in_memory_registry(RegistryOptions::from(&config.registry)));
    registry.subscribe(EventKind::ALL, Arc::new(ChangeLogger::new()));

    let addr = config.server.socket_addr()?;
    let app = router(AppState::new(registry), config.server.request_timeout());

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        display_prefix = %config.registry.display_prefix,
        group_prefix = %config.registry.group_prefix,
        "Signage registry listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

fn init_tracing(server: &ServerConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(&server.log_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    match server.log_format {
        LogFormat::Pretty => builder.try_init()?,
        LogFormat::Json => builder.json().try_init()?,
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down...");
}
