use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use language_detective::application::services::DetectionCoordinator;
use language_detective::infrastructure::connectors::ConnectorFactory;
use language_detective::infrastructure::observability::{TracingConfig, init_tracing};
use language_detective::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(&TracingConfig::from_settings(&settings.logging, environment));

    let registry =
        ConnectorFactory::build_registry(&settings).context("Failed to build connector registry")?;
    tracing::info!(
        providers = ?registry.names(),
        default_timeout_ms = settings.coordinator.default_timeout_ms,
        "Connector registry ready"
    );

    let coordinator = Arc::new(DetectionCoordinator::new(Arc::new(registry)));
    let router = create_router(AppState::new(coordinator));

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
