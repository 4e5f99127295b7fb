mod actor_framework;
mod api;
mod app_system;
mod clients;
mod domain;
mod order_actor;

#[cfg(test)]
mod mock_framework;

use std::sync::Arc;

use anyhow::Context;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::api::{routes, state::AppState};
use crate::app_system::{setup_tracing, OrderSystem, ServiceConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = ServiceConfig::from_env().context("invalid configuration")?;
    info!(?config, "Starting order desk");

    let system = OrderSystem::new(&config);
    let state = Arc::new(AppState::new(system.order_client.clone()));

    let app = routes::build_router(state).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    info!("order desk listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server crashed")?;

    // The router and its client clones are gone once `serve` returns.
    system.shutdown().await.map_err(anyhow::Error::msg)?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Cannot listen for ctrl-c, shutting down");
    }
    info!("Shutdown signal received");
}
