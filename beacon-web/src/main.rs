//! Beacon Web
//!
//! Dashboard server for the CI system. Pages are assembled per request from
//! the CI API, using the caller's credentials, and rendered as HTML.

use std::sync::Arc;

use anyhow::{Context, Result};
use beacon_client::AtcClientFactory;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::api::AppState;
use crate::config::Config;
use crate::render::html::HtmlRenderer;

pub mod api;
pub mod config;
pub mod render;
pub mod service;

#[cfg(test)]
mod testing;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "beacon_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Beacon Web...");

    let config = Config::from_env().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        "Loaded configuration: atc_url={}, request_timeout={:?}",
        config.atc_url,
        config.request_timeout
    );

    // One connection pool shared by every per-request client
    let http_client = reqwest::Client::builder()
        .timeout(config.client_timeout)
        .build()
        .context("Failed to build HTTP client")?;

    let state = AppState {
        clients: Arc::new(AtcClientFactory::new(config.atc_url.clone(), http_client)),
        renderer: Arc::new(HtmlRenderer::new()),
    };

    // Build router with all endpoints
    let app = api::create_router(state, config.request_timeout);

    tracing::info!("Listening on {}", config.bind_addr);

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
