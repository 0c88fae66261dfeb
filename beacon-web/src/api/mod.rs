//! API Module
//!
//! HTTP layer for the dashboard.
//! Each submodule handles endpoints for a specific page or concern.

pub mod build;
pub mod error;
pub mod health;

use std::sync::Arc;
use std::time::Duration;

use axum::{Router, http::StatusCode, routing::get};
use beacon_client::ClientFactory;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::render::Renderer;

/// Collaborators shared by all requests
#[derive(Clone)]
pub struct AppState {
    /// Builds a CI API client per request
    pub clients: Arc<dyn ClientFactory>,
    pub renderer: Arc<dyn Renderer>,
}

/// Create the main router with all endpoints
///
/// Requests running longer than `request_timeout` are answered with 408 and
/// aborted, dropping any upstream fetch still in flight.
pub fn create_router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Build page
        .route(
            "/pipelines/{pipeline_name}/jobs/{job}/builds/{build}",
            get(build::get_build),
        )
        // Add state and middleware
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(TraceLayer::new_for_http())
}
