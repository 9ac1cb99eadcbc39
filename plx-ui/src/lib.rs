//! plx-ui library - Product Placements Explorer web module
//!
//! Serves the recommendations page and the JSON API backing it. The
//! interesting part is the per-model fan-out: one upstream placement call per
//! requested model, executed concurrently with per-model error isolation.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::CorsLayer;

use plx_common::config::PlxConfig;

pub mod api;
pub mod client;
pub mod orchestrator;
pub mod query;

use orchestrator::FanOutOrchestrator;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Resolved module configuration
    pub config: Arc<PlxConfig>,
    /// Fan-out orchestrator wrapping the upstream placement client
    pub orchestrator: FanOutOrchestrator,
}

impl AppState {
    /// Create new application state
    pub fn new(config: Arc<PlxConfig>, orchestrator: FanOutOrchestrator) -> Self {
        Self {
            config,
            orchestrator,
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    // JSON API
    let api = Router::new()
        .route("/api/recommendations", get(api::get_recommendations))
        .route("/api/buildinfo", get(api::get_build_info));

    Router::new()
        .merge(api)
        .merge(api::ui_routes())
        .merge(api::health_routes())
        .with_state(state)
        // Enable CORS for local access
        .layer(CorsLayer::permissive())
}
