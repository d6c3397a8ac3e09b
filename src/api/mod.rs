use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::pages::{self, Templates};
use crate::provider::ProviderClient;

pub mod handlers;
pub mod models;

/// Everything a request handler may touch. Read-only after start.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub provider: Arc<ProviderClient>,
    pub templates: Arc<Templates>,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let provider = ProviderClient::new(config.provider_url.clone());
        Ok(AppState {
            config: Arc::new(config),
            provider: Arc::new(provider),
            templates: Arc::new(Templates::new()?),
        })
    }
}

pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/search", get(handlers::search_handler))
        // HTML pages
        .route("/", get(pages::landing_handler))
        .route("/search", get(pages::results_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
