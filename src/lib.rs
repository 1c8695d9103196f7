pub mod api;
pub mod auth;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;
pub mod state;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::state::AppState;

/// Build the full HTTP surface around `state`
pub fn app(state: AppState, config: &AppConfig) -> Router {
    let router = Router::new()
        // Public
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        // Protected API
        .merge(api_routes(state.clone()))
        // Global middleware
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .layer(TraceLayer::new_for_http());

    let router = if config.security.enable_cors {
        router.layer(CorsLayer::permissive())
    } else {
        router
    };

    router.with_state(state)
}

fn api_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/api/save-update", post(handlers::save_update))
        .route("/api/missed-call", post(handlers::log_missed_call))
        .route("/api/save-summary", post(handlers::save_summary))
        .route("/api/updates", get(handlers::list_updates))
        .route("/api/queries", get(handlers::list_queries))
        .route("/api/missed-calls", get(handlers::list_missed_calls))
        .route_layer(axum::middleware::from_fn_with_state(
            state,
            middleware::api_key_middleware,
        ))
}
