use axum::{middleware, routing::get, Router};

use crate::handlers::{health_check, latest_earthquakes, load_earthquakes};
use crate::middleware::request_log::request_log_middleware;
use crate::services::scheduler::AppState;

/// Create the main application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/earthquakes", get(load_earthquakes))
        .route("/earthquakes/latest", get(latest_earthquakes))
        .layer(middleware::from_fn(request_log_middleware))
        .with_state(state)
}
