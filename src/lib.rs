//! PIN-Kings API: a liveness endpoint for the hosting process.

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use axum::{routing::get, Router};
use handlers::health;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub const SERVICE_NAME: &str = "PIN-Kings API";

pub fn create_app() -> Router {
    Router::new()
        .route("/health", get(health::health_check))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
