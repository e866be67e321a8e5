// src/api/mod.rs

pub mod handler;
pub mod results;

pub use handler::{analyze_handler, index_handler, toggle_handler};
pub use results::results_handler;

use crate::models::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_handler))
        .route("/toggle/{row}", post(toggle_handler))
        .route("/api/results", get(results_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
