// app.rs
// Router wiring shared by the binary and the HTTP tests.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::routes;
use crate::state::AppState;

pub fn build_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health))
        .route("/api/setup", post(routes::setup))
        .route("/api/verify", post(routes::verify))
        .with_state(state)
}
