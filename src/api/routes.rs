//! Redirect and health route configuration.

use crate::api::handlers::{health_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Public routes.
///
/// # Endpoints
///
/// - `GET /health` - Store health check
/// - `GET /{key}` - Short key redirect
///
/// `/health` is a static segment and wins over `/{key}`. It can never collide
/// with a generated key since those are hex only.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health_handler))
        .route("/{key}", get(redirect_handler))
}
