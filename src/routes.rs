//! Top-level router configuration combining the HTML form and redirect routes.
//!
//! # Route Structure
//!
//! - `GET  /`        - Submission form
//! - `POST /create`  - Create a short link (same-origin check)
//! - `GET  /create`  - Key lookup, `create` being a valid key
//! - `GET  /health`  - Store health check
//! - `GET  /{key}`   - Short link redirect
//! - anything else   - 404 page
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Origin check** - Rejects cross-site submissions on `/create`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::middleware::tracing;
use crate::state::AppState;
use crate::web;
use crate::web::handlers::not_found_handler;
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and per-request middleware.
///
/// Tests drive this directly; [`app_router`] adds path normalization on top.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(web::routes::routes(state.clone()))
        .merge(api::routes::routes())
        .fallback(not_found_handler)
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service with trailing slashes trimmed before routing.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
