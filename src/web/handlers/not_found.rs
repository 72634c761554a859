//! Fallback page for unknown paths.

use askama::Template;
use askama_web::WebTemplate;
use axum::{http::StatusCode, response::IntoResponse};

#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {}

/// Renders the 404 page.
///
/// Used as the router fallback and for `/{key}` paths that do not match the
/// short key pattern.
pub async fn not_found_handler() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, NotFoundTemplate {})
}
