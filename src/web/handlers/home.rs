//! Home page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the home page.
///
/// Renders `templates/home.html`: a single text input posting `url` to `/create`.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {}

/// Renders the submission form.
///
/// # Endpoint
///
/// `GET /`
pub async fn home_handler() -> impl IntoResponse {
    HomeTemplate {}
}
