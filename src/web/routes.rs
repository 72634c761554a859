//! Web page route configuration.

use crate::api::handlers::create_path_redirect_handler;
use crate::state::AppState;
use crate::web::handlers::{create_handler, home_handler};
use crate::web::middleware::csrf;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// HTML form routes.
///
/// # Endpoints
///
/// - `GET /` - Submission form
/// - `POST /create` - Submission handler, guarded by [`csrf::layer`]
/// - `GET /create` - `create` is itself a valid key, so it goes to the redirect
///   handler like any other `/{key}` (the origin check skips GET)
pub fn routes(state: AppState) -> Router<AppState> {
    Router::new().route("/", get(home_handler)).route(
        "/create",
        post(create_handler)
            .get(create_path_redirect_handler)
            .route_layer(middleware::from_fn_with_state(state, csrf::layer)),
    )
}
