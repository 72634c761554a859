//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use crate::domain::entities::{InvalidShortKey, ShortKey};
use crate::error::AppError;
use crate::state::AppState;
use crate::web::handlers::not_found_handler;

/// Redirects a short key to its target URL.
///
/// # Endpoint
///
/// `GET /{key}`
///
/// # Request Flow
///
/// 1. Paths that are not a short key (`^[0-9a-z]{6}$`) get the 404 page
/// 2. Look the key up in the store
/// 3. Found: 302 Found to the stored target
/// 4. Unknown: 302 Found to `/`
///
/// Targets are not re-validated; they were checked at submission time.
///
/// # Errors
///
/// Returns 503 if the store fails, 500 if the stored target cannot be sent
/// as a `Location` header.
pub async fn redirect_handler(
    Path(key): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let Ok(key) = key.parse::<ShortKey>() else {
        debug!(path = %key, "Not a short key");
        return Ok(not_found_handler().await.into_response());
    };

    redirect_to(&state, &key).await
}

/// `GET /create`.
///
/// The static `/create` route shadows `/{key}`, but `create` is a well-formed
/// key, so GET requests get the same lookup as any other key.
pub async fn create_path_redirect_handler(
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let key: ShortKey = "create"
        .parse()
        .map_err(|e: InvalidShortKey| AppError::internal(e.to_string()))?;
    redirect_to(&state, &key).await
}

async fn redirect_to(state: &AppState, key: &ShortKey) -> Result<Response, AppError> {
    match state.link_service.resolve(key).await? {
        Some(target) => {
            let location = HeaderValue::from_str(&target).map_err(|e| {
                error!(key = %key, "Stored target is not a valid header value: {}", e);
                AppError::internal("Stored target URL is malformed")
            })?;

            debug!(key = %key, target = %target, "Redirecting");
            Ok(found(location))
        }
        None => {
            debug!(key = %key, "Unknown key, redirecting home");
            Ok(found(HeaderValue::from_static("/")))
        }
    }
}

fn found(location: HeaderValue) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
