//! Application error type and its HTTP rendering.
//!
//! Validation failures are not errors here: they are rendered inline by the
//! submission handler with a success status. `AppError` covers the cases that
//! end the request with a 4xx/5xx page.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::domain::repositories::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The request is unusable (e.g. no host to build a short URL from).
    #[error("{0}")]
    BadRequest(String),

    /// Every candidate key in the retry budget was already taken.
    #[error("failed to allocate a unique short key after {attempts} attempts")]
    KeyCollisionExhausted { attempts: usize },

    /// The store failed a read or write.
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::KeyCollisionExhausted { .. } | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message safe to show to visitors. Internal details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::BadRequest(message) => message.clone(),
            AppError::KeyCollisionExhausted { .. } => {
                "Could not allocate a short link right now. Please try again.".to_string()
            }
            AppError::StoreUnavailable(_) => {
                "The link store is unavailable. Please try again later.".to_string()
            }
            AppError::Internal(_) => "Something went wrong on our side.".to_string(),
        }
    }
}

/// Full error page rendered in the shared layout.
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        let page = ErrorTemplate {
            status: status.as_u16(),
            message: self.public_message(),
        };

        match page.render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {}", e);
                (status, self.public_message()).into_response()
            }
        }
    }
}
