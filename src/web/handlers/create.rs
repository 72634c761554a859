//! Link submission handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{State, rejection::FormRejection},
    http::{HeaderMap, Uri},
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::application::services::LinkService;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::request_origin::request_origin;
use crate::web::forms::{CreateLinkForm, UrlValidation, validate_url_field};

/// Template for a successful submission.
///
/// Renders `templates/created.html` with the short URL in a read-only-looking
/// input so it can be copied.
#[derive(Template, WebTemplate)]
#[template(path = "created.html")]
pub struct CreatedTemplate {
    pub short_url: String,
}

/// Template for a rejected submission.
///
/// Rendered with a success status: the visitor just gets the error fragment
/// and a link back to the form.
#[derive(Template, WebTemplate)]
#[template(path = "invalid.html")]
pub struct InvalidSubmissionTemplate {
    pub reason: String,
}

impl InvalidSubmissionTemplate {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Shortens the submitted URL.
///
/// # Endpoint
///
/// `POST /create` (form-encoded, field `url`)
///
/// # Request Flow
///
/// 1. Same-origin check (see [`crate::web::middleware::csrf`])
/// 2. Parse and validate the form; failures render the error fragment
/// 3. Determine the request origin
/// 4. Allocate a key via [`LinkService::create_key`]
/// 5. Render the short URL: request origin + `/` + key
///
/// # Errors
///
/// Returns 400 if the request has no usable host, 500 if key allocation runs
/// out of attempts and 503 if the store fails.
pub async fn create_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    form: Result<Form<CreateLinkForm>, FormRejection>,
) -> Result<Response, AppError> {
    let form = match form {
        Ok(Form(form)) => form,
        Err(rejection) => {
            debug!(%rejection, "Unreadable submission");
            return Ok(InvalidSubmissionTemplate::new("Please submit the form with a url field.")
                .into_response());
        }
    };

    let target = match validate_url_field(&form) {
        UrlValidation::Valid(url) => url,
        UrlValidation::Invalid(reason) => {
            debug!(%reason, "Invalid URL submitted");
            return Ok(InvalidSubmissionTemplate::new(reason).into_response());
        }
    };

    let origin = request_origin(&headers, &uri, state.origin_policy.behind_proxy)?;

    let key = state.link_service.create_key(&target).await?;
    let short_url = LinkService::short_url(&origin, &key)?;

    Ok(CreatedTemplate {
        short_url: short_url.to_string(),
    }
    .into_response())
}
