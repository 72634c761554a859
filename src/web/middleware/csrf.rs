//! Same-origin check for form submissions.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, Method, Uri, header::ORIGIN},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{trace, warn};

use crate::state::{AppState, OriginPolicy};
use crate::utils::request_origin::{origin_string, request_origin};
use crate::web::handlers::InvalidSubmissionTemplate;

const SEC_FETCH_SITE: &str = "sec-fetch-site";

/// Rejects cross-site form submissions.
///
/// # Accepted Credentials
///
/// 1. `Origin` header equal to the request's own origin
///    (see [`crate::utils::request_origin::request_origin`])
/// 2. `Origin` header listed in [`OriginPolicy::allowed_origins`]
/// 3. No `Origin` header but `Sec-Fetch-Site: same-origin`
///
/// Safe methods (GET, HEAD, OPTIONS) pass through unchecked.
///
/// # Rejection
///
/// A rejected submission never reaches the handler. The visitor gets the same
/// error fragment as for an invalid URL, with a success status.
///
/// # Example
///
/// ```rust,ignore
/// let create = post(create_handler)
///     .route_layer(middleware::from_fn_with_state(state.clone(), csrf::layer));
/// ```
pub async fn layer(State(st): State<AppState>, req: Request, next: Next) -> Response {
    if is_safe_method(req.method()) {
        trace!("CSRF skipped: safe method {}", req.method());
        return next.run(req).await;
    }

    match check_same_origin(req.headers(), req.uri(), &st.origin_policy) {
        Ok(()) => {
            trace!("CSRF check passed");
            next.run(req).await
        }
        Err(reason) => {
            warn!(reason, path = req.uri().path(), "Cross-site submission rejected");
            InvalidSubmissionTemplate::new("This form must be submitted from this site.")
                .into_response()
        }
    }
}

fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Decides whether a request carries a same-origin credential.
///
/// Returns the rejection reason for logging on failure.
pub fn check_same_origin(
    headers: &HeaderMap,
    uri: &Uri,
    policy: &OriginPolicy,
) -> Result<(), &'static str> {
    let Some(value) = headers.get(ORIGIN) else {
        return match headers.get(SEC_FETCH_SITE).and_then(|v| v.to_str().ok()) {
            Some(site) if site.eq_ignore_ascii_case("same-origin") => Ok(()),
            _ => Err("missing Origin header"),
        };
    };

    let origin = value
        .to_str()
        .map_err(|_| "unreadable Origin header")?
        .trim_end_matches('/');

    if origin == "null" {
        return Err("opaque Origin header");
    }

    if policy
        .allowed_origins
        .iter()
        .any(|allowed| allowed.eq_ignore_ascii_case(origin))
    {
        return Ok(());
    }

    let expected = request_origin(headers, uri, policy.behind_proxy)
        .map_err(|_| "request origin cannot be determined")?;

    if origin.eq_ignore_ascii_case(&origin_string(&expected)) {
        Ok(())
    } else {
        Err("Origin does not match request origin")
    }
}
