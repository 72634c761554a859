//! Request origin extraction from HTTP headers.

use crate::AppError;
use axum::http::{HeaderMap, Uri, header};
use url::Url;

const X_FORWARDED_PROTO: &str = "x-forwarded-proto";
const X_FORWARDED_HOST: &str = "x-forwarded-host";

/// Determines the origin (`scheme://host[:port]`) the request was sent to.
///
/// # Resolution Order
///
/// - **Host**: `X-Forwarded-Host` (only when `behind_proxy`), then the `Host`
///   header, then the URI authority (HTTP/2 requests carry `:authority` there)
/// - **Scheme**: `X-Forwarded-Proto` (only when `behind_proxy`), then the URI
///   scheme, then `http`
///
/// Forwarded headers may hold a comma-separated list; the first entry is the
/// client-facing one.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] if no host can be found or the result is
/// not a valid origin.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// let origin = request_origin(&headers, &Uri::from_static("/create"), false).unwrap();
/// assert_eq!(origin.as_str(), "http://sho.rt:8080/");
/// ```
pub fn request_origin(headers: &HeaderMap, uri: &Uri, behind_proxy: bool) -> Result<Url, AppError> {
    let forwarded = |name: &str| {
        if !behind_proxy {
            return None;
        }
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let host = match forwarded(X_FORWARDED_HOST) {
        Some(host) => host,
        None => match headers.get(header::HOST) {
            Some(value) => value
                .to_str()
                .map_err(|_| AppError::bad_request("Invalid Host header"))?
                .to_string(),
            None => uri
                .authority()
                .map(|a| a.to_string())
                .ok_or_else(|| AppError::bad_request("Missing Host header"))?,
        },
    };

    let scheme = forwarded(X_FORWARDED_PROTO)
        .or_else(|| uri.scheme_str().map(str::to_string))
        .unwrap_or_else(|| "http".to_string())
        .to_ascii_lowercase();

    if scheme != "http" && scheme != "https" {
        return Err(AppError::bad_request(format!(
            "Unsupported request scheme '{}'",
            scheme
        )));
    }

    let origin = Url::parse(&format!("{}://{}", scheme, host))
        .map_err(|_| AppError::bad_request("Invalid Host header"))?;

    // Anything beyond scheme://host[:port] means the host header smuggled a path.
    if origin.path() != "/" || origin.query().is_some() || !origin.username().is_empty() {
        return Err(AppError::bad_request("Invalid Host header"));
    }

    Ok(origin)
}

/// Serializes an origin the way browsers send it in the `Origin` header.
///
/// `Url` keeps a trailing `/` path; the header never does.
pub fn origin_string(origin: &Url) -> String {
    origin.origin().ascii_serialization()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_host(host: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static(host));
        headers
    }

    #[test]
    fn test_origin_simple() {
        let headers = headers_with_host("sho.rt");
        let origin = request_origin(&headers, &Uri::from_static("/create"), false).unwrap();
        assert_eq!(origin.as_str(), "http://sho.rt/");
        assert_eq!(origin_string(&origin), "http://sho.rt");
    }

    #[test]
    fn test_origin_keeps_port() {
        let headers = headers_with_host("localhost:3000");
        let origin = request_origin(&headers, &Uri::from_static("/"), false).unwrap();
        assert_eq!(origin_string(&origin), "http://localhost:3000");
    }

    #[test]
    fn test_origin_uses_uri_scheme() {
        let headers = headers_with_host("sho.rt");
        let origin =
            request_origin(&headers, &Uri::from_static("https://sho.rt/create"), false).unwrap();
        assert_eq!(origin_string(&origin), "https://sho.rt");
    }

    #[test]
    fn test_origin_falls_back_to_uri_authority() {
        let headers = HeaderMap::new();
        let origin =
            request_origin(&headers, &Uri::from_static("https://h2.example/create"), false)
                .unwrap();
        assert_eq!(origin_string(&origin), "https://h2.example");
    }

    #[test]
    fn test_origin_ipv6_with_port() {
        let headers = headers_with_host("[::1]:8080");
        let origin = request_origin(&headers, &Uri::from_static("/"), false).unwrap();
        assert_eq!(origin_string(&origin), "http://[::1]:8080");
    }

    #[test]
    fn test_forwarded_headers_ignored_without_proxy() {
        let mut headers = headers_with_host("internal:3000");
        headers.insert(X_FORWARDED_PROTO, HeaderValue::from_static("https"));
        headers.insert(X_FORWARDED_HOST, HeaderValue::from_static("sho.rt"));

        let origin = request_origin(&headers, &Uri::from_static("/"), false).unwrap();
        assert_eq!(origin_string(&origin), "http://internal:3000");
    }

    #[test]
    fn test_forwarded_headers_behind_proxy() {
        let mut headers = headers_with_host("internal:3000");
        headers.insert(X_FORWARDED_PROTO, HeaderValue::from_static("https, http"));
        headers.insert(X_FORWARDED_HOST, HeaderValue::from_static("sho.rt, internal"));

        let origin = request_origin(&headers, &Uri::from_static("/"), true).unwrap();
        assert_eq!(origin_string(&origin), "https://sho.rt");
    }

    #[test]
    fn test_missing_host() {
        let headers = HeaderMap::new();
        let result = request_origin(&headers, &Uri::from_static("/create"), false);
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_host_with_path_rejected() {
        let headers = headers_with_host("sho.rt/evil");
        let result = request_origin(&headers, &Uri::from_static("/"), false);
        assert!(result.is_err());
    }

    #[test]
    fn test_unsupported_forwarded_scheme() {
        let mut headers = headers_with_host("sho.rt");
        headers.insert(X_FORWARDED_PROTO, HeaderValue::from_static("ftp"));
        let result = request_origin(&headers, &Uri::from_static("/"), true);
        assert!(result.is_err());
    }
}
