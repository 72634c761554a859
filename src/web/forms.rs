//! Submission form and its validation.

use serde::Deserialize;
use url::Url;
use validator::Validate;

/// Longest URL accepted from the form.
pub const MAX_URL_LENGTH: usize = 8192;

/// `MAX_URL_LENGTH` as the `u64` the `Validate` derive expects.
const MAX_URL_LENGTH_U64: u64 = MAX_URL_LENGTH as u64;

/// Fields posted by the home page form.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkForm {
    /// The URL to shorten.
    #[validate(length(min = 1, max = MAX_URL_LENGTH_U64))]
    #[validate(url)]
    pub url: String,
}

/// Outcome of validating a submitted URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlValidation {
    Valid(Url),
    /// Human-readable reason, rendered in the error fragment.
    Invalid(String),
}

impl UrlValidation {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }
}

/// Checks that the submitted `url` is an absolute URL with a host.
///
/// Anything that is not a well-formed absolute URL (relative paths, bare
/// words, `mailto:`, `file:///...`) is `Invalid`; nothing here fails hard.
pub fn validate_url_field(form: &CreateLinkForm) -> UrlValidation {
    if form.validate().is_err() {
        if form.url.chars().count() > MAX_URL_LENGTH {
            return UrlValidation::invalid(format!(
                "URL is too long (max {} characters)",
                MAX_URL_LENGTH
            ));
        }
        return UrlValidation::invalid("Please enter a valid URL, e.g. https://example.com/page");
    }

    let Ok(url) = Url::parse(&form.url) else {
        return UrlValidation::invalid("Please enter a valid URL, e.g. https://example.com/page");
    };

    if !url.host_str().is_some_and(|host| !host.is_empty()) {
        return UrlValidation::invalid("URL must include a host, e.g. https://example.com/page");
    }

    UrlValidation::Valid(url)
}
