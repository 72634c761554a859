//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::LinkStore;

/// Rules for deciding whether a form submission is same-origin.
#[derive(Debug, Clone, Default)]
pub struct OriginPolicy {
    /// Trust `X-Forwarded-Proto` / `X-Forwarded-Host` when computing the request origin.
    pub behind_proxy: bool,
    /// Additional origins accepted besides the request's own.
    pub allowed_origins: Vec<String>,
}

/// Handler state.
///
/// Holds the store handle explicitly; there is no global store. Handlers go
/// through `link_service`; `store` is kept for the health check.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub store: Arc<dyn LinkStore>,
    pub origin_policy: Arc<OriginPolicy>,
}

impl AppState {
    /// Builds the state around a store, wiring the link service to the same store.
    pub fn new(
        store: Arc<dyn LinkStore>,
        key_max_attempts: usize,
        origin_policy: OriginPolicy,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(store.clone(), key_max_attempts)),
            store,
            origin_policy: Arc::new(origin_policy),
        }
    }
}
