//! Store trait for short link data access.

use async_trait::async_trait;
use std::time::Duration;

/// Errors raised by a [`LinkStore`] backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The backend could not be reached or dropped the connection.
    #[error("store connection error: {0}")]
    Connection(String),

    /// The backend answered with an error.
    #[error("store operation failed: {0}")]
    Operation(String),

    /// The backend did not answer in time.
    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),
}

impl StoreError {
    /// Returns true for failures worth retrying (connection loss, timeouts).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Connection(_) | Self::Timeout(_))
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store holding `key -> target URL` mappings.
///
/// Only single-key operations are required. Records are written once and never
/// updated or deleted by the service.
///
/// # Implementations
///
/// - [`crate::infrastructure::store::RedisStore`] - Redis-backed store
/// - [`crate::infrastructure::store::MemoryStore`] - Process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkStore: Send + Sync {
    /// Looks up the target URL stored under `key`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if the key exists
    /// - `Ok(None)` if it does not
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Writes `key -> url` only if `key` is not already present.
    ///
    /// Returns `Ok(true)` when the value was written and `Ok(false)` when
    /// another writer already owns the key. Existing values are never
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] when the backend fails.
    async fn put_if_absent(&self, key: &str, url: &str) -> StoreResult<bool>;

    /// Checks if the backend is reachable.
    async fn health_check(&self) -> bool;
}
