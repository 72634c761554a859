//! Redis-backed link store.

use crate::domain::repositories::{LinkStore, StoreError, StoreResult};
use async_trait::async_trait;
use redis::{AsyncCommands, Client, RedisError, RedisResult, aio::ConnectionManager};
use std::future::Future;
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, info, warn};

/// Connection tuning for [`RedisStore`].
#[derive(Debug, Clone)]
pub struct RedisStoreOptions {
    /// Prepended to every key (e.g. `url:` turns `abc123` into `url:abc123`).
    pub key_prefix: String,
    /// Upper bound for a single round trip.
    pub timeout: Duration,
    /// Retries after the first attempt for transient failures.
    pub retry_attempts: usize,
}

impl Default for RedisStoreOptions {
    fn default() -> Self {
        Self {
            key_prefix: "url:".to_string(),
            timeout: Duration::from_millis(2000),
            retry_attempts: 3,
        }
    }
}

/// Redis store implementation.
///
/// Uses `ConnectionManager` for automatic reconnection. Unlike a cache, this is
/// the source of truth, so errors are propagated to callers instead of being
/// swallowed. Transient failures are retried with jittered exponential backoff
/// before giving up.
pub struct RedisStore {
    conn: ConnectionManager,
    options: RedisStoreOptions,
}

impl RedisStore {
    /// Connects to Redis and validates the connection with a PING.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Connection`] if the URL is invalid, the connection
    /// cannot be established, or the PING fails.
    pub async fn connect(redis_url: &str, options: RedisStoreOptions) -> StoreResult<Self> {
        info!("Connecting to Redis store");

        let client = Client::open(redis_url).map_err(|e| {
            StoreError::Connection(format!("Failed to create Redis client: {}", e))
        })?;

        let manager = tokio::time::timeout(options.timeout, ConnectionManager::new(client))
            .await
            .map_err(|_| StoreError::Timeout(options.timeout))?
            .map_err(|e| StoreError::Connection(format!("Failed to connect to Redis: {}", e)))?;

        let mut test_conn = manager.clone();
        test_conn
            .ping::<()>()
            .await
            .map_err(|e| StoreError::Connection(format!("Redis PING failed: {}", e)))?;

        info!("✓ Connected to Redis store");

        Ok(Self {
            conn: manager,
            options,
        })
    }

    /// Constructs the full Redis key with namespace prefix.
    fn build_key(&self, key: &str) -> String {
        format!("{}{}", self.options.key_prefix, key)
    }

    /// Runs `op` under the configured timeout, retrying transient failures.
    async fn run<T, F, Fut>(&self, name: &'static str, mut op: F) -> StoreResult<T>
    where
        F: FnMut(ConnectionManager) -> Fut,
        Fut: Future<Output = RedisResult<T>>,
    {
        let timeout = self.options.timeout;
        let strategy = ExponentialBackoff::from_millis(10)
            .max_delay(Duration::from_millis(500))
            .map(jitter)
            .take(self.options.retry_attempts);

        RetryIf::start(
            strategy,
            || {
                let attempt = op(self.conn.clone());
                async move {
                    let result = match tokio::time::timeout(timeout, attempt).await {
                        Ok(Ok(value)) => Ok(value),
                        Ok(Err(e)) => Err(classify(e)),
                        Err(_) => Err(StoreError::Timeout(timeout)),
                    };
                    if let Err(ref e) = result {
                        warn!("Redis {} failed: {}", name, e);
                    }
                    result
                }
            },
            StoreError::is_transient,
        )
        .await
    }
}

/// Maps Redis errors onto transient (connection) and permanent failures.
fn classify(e: RedisError) -> StoreError {
    if e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout()
    {
        StoreError::Connection(e.to_string())
    } else {
        StoreError::Operation(e.to_string())
    }
}

#[async_trait]
impl LinkStore for RedisStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let full_key = self.build_key(key);

        let value = self
            .run("GET", |mut conn| {
                let full_key = full_key.clone();
                async move { conn.get::<_, Option<String>>(full_key).await }
            })
            .await?;

        debug!(key, hit = value.is_some(), "Store GET");
        Ok(value)
    }

    async fn put_if_absent(&self, key: &str, url: &str) -> StoreResult<bool> {
        let full_key = self.build_key(key);

        let written = self
            .run("SETNX", |mut conn| {
                let full_key = full_key.clone();
                let url = url.to_string();
                async move { conn.set_nx::<_, _, bool>(full_key, url).await }
            })
            .await?;

        debug!(key, written, "Store SETNX");
        Ok(written)
    }

    async fn health_check(&self) -> bool {
        let mut conn = self.conn.clone();
        matches!(
            tokio::time::timeout(self.options.timeout, conn.ping::<()>()).await,
            Ok(Ok(()))
        )
    }
}
