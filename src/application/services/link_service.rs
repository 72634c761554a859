//! Short key allocation and lookup service.

use std::sync::Arc;

use tracing::{debug, info, warn};
use url::Url;

use crate::domain::entities::ShortKey;
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::key_generator::generate_key;

/// Default number of candidate keys tried before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Service for allocating short keys and writing them to the store.
///
/// This is the only place that writes to the store. Each successful
/// [`Self::create_key`] call performs exactly one write.
pub struct LinkService {
    store: Arc<dyn LinkStore>,
    max_attempts: usize,
}

impl LinkService {
    /// Creates a new link service.
    ///
    /// `max_attempts` bounds the collision retry loop; values below 1 are
    /// treated as 1.
    pub fn new(store: Arc<dyn LinkStore>, max_attempts: usize) -> Self {
        Self {
            store,
            max_attempts: max_attempts.max(1),
        }
    }

    /// Allocates a fresh key for `target` and records the mapping.
    ///
    /// # Algorithm
    ///
    /// 1. Generate a random candidate key
    /// 2. Check the store for an existing record under it
    /// 3. If taken, discard it and go back to 1
    /// 4. Otherwise write it with [`LinkStore::put_if_absent`]
    ///
    /// The existence check and the write are separate round trips, so two
    /// concurrent submissions could both see the same candidate as free. The
    /// conditional write closes that gap: the loser sees `false` and the
    /// candidate counts as a collision, so no mapping is ever overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::KeyCollisionExhausted`] after `max_attempts`
    /// candidates were all taken.
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store fails; the loop
    /// stops at the first store error.
    pub async fn create_key(&self, target: &Url) -> Result<ShortKey, AppError> {
        for attempt in 1..=self.max_attempts {
            let candidate = generate_key()?;

            if self.store.get(candidate.as_str()).await?.is_some() {
                debug!(key = %candidate, attempt, "Key collision, retrying");
                continue;
            }

            if self
                .store
                .put_if_absent(candidate.as_str(), target.as_str())
                .await?
            {
                info!(key = %candidate, attempt, "Short link created");
                return Ok(candidate);
            }

            warn!(key = %candidate, attempt, "Key taken by a concurrent writer, retrying");
        }

        Err(AppError::KeyCollisionExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Looks up the target URL for a key.
    ///
    /// Returns `Ok(None)` for unknown keys.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::StoreUnavailable`] if the store fails.
    pub async fn resolve(&self, key: &ShortKey) -> Result<Option<String>, AppError> {
        Ok(self.store.get(key.as_str()).await?)
    }

    /// Builds the full short URL by resolving `key` as a path segment
    /// against `origin`.
    ///
    /// The origin is taken from the incoming request, so the link always uses
    /// whatever host the service is being accessed through.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if `origin` cannot be a base URL.
    pub fn short_url(origin: &Url, key: &ShortKey) -> Result<Url, AppError> {
        origin
            .join(&format!("/{}", key))
            .map_err(|e| AppError::internal(format!("Failed to build short URL: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockLinkStore, StoreError};
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn target() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    #[tokio::test]
    async fn test_create_key_first_candidate_free() {
        let mut store = MockLinkStore::new();

        store.expect_get().times(1).returning(|_| Ok(None));
        store
            .expect_put_if_absent()
            .withf(|key, url| ShortKey::is_valid(key) && url == "https://example.com/page")
            .times(1)
            .returning(|_, _| Ok(true));

        let service = LinkService::new(Arc::new(store), DEFAULT_MAX_ATTEMPTS);

        let key = service.create_key(&target()).await.unwrap();
        assert!(ShortKey::is_valid(key.as_str()));
    }

    #[tokio::test]
    async fn test_create_key_retries_past_collisions() {
        const TAKEN: usize = 3;

        let mut store = MockLinkStore::new();
        let checked = Arc::new(Mutex::new(Vec::<String>::new()));
        let calls = Arc::new(AtomicUsize::new(0));

        let checked_get = checked.clone();
        let calls_get = calls.clone();
        store.expect_get().times(TAKEN + 1).returning(move |key| {
            checked_get.lock().unwrap().push(key.to_string());
            if calls_get.fetch_add(1, Ordering::SeqCst) < TAKEN {
                Ok(Some("https://already.taken/".to_string()))
            } else {
                Ok(None)
            }
        });

        let checked_put = checked.clone();
        store
            .expect_put_if_absent()
            .withf(move |key, _| {
                let seen = checked_put.lock().unwrap();
                // Written key is the last one checked and none of the taken ones.
                seen.last().map(String::as_str) == Some(key) && !seen[..TAKEN].contains(&key.to_string())
            })
            .times(1)
            .returning(|_, _| Ok(true));

        let service = LinkService::new(Arc::new(store), DEFAULT_MAX_ATTEMPTS);

        let key = service.create_key(&target()).await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), TAKEN + 1);
        assert_eq!(checked.lock().unwrap().last().unwrap(), key.as_str());
    }

    #[tokio::test]
    async fn test_create_key_exhausted() {
        let mut store = MockLinkStore::new();

        store
            .expect_get()
            .times(4)
            .returning(|_| Ok(Some("https://already.taken/".to_string())));
        store.expect_put_if_absent().times(0);

        let service = LinkService::new(Arc::new(store), 4);

        let result = service.create_key(&target()).await;
        assert!(matches!(
            result,
            Err(AppError::KeyCollisionExhausted { attempts: 4 })
        ));
    }

    #[tokio::test]
    async fn test_create_key_lost_race_counts_as_collision() {
        let mut store = MockLinkStore::new();
        let writes = Arc::new(AtomicUsize::new(0));

        store.expect_get().times(2).returning(|_| Ok(None));

        let writes_put = writes.clone();
        store
            .expect_put_if_absent()
            .times(2)
            .returning(move |_, _| Ok(writes_put.fetch_add(1, Ordering::SeqCst) > 0));

        let service = LinkService::new(Arc::new(store), DEFAULT_MAX_ATTEMPTS);

        assert!(service.create_key(&target()).await.is_ok());
        assert_eq!(writes.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_create_key_store_failure_stops_loop() {
        let mut store = MockLinkStore::new();

        store
            .expect_get()
            .times(1)
            .returning(|_| Err(StoreError::Connection("refused".into())));
        store.expect_put_if_absent().times(0);

        let service = LinkService::new(Arc::new(store), DEFAULT_MAX_ATTEMPTS);

        let result = service.create_key(&target()).await;
        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_create_key_write_failure_propagates() {
        let mut store = MockLinkStore::new();

        store.expect_get().times(1).returning(|_| Ok(None));
        store
            .expect_put_if_absent()
            .times(1)
            .returning(|_, _| Err(StoreError::Operation("READONLY".into())));

        let service = LinkService::new(Arc::new(store), DEFAULT_MAX_ATTEMPTS);

        let result = service.create_key(&target()).await;
        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }

    #[tokio::test]
    async fn test_zero_attempts_still_tries_once() {
        let mut store = MockLinkStore::new();

        store.expect_get().times(1).returning(|_| Ok(None));
        store
            .expect_put_if_absent()
            .times(1)
            .returning(|_, _| Ok(true));

        let service = LinkService::new(Arc::new(store), 0);

        assert!(service.create_key(&target()).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_keys_are_distinct() {
        let mut store = MockLinkStore::new();
        let written = Arc::new(Mutex::new(HashSet::<String>::new()));

        let written_get = written.clone();
        store.expect_get().returning(move |key| {
            Ok(written_get
                .lock()
                .unwrap()
                .contains(key)
                .then(|| "https://already.taken/".to_string()))
        });

        let written_put = written.clone();
        store
            .expect_put_if_absent()
            .returning(move |key, _| Ok(written_put.lock().unwrap().insert(key.to_string())));

        let service = LinkService::new(Arc::new(store), DEFAULT_MAX_ATTEMPTS);

        let mut keys = HashSet::new();
        for _ in 0..50 {
            keys.insert(service.create_key(&target()).await.unwrap());
        }

        assert_eq!(keys.len(), 50);
        assert_eq!(written.lock().unwrap().len(), 50);
    }

    #[tokio::test]
    async fn test_resolve() {
        let mut store = MockLinkStore::new();

        store
            .expect_get()
            .withf(|key| key == "abc123")
            .times(1)
            .returning(|_| Ok(Some("https://example.com/".to_string())));
        store
            .expect_get()
            .withf(|key| key == "ffffff")
            .times(1)
            .returning(|_| Ok(None));

        let service = LinkService::new(Arc::new(store), DEFAULT_MAX_ATTEMPTS);

        let found = service.resolve(&"abc123".parse().unwrap()).await.unwrap();
        assert_eq!(found.as_deref(), Some("https://example.com/"));

        let missing = service.resolve(&"ffffff".parse().unwrap()).await.unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn test_short_url_uses_origin() {
        let origin = Url::parse("https://staging.sho.rt:8443").unwrap();
        let key: ShortKey = "a1b2c3".parse().unwrap();

        let url = LinkService::short_url(&origin, &key).unwrap();
        assert_eq!(url.as_str(), "https://staging.sho.rt:8443/a1b2c3");
    }

    #[test]
    fn test_short_url_ignores_origin_path() {
        let origin = Url::parse("http://localhost:3000/create").unwrap();
        let key: ShortKey = "0f0f0f".parse().unwrap();

        let url = LinkService::short_url(&origin, &key).unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/0f0f0f");
    }
}
