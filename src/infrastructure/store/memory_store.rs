//! Process-local link store.

use crate::domain::repositories::{LinkStore, StoreResult};
use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::{debug, warn};

/// A store that keeps mappings in process memory.
///
/// Used when no Redis connection is configured and in tests. Data is lost on
/// restart and is not shared between instances.
///
/// [`LinkStore::put_if_absent`] goes through the map's entry API, so the
/// existence check and the insert happen under one shard lock.
pub struct MemoryStore {
    links: DashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        warn!("Using in-memory store: links are lost on restart");
        Self {
            links: DashMap::new(),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkStore for MemoryStore {
    async fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self.links.get(key).map(|entry| entry.value().clone());
        debug!(key, hit = value.is_some(), "Memory GET");
        Ok(value)
    }

    async fn put_if_absent(&self, key: &str, url: &str) -> StoreResult<bool> {
        let written = match self.links.entry(key.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(url.to_string());
                true
            }
        };
        debug!(key, written, "Memory PUT");
        Ok(written)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
