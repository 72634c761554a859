#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use shorten_me::application::services::DEFAULT_MAX_ATTEMPTS;
use shorten_me::domain::repositories::{LinkStore, StoreError, StoreResult};
use shorten_me::infrastructure::store::MemoryStore;
use shorten_me::routes::router;
use shorten_me::state::{AppState, OriginPolicy};
use std::sync::Arc;

pub const HOST: &str = "s.example.com";
pub const ORIGIN: &str = "http://s.example.com";

/// Store that fails every call, as if Redis were down.
pub struct FailingStore;

#[async_trait]
impl LinkStore for FailingStore {
    async fn get(&self, _key: &str) -> StoreResult<Option<String>> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn put_if_absent(&self, _key: &str, _url: &str) -> StoreResult<bool> {
        Err(StoreError::Connection("connection refused".to_string()))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

pub fn create_test_state(store: Arc<dyn LinkStore>) -> AppState {
    AppState::new(store, DEFAULT_MAX_ATTEMPTS, OriginPolicy::default())
}

/// Test server over a fresh in-memory store; the store is returned for inspection.
pub fn create_test_server() -> (TestServer, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let server = TestServer::new(router(create_test_state(store.clone()))).unwrap();
    (server, store)
}

pub fn create_failing_server() -> TestServer {
    TestServer::new(router(create_test_state(Arc::new(FailingStore)))).unwrap()
}

/// Pulls the short URL out of the rendered "Created!" page.
pub fn extract_short_url(html: &str) -> String {
    let start = html.find("value=\"").expect("no value attribute") + "value=\"".len();
    let end = html[start..].find('"').expect("unterminated value attribute");
    html[start..start + end].to_string()
}
