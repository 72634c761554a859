//! Link store backends.
//!
//! Implementations of [`crate::domain::repositories::LinkStore`]:
//! - [`RedisStore`] - Production Redis-backed store
//! - [`MemoryStore`] - Process-local store for development and tests

mod memory_store;
mod redis_store;

pub use memory_store::MemoryStore;
pub use redis_store::{RedisStore, RedisStoreOptions};
