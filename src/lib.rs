//! # Shorten Me
//!
//! A minimal URL shortener built with Axum and Redis.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Short key type and the link store trait
//! - **Application Layer** ([`application`]) - Key allocation with collision retry
//! - **Infrastructure Layer** ([`infrastructure`]) - Redis and in-memory stores
//! - **API Layer** ([`api`]) - Redirect and health handlers, tracing middleware
//! - **Web Layer** ([`web`]) - HTML form, submission handler and origin check
//!
//! ## Features
//!
//! - Random 6-character hex keys, never overwritten once issued
//! - 302 redirects, unknown keys bounce to the home page
//! - Same-origin protection on form submissions
//! - Redis with retry and timeouts, or an in-memory store for development
//!
//! ## Quick Start
//!
//! ```bash
//! export REDIS_URL="redis://localhost:6379"  # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::ShortKey;
    pub use crate::domain::repositories::{LinkStore, StoreError, StoreResult};
    pub use crate::error::AppError;
    pub use crate::infrastructure::store::{MemoryStore, RedisStore, RedisStoreOptions};
    pub use crate::state::{AppState, OriginPolicy};
}
