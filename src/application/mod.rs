//! Application layer services.
//!
//! Services consume the store trait from [`crate::domain::repositories`] and
//! give HTTP handlers and the admin CLI a small API.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short key allocation and lookup

pub mod services;
