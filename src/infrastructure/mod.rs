//! Infrastructure layer for external integrations.
//!
//! Provides the concrete store backends behind the domain layer's
//! [`crate::domain::repositories::LinkStore`] trait.
//!
//! # Modules
//!
//! - [`store`] - Redis and in-memory store implementations

pub mod store;
