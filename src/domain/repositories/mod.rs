//! Store trait definitions for the domain layer.
//!
//! The service depends on an external key-value store through the
//! [`LinkStore`] trait. Implementations live in
//! `crate::infrastructure::store`; a `mockall` mock is generated for unit tests.

pub mod link_store;

pub use link_store::{LinkStore, StoreError, StoreResult};

#[cfg(test)]
pub use link_store::MockLinkStore;
