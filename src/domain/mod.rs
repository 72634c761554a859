//! Domain layer containing the short key entity and the store contract.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures ([`entities::ShortKey`])
//! - [`repositories`] - Store trait ([`repositories::LinkStore`])
//!
//! The domain layer has no dependencies on infrastructure or presentation
//! layers. Behavior that needs the store is in [`crate::application::services`].

pub mod entities;
pub mod repositories;
