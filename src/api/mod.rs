//! HTTP layer for the non-HTML endpoints.
//!
//! # Modules
//!
//! - [`dto`] - JSON response bodies
//! - [`handlers`] - Redirect and health handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
