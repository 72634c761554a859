//! Utility functions for key generation and request handling.
//!
//! - [`key_generator`] - Random short key candidates
//! - [`request_origin`] - Request origin extraction from HTTP headers

pub mod key_generator;
pub mod request_origin;
