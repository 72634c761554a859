//! HTTP request handlers for the redirect and health endpoints.

pub mod health;
pub mod redirect;

pub use health::health_handler;
pub use redirect::{create_path_redirect_handler, redirect_handler};
