//! Web-specific middleware.

pub mod csrf;
