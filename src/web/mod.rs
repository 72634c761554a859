//! Web layer for the browser-facing pages.
//!
//! Pages are rendered server-side with Askama. Every template extends
//! `templates/base.html`, which provides the shared header and stylesheets.
//!
//! # Modules
//!
//! - [`forms`] - Submission form and URL validation
//! - [`handlers`] - Page handlers and their templates
//! - [`middleware`] - Same-origin check for submissions
//! - [`routes`] - Page route configuration

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod routes;
