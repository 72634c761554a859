//! HTML page handlers.

mod create;
mod home;
mod not_found;

pub use create::{CreatedTemplate, InvalidSubmissionTemplate, create_handler};
pub use home::home_handler;
pub use not_found::not_found_handler;
