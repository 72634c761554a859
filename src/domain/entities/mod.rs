//! Core domain entities.
//!
//! The service has a single persisted concept: a short key mapped to a target
//! URL. The mapping itself lives in the store as a plain string pair, so the
//! only entity with behavior is the key.
//!
//! - [`ShortKey`] - A validated six-character key

pub mod short_key;

pub use short_key::{InvalidShortKey, KEY_LENGTH, ShortKey};
