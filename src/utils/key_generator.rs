//! Random short key generation.

use crate::domain::entities::{InvalidShortKey, KEY_LENGTH, ShortKey};
use crate::error::AppError;

/// Bytes of randomness drawn per candidate (a full 128-bit identifier).
const RANDOM_BYTES: usize = 16;

/// Generates a random candidate key.
///
/// Draws 128 bits from the OS random source, hex-encodes them and keeps the
/// first [`KEY_LENGTH`] characters. The result is always lowercase hex, which
/// gives 16^6 (about 16.7 million) possible keys.
///
/// Uniqueness is not checked here; see
/// [`crate::application::services::LinkService::create_key`].
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_key() -> Result<ShortKey, AppError> {
    let mut buffer = [0u8; RANDOM_BYTES];

    getrandom::fill(&mut buffer)
        .map_err(|e| AppError::internal(format!("Random source failed: {}", e)))?;

    let encoded = hex::encode(buffer);

    encoded[..KEY_LENGTH]
        .parse()
        .map_err(|e: InvalidShortKey| AppError::internal(e.to_string()))
}
