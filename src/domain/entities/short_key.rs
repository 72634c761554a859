//! Short key entity identifying a stored link.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Number of characters in every short key.
pub const KEY_LENGTH: usize = 6;

/// Pattern a path segment must match to be treated as a short key.
static KEY_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9a-z]{6}$").unwrap());

/// Returned when a string does not match the short key pattern.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("short key must be exactly {KEY_LENGTH} characters from [0-9a-z], got '{0}'")]
pub struct InvalidShortKey(pub String);

/// A validated short key: exactly six characters from `[0-9a-z]`.
///
/// Generated keys only ever use the hex subset (`[0-9a-f]`), but any key in the
/// wider alphabet is accepted when parsing so the route pattern stays stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ShortKey(String);

impl ShortKey {
    /// Returns true if `candidate` matches the short key pattern.
    pub fn is_valid(candidate: &str) -> bool {
        KEY_REGEX.is_match(candidate)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ShortKey {
    type Err = InvalidShortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if Self::is_valid(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(InvalidShortKey(s.to_string()))
        }
    }
}

impl fmt::Display for ShortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ShortKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
