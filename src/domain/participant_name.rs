//! Validated participant name.
//!
//! [`ParticipantName`] is a newtype around a trimmed, non-empty `String`.
//! Uniqueness inside the registry is decided by [`ParticipantName::key`],
//! the lowercase form of the name, so `"Ana"` and `"ANA"` collide.
//!
//! Trimming follows the whitespace set of ECMAScript `String.prototype.trim`:
//! Unicode `White_Space` plus U+FEFF, minus U+0085.

use std::fmt;

use serde::Serialize;

use crate::error::RegistryError;

/// A participant name as stored in the registry.
///
/// Constructed only through [`ParticipantName::parse`], which guarantees
/// the inner value has no leading or trailing whitespace and is not empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ParticipantName(String);

impl ParticipantName {
    /// Trims `candidate` and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyName`] if nothing is left after
    /// trimming.
    pub fn parse(candidate: &str) -> Result<Self, RegistryError> {
        let trimmed = candidate.trim_matches(is_trimmed);
        if trimmed.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as entered, minus surrounding whitespace.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-folded comparison key.
    #[must_use]
    pub fn key(&self) -> String {
        self.0.to_lowercase()
    }

    /// Returns `true` if both names are equal ignoring case.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.key() == other.key()
    }

    /// Consumes the wrapper, returning the inner `String`.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_trimmed(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

impl fmt::Display for ParticipantName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ParticipantName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<ParticipantName> for String {
    fn from(name: ParticipantName) -> Self {
        name.0
    }
}
