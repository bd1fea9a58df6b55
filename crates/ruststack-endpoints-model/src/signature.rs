//! Signature version identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a request-authentication scheme generation (e.g. `v4`).
///
/// Versions compare as plain strings. Preference lists are sorted descending,
/// so `v4` ranks ahead of `v2`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SignatureVersion(String);

impl SignatureVersion {
    /// Signature Version 4.
    pub const V4: &str = "v4";
    /// Legacy Signature Version 2.
    pub const V2: &str = "v2";

    /// Create a signature version from its identifier.
    #[must_use]
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    /// Shorthand for [`Self::V4`].
    #[must_use]
    pub fn v4() -> Self {
        Self::new(Self::V4)
    }

    /// Shorthand for [`Self::V2`].
    #[must_use]
    pub fn v2() -> Self {
        Self::new(Self::V2)
    }

    /// Get the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SignatureVersion {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for SignatureVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
