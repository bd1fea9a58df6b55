//! Common AWS type definitions.

use std::fmt;

/// AWS Region identifier.
///
/// Regions are opaque, case-sensitive strings; FIPS aliases such as
/// `us-east-1-fips` are regions like any other.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct AwsRegion(String);

impl AwsRegion {
    /// Region used when neither the caller nor the environment supplies one.
    pub const DEFAULT: &str = "us-east-1";

    /// Create a new region without validation.
    #[must_use]
    pub fn new(region: impl Into<String>) -> Self {
        Self(region.into())
    }

    /// Create a region, rejecting empty strings and embedded whitespace.
    ///
    /// # Errors
    /// Returns [`crate::RustStackError::InvalidRegion`] for malformed input.
    pub fn try_new(region: impl Into<String>) -> crate::RustStackResult<Self> {
        let region = region.into();
        if region.is_empty() || region.chars().any(char::is_whitespace) {
            return Err(crate::RustStackError::InvalidRegion(region));
        }
        Ok(Self(region))
    }

    /// Get the region as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for AwsRegion {
    fn default() -> Self {
        Self(Self::DEFAULT.to_owned())
    }
}

impl fmt::Display for AwsRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AwsRegion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
