//! Signature version intersection and ranking.

use std::collections::BTreeSet;

use ruststack_endpoints_model::SignatureVersion;

/// Signature versions the client has signers for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SupportedSignatureVersions(BTreeSet<SignatureVersion>);

impl SupportedSignatureVersions {
    /// Create a set from any list of versions.
    #[must_use]
    pub fn new<I, V>(versions: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SignatureVersion>,
    {
        Self(versions.into_iter().map(Into::into).collect())
    }

    /// Intersect `declared` with the supported set and rank the result
    /// highest version first, without duplicates.
    ///
    /// ```
    /// use ruststack_endpoints_core::SupportedSignatureVersions;
    /// use ruststack_endpoints_model::SignatureVersion;
    ///
    /// let supported = SupportedSignatureVersions::new(["v4", "v2"]);
    /// let ranked = supported.rank(&[SignatureVersion::v2(), SignatureVersion::v4()]);
    /// assert_eq!(ranked, vec![SignatureVersion::v4(), SignatureVersion::v2()]);
    /// ```
    #[must_use]
    pub fn rank(&self, declared: &[SignatureVersion]) -> Vec<SignatureVersion> {
        declared
            .iter()
            .filter(|v| self.0.contains(*v))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .rev()
            .cloned()
            .collect()
    }

    /// Whether a signer exists for `version`.
    #[must_use]
    pub fn contains(&self, version: &SignatureVersion) -> bool {
        self.0.contains(version)
    }

    /// Whether no signer is available at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<V: Into<SignatureVersion>> FromIterator<V> for SupportedSignatureVersions {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self::new(iter)
    }
}
