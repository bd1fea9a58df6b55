//! Resolved endpoint descriptors handed to transport and signer.

use serde::{Deserialize, Serialize};

use crate::signature::SignatureVersion;

/// Fully resolved endpoint for one call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointDescriptor {
    /// Endpoint URL with the region substituted.
    pub endpoint: String,
    /// Region bound into the signature.
    pub sign_region: String,
    /// Service name bound into the signature.
    pub sign_service: String,
    /// Acceptable signature versions, most preferred first.
    pub sign_versions: Vec<SignatureVersion>,
}

impl EndpointDescriptor {
    /// The version the signer should use.
    #[must_use]
    pub fn preferred_version(&self) -> Option<&SignatureVersion> {
        self.sign_versions.first()
    }

    /// Pick the highest-ranked version among those the caller can sign with.
    ///
    /// Lower-ranked entries are only returned because the caller listed what
    /// it supports; nothing is substituted silently.
    #[must_use]
    pub fn negotiate(&self, available: &[SignatureVersion]) -> Option<&SignatureVersion> {
        self.sign_versions.iter().find(|v| available.contains(v))
    }
}
