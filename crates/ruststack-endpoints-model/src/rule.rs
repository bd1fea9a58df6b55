//! Endpoint rules as declared in service metadata.

use serde::{Deserialize, Serialize};

use crate::signature::SignatureVersion;

/// The atomic endpoint configuration unit.
///
/// `endpoint` is a template that may contain the `%region%` placeholder.
/// When `sign_region` is absent the resolved region is used for signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointRule {
    /// Endpoint URL template.
    pub endpoint: String,
    /// Fixed signing region, if the rule pins one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_region: Option<String>,
    /// Signing namespace.
    pub sign_service: String,
    /// Declared signature versions, in no particular order.
    #[serde(default)]
    pub sign_versions: Vec<SignatureVersion>,
}

impl EndpointRule {
    /// Create a rule signing with `v4` only and no pinned signing region.
    #[must_use]
    pub fn new(endpoint: impl Into<String>, sign_service: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            sign_region: None,
            sign_service: sign_service.into(),
            sign_versions: vec![SignatureVersion::v4()],
        }
    }

    /// Pin the signing region.
    #[must_use]
    pub fn with_sign_region(mut self, region: impl Into<String>) -> Self {
        self.sign_region = Some(region.into());
        self
    }

    /// Replace the declared signature versions.
    #[must_use]
    pub fn with_sign_versions<I, V>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<SignatureVersion>,
    {
        self.sign_versions = versions.into_iter().map(Into::into).collect();
        self
    }
}

/// A rule shared by an enumerated set of regions, usually one partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionRule {
    /// Partition name (`aws`, `aws-cn`, `aws-us-gov`, ...).
    pub partition: String,
    /// The rule every listed region shares.
    pub rule: EndpointRule,
    /// Regions the rule is declared for. An empty list contributes nothing.
    #[serde(default)]
    pub regions: Vec<String>,
}

impl PartitionRule {
    /// Create a partition rule.
    #[must_use]
    pub fn new<I, S>(partition: impl Into<String>, rule: EndpointRule, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            partition: partition.into(),
            rule,
            regions: regions.into_iter().map(Into::into).collect(),
        }
    }
}
