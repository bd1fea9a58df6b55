//! Per-service endpoint tables and the raw metadata they are loaded from.
//!
//! Raw metadata is a JSON object keyed by service name. Each service object
//! uses two reserved keys, `_global` and `_default`, mapping partition names
//! to rules with an explicit region list; every other key is an explicit
//! region:
//!
//! ```json
//! {
//!   "cloudformation": {
//!     "_default": {
//!       "aws": {"endpoint": "https://cloudformation.%region%.amazonaws.com",
//!               "signService": "cloudformation", "signVersions": ["v4"],
//!               "regions": ["us-east-1", "eu-west-1"]}
//!     },
//!     "us-east-1-fips": {"endpoint": "https://cloudformation-fips.us-east-1.amazonaws.com",
//!                        "signRegion": "us-east-1", "signService": "cloudformation",
//!                        "signVersions": ["v4"]}
//!   }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::MetadataError;
use crate::rule::{EndpointRule, PartitionRule};

/// Name of the main partition. Its `_global` and `_default` entries become
/// the table's global and partition-default rules.
pub const MAIN_PARTITION: &str = "aws";

/// Endpoint rules for a single service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointTable {
    /// Service name, used for diagnostics.
    pub service: String,
    /// Rule applied when no region is supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub global_rule: Option<PartitionRule>,
    /// Rule applied to main-partition regions without a specific override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub partition_default_rule: Option<PartitionRule>,
    /// Rules shared by whole partitions (China, GovCloud, ISO, ...).
    #[serde(default)]
    pub partition_rules: Vec<PartitionRule>,
    /// Explicit per-region rules, highest precedence.
    #[serde(default)]
    pub region_rules: BTreeMap<String, EndpointRule>,
}

impl EndpointTable {
    /// Create an empty table for a service.
    #[must_use]
    pub fn new(service: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            ..Self::default()
        }
    }

    /// Build a table from the raw metadata of one service.
    ///
    /// `_global.aws` becomes the global rule and `_default.aws` the partition
    /// default. Other partitions keep their declaration order: `_global`
    /// entries first, then `_default` entries, each sorted by partition name.
    pub fn from_raw(service: impl Into<String>, raw: &RawEndpoints) -> Result<Self, MetadataError> {
        let service = service.into();

        if let Some(key) = raw.regions.keys().find(|k| k.starts_with('_')) {
            return Err(MetadataError::ReservedKey {
                service,
                key: key.clone(),
            });
        }

        let mut table = Self::new(service);
        for (partition, entry) in &raw.global {
            let rule = entry.to_partition_rule(partition);
            if partition == MAIN_PARTITION {
                table.global_rule = Some(rule);
            } else {
                table.partition_rules.push(rule);
            }
        }
        for (partition, entry) in &raw.default {
            let rule = entry.to_partition_rule(partition);
            if partition == MAIN_PARTITION {
                table.partition_default_rule = Some(rule);
            } else {
                table.partition_rules.push(rule);
            }
        }
        table.region_rules = raw.regions.clone();

        Ok(table)
    }

    /// Set the global rule.
    #[must_use]
    pub fn with_global(mut self, rule: EndpointRule, regions: &[&str]) -> Self {
        self.global_rule = Some(PartitionRule::new(MAIN_PARTITION, rule, regions.iter().copied()));
        self
    }

    /// Set the partition-default rule.
    #[must_use]
    pub fn with_partition_default(mut self, rule: EndpointRule, regions: &[&str]) -> Self {
        self.partition_default_rule =
            Some(PartitionRule::new(MAIN_PARTITION, rule, regions.iter().copied()));
        self
    }

    /// Append a partition rule.
    #[must_use]
    pub fn with_partition(mut self, partition: &str, rule: EndpointRule, regions: &[&str]) -> Self {
        self.partition_rules
            .push(PartitionRule::new(partition, rule, regions.iter().copied()));
        self
    }

    /// Add an explicit region rule.
    #[must_use]
    pub fn with_region(mut self, region: &str, rule: EndpointRule) -> Self {
        self.region_rules.insert(region.to_owned(), rule);
        self
    }
}

/// A `_global` / `_default` entry: a rule plus the regions it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawPartitionEntry {
    /// The shared rule.
    #[serde(flatten)]
    pub rule: EndpointRule,
    /// Regions covered by the rule.
    #[serde(default)]
    pub regions: Vec<String>,
}

impl RawPartitionEntry {
    fn to_partition_rule(&self, partition: &str) -> PartitionRule {
        PartitionRule::new(partition, self.rule.clone(), self.regions.iter().cloned())
    }
}

/// Raw endpoint metadata of one service, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RawEndpoints {
    /// `_global` section, keyed by partition.
    #[serde(rename = "_global", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub global: BTreeMap<String, RawPartitionEntry>,
    /// `_default` section, keyed by partition.
    #[serde(rename = "_default", default, skip_serializing_if = "BTreeMap::is_empty")]
    pub default: BTreeMap<String, RawPartitionEntry>,
    /// Explicit region rules.
    #[serde(flatten)]
    pub regions: BTreeMap<String, EndpointRule>,
}

/// Raw endpoint metadata for many services, keyed by service name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EndpointMetadata(BTreeMap<String, RawEndpoints>);

impl EndpointMetadata {
    /// Parse metadata from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Service names, sorted.
    pub fn services(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Build the endpoint table of one service, if present.
    pub fn table(&self, service: &str) -> Result<Option<EndpointTable>, MetadataError> {
        self.0
            .get(service)
            .map(|raw| EndpointTable::from_raw(service, raw))
            .transpose()
    }

    /// Build the endpoint tables of every service, sorted by service name.
    pub fn tables(&self) -> Result<Vec<EndpointTable>, MetadataError> {
        self.0
            .iter()
            .map(|(service, raw)| EndpointTable::from_raw(service.as_str(), raw))
            .collect()
    }

    /// Number of services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no service is described.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
