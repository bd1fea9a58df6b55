//! Configuration management for RustStack endpoint resolution.
//!
//! All configuration is driven by environment variables.

use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

use crate::error::RustStackResult;
use crate::types::AwsRegion;

/// Global configuration for RustStack clients and tools.
///
/// # Examples
///
/// ```
/// use ruststack_core::RustStackConfig;
///
/// let config = RustStackConfig::default();
/// assert_eq!(config.default_region.as_str(), "us-east-1");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct RustStackConfig {
    /// Region used when a call supplies none and the service has no global endpoint.
    #[builder(default)]
    pub default_region: AwsRegion,
    /// Log level.
    #[builder(default = String::from("info"))]
    pub log_level: String,
    /// Directory holding compiled endpoint procedures (`<service>.json`).
    #[builder(default = String::from("endpoints"))]
    pub endpoints_dir: String,
}

impl Default for RustStackConfig {
    fn default() -> Self {
        Self {
            default_region: AwsRegion::default(),
            log_level: "info".to_owned(),
            endpoints_dir: "endpoints".to_owned(),
        }
    }
}

impl RustStackConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `DEFAULT_REGION` | `AWS_REGION`, then `us-east-1` |
    /// | `LOG_LEVEL` | `info` |
    /// | `ENDPOINTS_DIR` | `endpoints` |
    ///
    /// # Errors
    /// Returns an error if the configured region is malformed.
    pub fn from_env() -> RustStackResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> RustStackResult<Self> {
        let mut config = Self::default();

        if let Some(v) = lookup("DEFAULT_REGION").or_else(|| lookup("AWS_REGION")) {
            config.default_region = AwsRegion::try_new(v)?;
        }
        if let Some(v) = lookup("LOG_LEVEL") {
            config.log_level = v;
        }
        if let Some(v) = lookup("ENDPOINTS_DIR") {
            config.endpoints_dir = v;
        }

        Ok(config)
    }
}
