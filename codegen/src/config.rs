//! Generator configuration.
//!
//! The TOML config lists the services to compile and the signature versions
//! each generated client has signers for:
//!
//! ```toml
//! default_signature_versions = ["v4"]
//!
//! [services.cloudformation]
//!
//! [services.sdb]
//! signature_versions = ["v4", "v2"]
//! ```

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use ruststack_endpoints_core::SupportedSignatureVersions;
use serde::Deserialize;

/// Top-level generator configuration.
#[derive(Debug, Deserialize)]
pub struct CodegenConfig {
    /// Signature versions used by services that do not override them.
    #[serde(default = "default_signature_versions")]
    pub default_signature_versions: Vec<String>,
    /// Services to compile, keyed by metadata name.
    #[serde(default)]
    pub services: BTreeMap<String, ServiceConfig>,
}

/// Per-service overrides.
#[derive(Debug, Default, Deserialize)]
pub struct ServiceConfig {
    /// Signature versions this service's client can sign with.
    pub signature_versions: Option<Vec<String>>,
}

fn default_signature_versions() -> Vec<String> {
    vec!["v4".to_owned()]
}

impl CodegenConfig {
    /// Parse the TOML configuration.
    pub fn from_toml(source: &str) -> Result<Self> {
        toml::from_str(source).context("Failed to parse codegen config")
    }

    /// Signature versions supported by `service`'s client.
    pub fn supported_for(&self, service: &str) -> SupportedSignatureVersions {
        let versions = self
            .services
            .get(service)
            .and_then(|s| s.signature_versions.as_ref())
            .unwrap_or(&self.default_signature_versions);
        versions.iter().map(String::as_str).collect()
    }
}
