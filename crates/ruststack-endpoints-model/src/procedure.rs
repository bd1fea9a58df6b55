//! Compiled decision procedures.
//!
//! A [`CompiledDecisionProcedure`] is the immutable output of compiling one
//! service's endpoint table: a fallback rule plus the regions whose effective
//! rule differs from it, sorted by region so lookups can binary search.

use serde::{Deserialize, Serialize};

use crate::descriptor::EndpointDescriptor;
use crate::error::MetadataError;
use crate::signature::SignatureVersion;

/// Placeholder substituted with the resolved region in endpoint templates.
pub const REGION_PLACEHOLDER: &str = "%region%";

/// A rule whose signature versions are already intersected and ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedRule {
    /// Endpoint, possibly still containing `%region%`.
    pub endpoint: String,
    /// Pinned signing region; the resolved region is used when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sign_region: Option<String>,
    /// Signing namespace.
    pub sign_service: String,
    /// Ranked signature versions, most preferred first.
    pub sign_versions: Vec<SignatureVersion>,
}

impl ResolvedRule {
    /// Whether the rule still needs a region to produce an endpoint.
    #[must_use]
    pub fn is_templated(&self) -> bool {
        self.sign_region.is_none() || self.endpoint.contains(REGION_PLACEHOLDER)
    }

    /// Produce the descriptor for `region`.
    #[must_use]
    pub fn describe(&self, region: &str) -> EndpointDescriptor {
        EndpointDescriptor {
            endpoint: self.endpoint.replace(REGION_PLACEHOLDER, region),
            sign_region: self
                .sign_region
                .clone()
                .unwrap_or_else(|| region.to_owned()),
            sign_service: self.sign_service.clone(),
            sign_versions: self.sign_versions.clone(),
        }
    }

    /// Reject rules that could only produce an unusable descriptor.
    fn check(&self) -> Result<(), String> {
        if self.sign_versions.is_empty() {
            return Err("no signature version".to_owned());
        }
        if self.endpoint.trim().is_empty() {
            return Err("endpoint is empty".to_owned());
        }
        let mut rest = self.endpoint.as_str();
        while let Some(pos) = rest.find('%') {
            let Some(tail) = rest[pos..].strip_prefix(REGION_PLACEHOLDER) else {
                return Err(format!(
                    "endpoint {:?} uses a placeholder other than {REGION_PLACEHOLDER}",
                    self.endpoint
                ));
            };
            rest = tail;
        }
        Ok(())
    }
}

/// What to do when the caller supplies no region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rule", rename_all = "camelCase")]
pub enum GlobalRegionBody {
    /// Substitute the process default region and resolve as usual.
    UseDefaultRegion,
    /// Answer with the service's global rule.
    Global(ResolvedRule),
}

/// Rule applied to every region that is not an exception.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "rule", rename_all = "camelCase")]
pub enum FallbackRule {
    /// The effective default rule.
    Rule(ResolvedRule),
    /// No default exists; unmatched regions are unsupported.
    Unsupported,
}

/// A region whose effective rule differs from the fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionException {
    /// Exact region string.
    pub region: String,
    /// The region's rule.
    #[serde(flatten)]
    pub rule: ResolvedRule,
}

/// Minimal decision procedure for one service.
///
/// Exceptions are kept sorted by region and unique; both
/// [`CompiledDecisionProcedure::new`] and deserialization enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ProcedureRepr")]
pub struct CompiledDecisionProcedure {
    service: String,
    global: GlobalRegionBody,
    exceptions: Vec<RegionException>,
    fallback: FallbackRule,
}

impl CompiledDecisionProcedure {
    /// Assemble a procedure, sorting exceptions by region.
    ///
    /// Fails if two exceptions share a region.
    pub fn new(
        service: impl Into<String>,
        global: GlobalRegionBody,
        mut exceptions: Vec<RegionException>,
        fallback: FallbackRule,
    ) -> Result<Self, MetadataError> {
        exceptions.sort_by(|a, b| a.region.cmp(&b.region));
        Self::from_sorted(service.into(), global, exceptions, fallback)
    }

    fn from_sorted(
        service: String,
        global: GlobalRegionBody,
        exceptions: Vec<RegionException>,
        fallback: FallbackRule,
    ) -> Result<Self, MetadataError> {
        if let Some(pair) = exceptions.windows(2).find(|w| w[0].region >= w[1].region) {
            return Err(MetadataError::UnsortedExceptions {
                service,
                region: pair[1].region.clone(),
            });
        }

        let invalid = |scope: &str, reason| MetadataError::InvalidRule {
            service: service.clone(),
            scope: scope.to_owned(),
            reason,
        };
        if let GlobalRegionBody::Global(rule) = &global {
            rule.check().map_err(|reason| invalid("global", reason))?;
        }
        if let FallbackRule::Rule(rule) = &fallback {
            rule.check().map_err(|reason| invalid("fallback", reason))?;
        }
        for exception in &exceptions {
            exception
                .rule
                .check()
                .map_err(|reason| invalid(exception.region.as_str(), reason))?;
        }

        Ok(Self {
            service,
            global,
            exceptions,
            fallback,
        })
    }

    /// Parse a procedure from JSON.
    pub fn from_json(json: &str) -> Result<Self, MetadataError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize as pretty JSON. Identical procedures produce identical bytes.
    pub fn to_json_pretty(&self) -> Result<String, MetadataError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Service this procedure was compiled for.
    #[must_use]
    pub fn service(&self) -> &str {
        &self.service
    }

    /// Behavior when no region is supplied.
    #[must_use]
    pub fn global(&self) -> &GlobalRegionBody {
        &self.global
    }

    /// Exceptions, sorted by region.
    #[must_use]
    pub fn exceptions(&self) -> &[RegionException] {
        &self.exceptions
    }

    /// Rule for regions that are not exceptions.
    #[must_use]
    pub fn fallback(&self) -> &FallbackRule {
        &self.fallback
    }

    /// Look up the exception for `region` (exact, case-sensitive).
    #[must_use]
    pub fn exception(&self, region: &str) -> Option<&ResolvedRule> {
        self.exceptions
            .binary_search_by(|e| e.region.as_str().cmp(region))
            .ok()
            .map(|idx| &self.exceptions[idx].rule)
    }
}

#[derive(Deserialize)]
struct ProcedureRepr {
    service: String,
    global: GlobalRegionBody,
    #[serde(default)]
    exceptions: Vec<RegionException>,
    fallback: FallbackRule,
}

impl TryFrom<ProcedureRepr> for CompiledDecisionProcedure {
    type Error = MetadataError;

    fn try_from(repr: ProcedureRepr) -> Result<Self, Self::Error> {
        Self::from_sorted(repr.service, repr.global, repr.exceptions, repr.fallback)
    }
}
