//! Runtime endpoint resolution.
//!
//! [`resolve`] is a pure function of the region, the compiled procedure and
//! the process default region. It takes no locks and performs no I/O, so a
//! single [`CompiledDecisionProcedure`] can be shared by any number of
//! threads or tasks.

use std::fmt;
use std::sync::Arc;

use ruststack_core::AwsRegion;
use ruststack_endpoints_model::{
    CompiledDecisionProcedure, EndpointDescriptor, FallbackRule, GlobalRegionBody,
};
use tracing::trace;

use crate::error::ResolveError;

/// Resolve the endpoint for `region` using `procedure`.
///
/// An absent region answers with the service's global rule when it has one,
/// otherwise `default_region` is resolved in its place. Region lookup is
/// exact and case-sensitive.
///
/// # Errors
///
/// Returns [`ResolveError::UnsupportedRegion`] when the region is not an
/// exception and the service has no fallback rule.
///
/// # Examples
///
/// ```
/// use ruststack_endpoints_core::{SupportedSignatureVersions, compile, resolve};
/// use ruststack_endpoints_model::{EndpointRule, EndpointTable};
///
/// let table = EndpointTable::new("svc")
///     .with_partition_default(EndpointRule::new("https://svc.%region%.example.com", "svc"), &[]);
/// let procedure = compile(&table, &SupportedSignatureVersions::new(["v4"])).unwrap();
///
/// let descriptor = resolve(Some("eu-west-9"), &procedure, "us-east-1").unwrap();
/// assert_eq!(descriptor.endpoint, "https://svc.eu-west-9.example.com");
/// assert_eq!(descriptor.sign_region, "eu-west-9");
/// ```
pub fn resolve(
    region: Option<&str>,
    procedure: &CompiledDecisionProcedure,
    default_region: &str,
) -> Result<EndpointDescriptor, ResolveError> {
    let region = match (region, procedure.global()) {
        (Some(region), _) => region,
        (None, GlobalRegionBody::Global(rule)) => {
            let sign_region = rule.sign_region.as_deref().unwrap_or(default_region);
            return Ok(rule.describe(sign_region));
        }
        (None, GlobalRegionBody::UseDefaultRegion) => default_region,
    };

    if let Some(rule) = procedure.exception(region) {
        trace!(service = procedure.service(), region, "resolved endpoint from exception");
        return Ok(rule.describe(region));
    }

    match procedure.fallback() {
        FallbackRule::Rule(rule) => Ok(rule.describe(region)),
        FallbackRule::Unsupported => Err(ResolveError::UnsupportedRegion {
            service: procedure.service().to_owned(),
            region: region.to_owned(),
        }),
    }
}

/// Source of endpoint descriptors for the request pipeline.
pub trait EndpointProvider: Send + Sync + fmt::Debug {
    /// Resolve the endpoint for a call targeting `region`.
    fn resolve_endpoint(&self, region: Option<&str>) -> Result<EndpointDescriptor, ResolveError>;
}

/// A compiled procedure bound to the process default region.
///
/// Cloning is cheap; the procedure is shared.
#[derive(Debug, Clone)]
pub struct ServiceEndpoints {
    procedure: Arc<CompiledDecisionProcedure>,
    default_region: AwsRegion,
}

impl ServiceEndpoints {
    /// Bind a procedure to a default region.
    #[must_use]
    pub fn new(procedure: impl Into<Arc<CompiledDecisionProcedure>>, default_region: AwsRegion) -> Self {
        Self {
            procedure: procedure.into(),
            default_region,
        }
    }

    /// Service name.
    #[must_use]
    pub fn service(&self) -> &str {
        self.procedure.service()
    }

    /// The underlying procedure.
    #[must_use]
    pub fn procedure(&self) -> &CompiledDecisionProcedure {
        &self.procedure
    }

    /// Region substituted for region-less calls.
    #[must_use]
    pub fn default_region(&self) -> &AwsRegion {
        &self.default_region
    }
}

impl EndpointProvider for ServiceEndpoints {
    fn resolve_endpoint(&self, region: Option<&str>) -> Result<EndpointDescriptor, ResolveError> {
        resolve(region, &self.procedure, self.default_region.as_str())
    }
}
