//! Structural equality of endpoint rules at a given region.

use ruststack_endpoints_model::EndpointRule;

use crate::signature::SupportedSignatureVersions;
use crate::template::render;

/// Whether `candidate` and `default` resolve to the same descriptor for
/// `region`.
///
/// Two rules match when their rendered endpoints, effective signing regions
/// and signing services are equal and their ranked signature versions are
/// identical. Rules that match are redundant: the default already produces
/// the right answer for the region.
#[must_use]
pub fn same_config(
    candidate: &EndpointRule,
    default: &EndpointRule,
    region: &str,
    supported: &SupportedSignatureVersions,
) -> bool {
    if render(&candidate.endpoint, region) != render(&default.endpoint, region) {
        return false;
    }

    let candidate_region = candidate.sign_region.as_deref().unwrap_or(region);
    let default_region = default.sign_region.as_deref().unwrap_or(region);
    if candidate_region != default_region {
        return false;
    }

    if candidate.sign_service != default.sign_service {
        return false;
    }

    supported.rank(&candidate.sign_versions) == supported.rank(&default.sign_versions)
}
