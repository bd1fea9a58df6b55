//! Integration tests for RustStack endpoint compilation and resolution.
//!
//! The tests compile the generator's bundled metadata
//! (`codegen/metadata/endpoints.json`) and resolve against it end to end.
//!
//! Run them with:
//! ```text
//! cargo test -p ruststack-integration
//! ```

use std::sync::Once;

use ruststack_core::AwsRegion;
use ruststack_endpoints_core::{EndpointRegistry, SupportedSignatureVersions};
use ruststack_endpoints_model::EndpointMetadata;

static INIT: Once = Once::new();

/// Raw endpoint metadata shipped with the generator.
pub const ENDPOINTS_JSON: &str = include_str!("../../../codegen/metadata/endpoints.json");

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Parse the bundled metadata.
#[must_use]
pub fn metadata() -> EndpointMetadata {
    init_tracing();
    EndpointMetadata::from_json(ENDPOINTS_JSON).unwrap_or_else(|e| panic!("bad fixture: {e}"))
}

/// Signer set of a client that can sign with both v4 and v2.
#[must_use]
pub fn supported() -> SupportedSignatureVersions {
    SupportedSignatureVersions::new(["v4", "v2"])
}

/// Registry compiled from the bundled metadata.
#[must_use]
pub fn registry(default_region: &str) -> EndpointRegistry {
    EndpointRegistry::compile(&metadata(), &supported(), &AwsRegion::new(default_region))
        .unwrap_or_else(|e| panic!("failed to compile fixture: {e}"))
}

mod test_compile;
mod test_concurrency;
mod test_resolve;
