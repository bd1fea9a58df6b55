//! RustStack endpoint resolver.
//!
//! Loads the compiled endpoint procedures written by `ruststack-codegen` and
//! resolves one service/region pair, printing the descriptor as JSON.
//!
//! # Usage
//!
//! ```text
//! ENDPOINTS_DIR=endpoints ruststack-endpoints sts
//! ENDPOINTS_DIR=endpoints ruststack-endpoints cloudformation cn-north-1
//! ```
//!
//! # Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ENDPOINTS_DIR` | `endpoints` | Directory of `<service>.json` procedures |
//! | `DEFAULT_REGION` | `AWS_REGION`, then `us-east-1` | Region used when none is given |
//! | `LOG_LEVEL` | `info` | Log level filter |
//! | `RUST_LOG` | *(unset)* | Fine-grained tracing filter (overrides `LOG_LEVEL`) |

use std::path::Path;

use anyhow::{Context, Result, bail};
use ruststack_core::RustStackConfig;
use ruststack_endpoints_core::{EndpointProvider, EndpointRegistry};
use ruststack_endpoints_model::EndpointDescriptor;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize the tracing subscriber.
///
/// Uses `RUST_LOG` if set, otherwise falls back to the `LOG_LEVEL` config value.
fn init_tracing(log_level: &str) -> Result<()> {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::try_new(log_level)
            .with_context(|| format!("invalid log level filter: {log_level}"))?
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

/// Resolve `service` in `region` against the procedures loaded into `registry`.
fn lookup(
    registry: &EndpointRegistry,
    service: &str,
    region: Option<&str>,
) -> Result<EndpointDescriptor> {
    let Some(endpoints) = registry.get(service) else {
        bail!(
            "unknown service {service:?}; known services: {}",
            registry.services().join(", ")
        );
    };
    let descriptor = endpoints.resolve_endpoint(region)?;
    Ok(descriptor)
}

fn main() -> Result<()> {
    let config = RustStackConfig::from_env().context("invalid configuration")?;
    init_tracing(&config.log_level)?;

    let mut args = std::env::args().skip(1);
    let Some(service) = args.next() else {
        bail!("usage: ruststack-endpoints <service> [region]");
    };
    let region = args.next();

    let registry = EndpointRegistry::load_dir(Path::new(&config.endpoints_dir), &config.default_region)
        .with_context(|| format!("failed to load endpoints from {}", config.endpoints_dir))?;

    let descriptor = lookup(&registry, &service, region.as_deref())?;
    info!(
        service = %service,
        region = region.as_deref().unwrap_or("<default>"),
        endpoint = %descriptor.endpoint,
        "resolved endpoint"
    );

    println!("{}", serde_json::to_string_pretty(&descriptor)?);
    Ok(())
}
