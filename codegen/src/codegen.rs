//! Compile endpoint tables and render the procedure files.

use std::collections::BTreeMap;

use anyhow::{Context, Result, anyhow};
use ruststack_endpoints_core::compile;
use ruststack_endpoints_model::EndpointMetadata;
use tracing::info;

use crate::config::CodegenConfig;

/// Compile every configured service and return `<service>.json` -> content.
pub fn generate_all(
    config: &CodegenConfig,
    metadata: &EndpointMetadata,
) -> Result<BTreeMap<String, String>> {
    let mut files = BTreeMap::new();

    for service in config.services.keys() {
        let table = metadata
            .table(service)
            .with_context(|| format!("Invalid endpoint metadata for {service}"))?
            .ok_or_else(|| anyhow!("Service {service} is not present in endpoint metadata"))?;

        let supported = config.supported_for(service);
        let procedure = compile(&table, &supported)
            .with_context(|| format!("Failed to compile endpoints for {service}"))?;

        info!(
            service = %service,
            exceptions = procedure.exceptions().len(),
            "compiled service endpoints"
        );

        let mut json = procedure.to_json_pretty()?;
        json.push('\n');
        files.insert(format!("{service}.json"), json);
    }

    Ok(files)
}
