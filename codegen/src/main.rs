//! Endpoint procedure generator.
//!
//! Reads raw endpoint metadata and the generator config, compiles each
//! configured service into a decision procedure, and writes one JSON file
//! per service for the runtime resolver to load.
//!
//! ```text
//! ruststack-codegen [codegen.toml] [metadata/endpoints.json] [../endpoints]
//! ```

mod codegen;
mod config;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use ruststack_endpoints_model::EndpointMetadata;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::CodegenConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let config_path = args
        .get(1)
        .map_or_else(|| PathBuf::from("codegen.toml"), PathBuf::from);
    let metadata_path = args
        .get(2)
        .map_or_else(|| PathBuf::from("metadata/endpoints.json"), PathBuf::from);
    let output_dir = args
        .get(3)
        .map_or_else(|| PathBuf::from("../endpoints"), PathBuf::from);

    info!(config = %config_path.display(), metadata = %metadata_path.display(), "reading inputs");

    let config_toml = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let config = CodegenConfig::from_toml(&config_toml)?;

    let metadata_json = fs::read_to_string(&metadata_path)
        .with_context(|| format!("Failed to read metadata file: {}", metadata_path.display()))?;
    let metadata =
        EndpointMetadata::from_json(&metadata_json).context("Failed to parse endpoint metadata")?;

    info!(
        services = metadata.len(),
        configured = config.services.len(),
        "parsed endpoint metadata"
    );

    let files = codegen::generate_all(&config, &metadata).context("Failed to generate procedures")?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create directory: {}", output_dir.display()))?;
    for (rel_path, content) in &files {
        let full_path = output_dir.join(rel_path);
        write_if_changed(&full_path, content)?;
    }

    info!(files = files.len(), output = %output_dir.display(), "code generation complete");

    Ok(())
}

/// Write `content` to `path` unless the file already holds exactly that.
fn write_if_changed(path: &Path, content: &str) -> Result<()> {
    if fs::read_to_string(path).is_ok_and(|existing| existing == content) {
        info!(path = %path.display(), "unchanged");
        return Ok(());
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    info!(path = %path.display(), "wrote");
    Ok(())
}
