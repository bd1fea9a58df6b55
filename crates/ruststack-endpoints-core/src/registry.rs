//! Per-service registry of compiled endpoint procedures.
//!
//! The registry is built once (from raw metadata or from the JSON files the
//! generator writes) and is read-only afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use ruststack_core::AwsRegion;
use ruststack_endpoints_model::{CompiledDecisionProcedure, EndpointMetadata};
use tracing::{debug, info};

use crate::compiler::compile;
use crate::error::RegistryError;
use crate::resolver::ServiceEndpoints;
use crate::signature::SupportedSignatureVersions;

/// Compiled endpoints for every known service.
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    services: HashMap<String, ServiceEndpoints>,
}

impl EndpointRegistry {
    /// Compile every service in `metadata` against the same signer set.
    pub fn compile(
        metadata: &EndpointMetadata,
        supported: &SupportedSignatureVersions,
        default_region: &AwsRegion,
    ) -> Result<Self, RegistryError> {
        let mut procedures = Vec::with_capacity(metadata.len());
        for table in metadata.tables()? {
            procedures.push(compile(&table, supported)?);
        }
        Ok(Self::from_procedures(procedures, default_region))
    }

    /// Wrap already compiled procedures.
    ///
    /// A later procedure for the same service replaces an earlier one.
    #[must_use]
    pub fn from_procedures<I>(procedures: I, default_region: &AwsRegion) -> Self
    where
        I: IntoIterator<Item = CompiledDecisionProcedure>,
    {
        let services = procedures
            .into_iter()
            .map(|procedure| {
                let endpoints = ServiceEndpoints::new(procedure, default_region.clone());
                (endpoints.service().to_owned(), endpoints)
            })
            .collect();
        Self { services }
    }

    /// Load every `*.json` procedure file in `dir`.
    pub fn load_dir(dir: &Path, default_region: &AwsRegion) -> Result<Self, RegistryError> {
        let read_err = |path: &Path, source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir).map_err(|e| read_err(dir, e))? {
            let path = entry.map_err(|e| read_err(dir, e))?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut procedures = Vec::with_capacity(paths.len());
        for path in &paths {
            let json = fs::read_to_string(path).map_err(|e| read_err(path, e))?;
            let procedure =
                CompiledDecisionProcedure::from_json(&json).map_err(|source| RegistryError::Procedure {
                    path: path.clone(),
                    source,
                })?;
            debug!(service = procedure.service(), path = %path.display(), "loaded endpoint procedure");
            procedures.push(procedure);
        }

        let registry = Self::from_procedures(procedures, default_region);
        info!(
            services = registry.len(),
            dir = %dir.display(),
            default_region = %default_region,
            "loaded compiled endpoint procedures"
        );
        Ok(registry)
    }

    /// Endpoints of `service`, if known.
    #[must_use]
    pub fn get(&self, service: &str) -> Option<&ServiceEndpoints> {
        self.services.get(service)
    }

    /// Known service names, sorted.
    #[must_use]
    pub fn services(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.services.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Whether the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
