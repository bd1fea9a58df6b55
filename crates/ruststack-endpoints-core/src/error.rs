//! Error types for endpoint compilation and resolution.
//!
//! [`CompileError`] is a build-time defect in service metadata and never
//! reaches request traffic. [`ResolveError`] is the only failure a caller can
//! observe at runtime.

use std::path::PathBuf;

use ruststack_endpoints_model::{MetadataError, SignatureVersion};

/// Defect found while compiling an endpoint table.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    /// A reachable rule shares no signature version with the client's signers.
    #[error(
        "service {service}: rule for {scope} declares signature versions {declared:?}, none of which is supported"
    )]
    DisjointSignatureVersions {
        /// Service being compiled.
        service: String,
        /// `global`, `default` or the region the rule applies to.
        scope: String,
        /// Versions the rule declared.
        declared: Vec<SignatureVersion>,
    },

    /// An endpoint template is not usable.
    #[error("service {service}: malformed endpoint template {template:?}: {reason}")]
    MalformedTemplate {
        /// Service being compiled.
        service: String,
        /// The template.
        template: String,
        /// What is wrong with it.
        reason: String,
    },

    /// Two partition lists claim the same region with different rules.
    #[error(
        "service {service}: region {region} is listed by partitions {first} and {second} with different rules"
    )]
    ConflictingRegionRule {
        /// Service being compiled.
        service: String,
        /// The contested region.
        region: String,
        /// Partition that listed the region first.
        first: String,
        /// Partition that listed it again.
        second: String,
    },

    /// A global rule must pin its signing region, since no region is known.
    #[error("service {service}: global endpoint without signRegion is not supported")]
    GlobalWithoutSignRegion {
        /// Service being compiled.
        service: String,
    },

    /// The assembled procedure was rejected.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

/// Failure to resolve an endpoint for a call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    /// No rule applies to the region and the service has no default.
    #[error("The region \"{region}\" is not supported by \"{service}\".")]
    UnsupportedRegion {
        /// Service the call targets.
        service: String,
        /// Region the caller asked for.
        region: String,
    },
}

impl ResolveError {
    /// Resolution failures are static; retrying the same call never helps.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }
}

/// Failure while building an [`crate::EndpointRegistry`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Reading a procedure file or directory failed.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path being read.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// A procedure file could not be parsed.
    #[error("invalid compiled procedure {}: {source}", path.display())]
    Procedure {
        /// Path being parsed.
        path: PathBuf,
        /// Underlying error.
        source: MetadataError,
    },

    /// Raw metadata could not be turned into tables.
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// A table failed to compile.
    #[error(transparent)]
    Compile(#[from] CompileError),
}
