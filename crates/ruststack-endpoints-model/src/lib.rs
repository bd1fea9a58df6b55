//! Endpoint data model for RustStack API clients.
//!
//! This crate holds the plain data that flows through endpoint resolution:
//!
//! ```text
//! EndpointMetadata (raw JSON, per service)
//!        |
//!        v
//! EndpointTable (global / partition-default / partition / region rules)
//!        |  compiled once by ruststack-endpoints-core
//!        v
//! CompiledDecisionProcedure (fallback rule + sorted exceptions)
//!        |  resolved per request
//!        v
//! EndpointDescriptor (endpoint, signing region/service, signature versions)
//! ```
//!
//! Nothing in here performs compilation or resolution; see
//! `ruststack-endpoints-core` for the algorithms.

pub mod descriptor;
pub mod error;
pub mod procedure;
pub mod rule;
pub mod signature;
pub mod table;

pub use descriptor::EndpointDescriptor;
pub use error::MetadataError;
pub use procedure::{
    CompiledDecisionProcedure, FallbackRule, GlobalRegionBody, REGION_PLACEHOLDER, RegionException,
    ResolvedRule,
};
pub use rule::{EndpointRule, PartitionRule};
pub use signature::SignatureVersion;
pub use table::{EndpointMetadata, EndpointTable, MAIN_PARTITION, RawEndpoints, RawPartitionEntry};
