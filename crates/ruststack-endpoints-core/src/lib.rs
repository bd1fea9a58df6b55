//! Endpoint table compiler and runtime endpoint resolver.
//!
//! # Architecture
//!
//! ```text
//! EndpointTable + SupportedSignatureVersions
//!        |
//!        v
//! compiler::compile  (build time, once per service)
//!        |
//!        v
//! CompiledDecisionProcedure (immutable, shared via Arc)
//!        |
//!        v
//! resolver::resolve  (every outbound call, lock-free)
//!        |
//!        v
//! EndpointDescriptor -> transport + signer
//! ```
//!
//! Compilation folds the redundant per-region table into a fallback rule and
//! a sorted list of exceptions. Resolution is a pure lookup over that data.

pub mod compiler;
pub mod equality;
pub mod error;
pub mod registry;
pub mod resolver;
pub mod signature;
pub mod template;

pub use compiler::compile;
pub use error::{CompileError, RegistryError, ResolveError};
pub use registry::EndpointRegistry;
pub use resolver::{EndpointProvider, ServiceEndpoints, resolve};
pub use signature::SupportedSignatureVersions;
