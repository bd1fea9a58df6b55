//! Core types, configuration and errors for RustStack endpoint resolution.
//!
//! This crate provides the building blocks shared by the endpoint compiler,
//! the runtime resolver and the binaries: the [`AwsRegion`] identifier, the
//! process-wide [`RustStackConfig`] (which supplies the default region used
//! for region-less calls) and the [`RustStackError`] type.

mod config;
mod error;
mod types;

pub use config::RustStackConfig;
pub use error::{RustStackError, RustStackResult};
pub use types::AwsRegion;
