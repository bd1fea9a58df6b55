//! Error types for the RustStack core.

/// Core error type for RustStack infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum RustStackError {
    /// Region identifiers must be non-empty and free of whitespace.
    #[error("invalid AWS region: {0:?}")]
    InvalidRegion(String),
}

/// Convenience result type for RustStack operations.
pub type RustStackResult<T> = Result<T, RustStackError>;
