//! Errors raised while loading endpoint metadata or compiled procedures.

/// Error produced when endpoint metadata or a serialized procedure is malformed.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// The input is not valid JSON for the expected shape.
    #[error("invalid endpoint metadata JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A region key uses the `_` prefix reserved for `_global` / `_default`.
    #[error("service {service}: unknown reserved key {key:?} in endpoint metadata")]
    ReservedKey {
        /// Service the key was found in.
        service: String,
        /// The offending key.
        key: String,
    },

    /// A serialized procedure lists its exceptions out of order or twice.
    #[error("service {service}: exception {region:?} is out of order or duplicated")]
    UnsortedExceptions {
        /// Service the procedure belongs to.
        service: String,
        /// First region breaking the ordering.
        region: String,
    },

    /// A serialized rule cannot produce a usable descriptor.
    #[error("service {service}: invalid rule for {scope}: {reason}")]
    InvalidRule {
        /// Service the procedure belongs to.
        service: String,
        /// `global`, `fallback` or the exception's region.
        scope: String,
        /// What is wrong with the rule.
        reason: String,
    },
}
