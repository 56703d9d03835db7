//! Error types for Palletize.

use thiserror::Error;

/// Result type alias for Palletize operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or solving a packing request.
#[derive(Debug, Error)]
pub enum Error {
    /// An item was flagged both assembled and bundled.
    #[error("item '{sku}' cannot be both assembled and bundled")]
    ConflictingFlags {
        /// SKU of the offending order line.
        sku: String,
    },

    /// Invalid item attributes.
    #[error("invalid item '{sku}': {reason}")]
    InvalidItem {
        /// SKU of the offending order line.
        sku: String,
        /// What was wrong with it.
        reason: String,
    },

    /// No optimization backend was compiled in.
    ///
    /// This is a startup/configuration error: a deployment without a MILP
    /// backend must fail initialization rather than degrade per request.
    #[error("no optimization backend available (build with the `milp` feature)")]
    BackendUnavailable,

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}
