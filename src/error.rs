//! Error type for counter construction and export.
//!
//! Counter arithmetic never fails. Errors only come from the collaborators a
//! counter hands its data to: descriptor validation and registration in
//! `prometheus`, and JSON encoding of snapshots.

use thiserror::Error;

/// Unified error type for the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// The descriptor was rejected, or registration with a registry failed.
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    /// A snapshot could not be encoded.
    #[cfg(feature = "json")]
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
