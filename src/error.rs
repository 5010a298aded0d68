//! Catalog errors
//!
//! Error types for catalog queries and tool dispatch.

use thiserror::Error;

/// JSON-RPC code for invalid method parameters
pub const INVALID_PARAMS: i64 = -32602;

/// JSON-RPC code for an unknown method or tool
pub const METHOD_NOT_FOUND: i64 = -32601;

/// JSON-RPC code for a server-side failure
pub const INTERNAL_ERROR: i64 = -32603;

/// Errors that can occur while querying the catalog
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    #[error("Duplicate module name: {0}")]
    DuplicateModule(String),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl CatalogError {
    /// Build an `InvalidArgument` for a missing or malformed string parameter
    pub fn missing_param(param: &str) -> Self {
        Self::InvalidArgument(format!(
            "Missing required parameter: {} (expected a non-empty string)",
            param
        ))
    }

    /// JSON-RPC error code reported for this error
    pub fn code(&self) -> i64 {
        match self {
            Self::InvalidArgument(_) | Self::DuplicateModule(_) => INVALID_PARAMS,
            Self::UnknownOperation(_) => METHOD_NOT_FOUND,
            Self::Serialization(_) => INTERNAL_ERROR,
        }
    }
}
