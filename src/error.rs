//! Client Errors

use thiserror::Error;

/// Failure of a single backend exchange
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// A response arrived with a failure status and a `message` explaining it
    #[error("{message} (HTTP {status})")]
    Rejected { status: u16, message: String },

    /// A failure status with no usable message, e.g. an HTML error page
    #[error("HTTP {0}")]
    Status(u16),

    /// No response was obtained at all
    #[error("transport failure: {0}")]
    Transport(String),

    /// The request body could not be serialized
    #[error("encode error: {0}")]
    Encode(String),

    /// The response body did not have the expected shape
    #[error("decode error: {0}")]
    Decode(String),
}

/// Problems reading the in-page client configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed client config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("client config element has no text")]
    Empty,
}
