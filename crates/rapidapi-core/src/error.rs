//! Error types for the RapidAPI clients
//!
//! Every failure a client can report is one of four kinds: a rejected
//! construction option, a transport failure, a non-200 response, or a body
//! that does not match the expected JSON schema. None of them are retried.

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for RapidAPI client operations
#[derive(Error, Debug)]
pub enum RapidApiError {
    /// A construction option was rejected, or the default HTTP client
    /// could not be built
    #[error("bad option: {0}")]
    Config(String),

    /// The request could not be executed or its body could not be read
    #[error("failed to execute request: {0}")]
    Execution(#[from] reqwest::Error),

    /// The service answered with something other than 200 OK
    #[error("http status code is not ok ({status}): {body}")]
    HttpStatus {
        /// Status code returned by the service
        status: StatusCode,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// The response body did not decode into the expected schema
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type alias for RapidAPI client operations
pub type Result<T> = std::result::Result<T, RapidApiError>;
