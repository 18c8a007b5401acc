//! Error types for the ViaCEP client.

use thiserror::Error;

/// Result type for ViaCEP client operations.
pub type Result<T> = std::result::Result<T, ViaCepError>;

/// ViaCEP client errors.
#[derive(Debug, Error)]
pub enum ViaCepError {
    /// Configuration error (unusable base URL, client builder failure)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The code is not eight ASCII digits
    #[error("Invalid CEP: {0}")]
    InvalidCep(String),

    /// Network error (connection refused, DNS, reset)
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the client timeout
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// API error (non-2xx response)
    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// Parse error (invalid JSON, unexpected response format)
    #[error("Parse error: {0}")]
    Parse(String),
}
