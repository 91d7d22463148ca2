use thiserror::Error;

/// Result type for MPO API client operations
pub type Result<T> = std::result::Result<T, MpoError>;

/// Errors that can occur when using the MPO API client
#[derive(Error, Debug)]
pub enum MpoError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Invalid URL provided
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The service rejected the request (HTTP 400)
    #[error("Request rejected: {0}")]
    Rejected(String),

    /// API returned any other error response
    #[error("API error: {0}")]
    ApiError(String),

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Invalid request configuration
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}
