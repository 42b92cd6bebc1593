//! Rick and Morty API-specific error types.

/// Errors that can occur while fetching from the Rick and Morty API.
///
/// Every failure mode of the fetch path lands here: transport errors,
/// non-success status codes, and response bodies that do not conform to
/// the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed in transport
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Failed to deserialize API response
    #[error("Failed to deserialize API response: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// Generic API error
    #[error("API error: {0}")]
    #[allow(dead_code)]
    Other(String),
}
