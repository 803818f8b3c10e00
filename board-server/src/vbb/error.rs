//! VBB client error types.

/// Errors from the VBB HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum VbbError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// JSON deserialization failed
    #[error("JSON parse error: {message} (body: {body})")]
    Json { message: String, body: String },
}
