//! MARTA API error types.

/// Errors that can occur when talking to the MARTA rail API.
#[derive(Debug, thiserror::Error)]
pub enum MartaError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        /// Truncated response body, kept for debugging.
        body: Option<String>,
    },
}
