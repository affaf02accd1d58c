//! Error types for the Hili client.

/// All errors that can occur when using the Hili client.
#[derive(Debug, thiserror::Error)]
pub enum HiliError {
    /// Missing or invalid configuration.
    #[error("hili config error: {0}")]
    Config(String),

    /// API returned an HTTP error.
    #[error("hili API error {status_code}: {message}")]
    Api {
        /// HTTP status code.
        status_code: u16,
        /// Error message from the API's `{error}` body.
        message: String,
    },

    /// Network or HTTP client error.
    #[error("hili network error: {0}")]
    Network(#[from] reqwest::Error),

    /// JSON serialization/deserialization error.
    #[error("hili json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HiliError {
    /// Whether this is an API error with the given status code.
    #[must_use]
    pub fn is_status(&self, status_code: u16) -> bool {
        matches!(self, Self::Api { status_code: s, .. } if *s == status_code)
    }
}
