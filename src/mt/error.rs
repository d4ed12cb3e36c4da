use thiserror::Error;

/// Error types for translation and backend access
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MtError {
    /// Language code is empty or carries characters no provider accepts
    #[error("Invalid locale: {0}")]
    InvalidLocale(String),
    /// Argument rejected before any request was made (e.g. empty text)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// Missing or rejected credentials, quota exhaustion, bad request
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Transport failure: connection, timeout, TLS
    #[error("Network error: {0}")]
    NetworkError(String),
    /// Provider answered but the answer is unusable
    #[error("Translation error: {0}")]
    TranslationError(String),
    /// Hortina backend request failed
    #[error("API error: {0}")]
    ApiError(String),
}

impl From<reqwest::Error> for MtError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MtError::NetworkError(format!("Request timed out: {}", err))
        } else if err.is_decode() {
            MtError::TranslationError(format!("Failed to decode response: {}", err))
        } else {
            MtError::NetworkError(err.to_string())
        }
    }
}

/// Result type for translation operations
pub type MtResult<T> = Result<T, MtError>;
