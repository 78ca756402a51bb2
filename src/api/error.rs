//! API Error Types
//!
//! Failures seen by the client when calling the apostas API, and the rules
//! for turning them into user-facing text.

use thiserror::Error;

use super::body::ResponseBody;
use super::transport::TransportError;

/// Notice shown for any connection-level failure
pub const CONNECTION_ERROR_MESSAGE: &str = "Erro de conexão";

/// API call failures
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never got a response
    #[error("Connection error: {0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("HTTP {status}")]
    Status { status: u16, body: ResponseBody },

    /// Success status but the body did not have the expected shape
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl From<TransportError> for ApiError {
    fn from(e: TransportError) -> Self {
        ApiError::Transport(e.0)
    }
}

impl ApiError {
    /// Text to surface to the user for this failure.
    ///
    /// Connection failures always collapse to one generic notice. Status
    /// failures use the server's message when it sent one, else `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Transport(_) => CONNECTION_ERROR_MESSAGE.to_string(),
            ApiError::Status { body, .. } => {
                body.error_message().unwrap_or_else(|| fallback.to_string())
            }
            ApiError::Decode(_) => fallback.to_string(),
        }
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
