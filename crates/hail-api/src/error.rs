use thiserror::Error;

use hail_store::StoreError;

/// Errors produced by the REST layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, TLS, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response, with the server's message when it sent one.
    #[error("Server responded {status}: {message}")]
    Status { status: u16, message: String },

    /// 2xx response whose body did not have the expected shape.
    #[error("Unexpected response body: {0}")]
    Body(String),
}

impl From<ApiError> for StoreError {
    fn from(e: ApiError) -> Self {
        match e {
            // Surface the server's own message to the caller.
            ApiError::Status { message, .. } => StoreError::Remote(message),
            other => StoreError::Remote(other.to_string()),
        }
    }
}
