//! Client errors. None of these reach the UI as failures; the service turns
//! them into fallbacks or `{success: false}` results.

use caelinus_core::ErrorCode;

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("No backend base URL configured")]
    MissingBaseUrl,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid backend response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ErrorCode for ClientError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingBaseUrl => "CLIENT_MISSING_BASE_URL",
            Self::Http(e) if e.is_timeout() => "CLIENT_TIMEOUT",
            Self::Http(_) => "CLIENT_HTTP_ERROR",
            Self::Status { .. } => "CLIENT_BAD_STATUS",
            Self::Decode(_) => "CLIENT_DECODE_ERROR",
        }
    }
}
